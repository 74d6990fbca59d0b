#![allow(dead_code)]

use anchor_lang::{error::Error, prelude::*};
use fund_vault::{
    engine::{orchestrator, Entry, Exit, FeeLedger, Receipt, ShareTransfer},
    error::ErrorCode,
    state::{AccessPolicy, DepositorPosition, FeeSchedule, Pool},
};

pub fn assert_error(err: Error, expected: ErrorCode) {
    match err {
        Error::AnchorError(anchor) => {
            assert_eq!(anchor.error_code_number, u32::from(expected), "{anchor:?}")
        }
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

pub fn investor() -> DepositorPosition {
    DepositorPosition {
        owner: Pubkey::new_unique(),
        ..Default::default()
    }
}

/// A pool plus the token balance its vault would hold, kept in step with
/// every settled operation.
pub struct Fund {
    pub pool: Pool,
    pub gate: AccessPolicy,
    pub vault: u64,
    pub now: i64,
}

impl Fund {
    pub fn new(withdrawal_fee_bps: u16, carry_fee_bps: u16, annual_fee_bps: u16) -> Self {
        let fees = FeeSchedule::new(withdrawal_fee_bps, carry_fee_bps, annual_fee_bps).unwrap();
        Self {
            pool: Pool {
                fees,
                ledger: FeeLedger::new(false, true),
                ..Default::default()
            },
            gate: AccessPolicy::default(),
            vault: 0,
            now: 0,
        }
    }

    pub fn total_assets(&self) -> u64 {
        self.pool.total_assets(self.vault)
    }

    /// Yield or loss landing in the vault outside of any pool operation.
    pub fn set_vault(&mut self, balance: u64) {
        self.vault = balance;
    }

    pub fn deposit(&mut self, position: &mut DepositorPosition, assets: u64) -> Result<Receipt<Entry>> {
        let caller = position.owner;
        let receipt = orchestrator::deposit(
            &self.gate,
            &mut self.pool,
            position,
            &caller,
            assets,
            self.vault,
            self.now,
        )?;
        self.vault += receipt.settlement.assets;
        Ok(receipt)
    }

    pub fn mint(&mut self, position: &mut DepositorPosition, shares: u128) -> Result<Receipt<Entry>> {
        let caller = position.owner;
        let receipt = orchestrator::mint(
            &self.gate,
            &mut self.pool,
            position,
            &caller,
            shares,
            self.vault,
            self.now,
        )?;
        self.vault += receipt.settlement.assets;
        Ok(receipt)
    }

    pub fn withdraw(&mut self, position: &mut DepositorPosition, assets: u64) -> Result<Receipt<Exit>> {
        let receipt = orchestrator::withdraw(
            &self.gate,
            &mut self.pool,
            position,
            assets,
            self.vault,
            self.now,
        )?;
        self.vault -= receipt.settlement.assets_out;
        Ok(receipt)
    }

    pub fn redeem(&mut self, position: &mut DepositorPosition, shares: u128) -> Result<Receipt<Exit>> {
        let receipt = orchestrator::redeem(
            &self.gate,
            &mut self.pool,
            position,
            shares,
            self.vault,
            self.now,
        )?;
        self.vault -= receipt.settlement.assets_out;
        Ok(receipt)
    }

    pub fn transfer(
        &mut self,
        from: &mut DepositorPosition,
        to: &mut DepositorPosition,
        shares: u128,
    ) -> Result<Receipt<ShareTransfer>> {
        orchestrator::transfer_shares(
            &self.gate,
            &mut self.pool,
            from,
            to,
            shares,
            self.vault,
            self.now,
        )
    }

    pub fn draw_fee(&mut self, amount: u64) -> Result<u64> {
        let annual = orchestrator::draw_fee(&mut self.pool, amount, self.vault, self.now)?;
        self.vault -= amount;
        Ok(annual)
    }

    pub fn repay_fee(&mut self, amount: u64) -> Result<u64> {
        let annual = orchestrator::repay_fee(&mut self.pool, amount, self.vault, self.now)?;
        self.vault += amount;
        Ok(annual)
    }
}
