use anchor_lang::prelude::*;

use crate::{
    constants::{NAME_LEN, SYMBOL_LEN},
    engine::{FeeLedger, PoolTotals},
    state::FeeSchedule,
};

#[account]
#[derive(InitSpace, Default)]
pub struct Pool {
    pub admin: Pubkey,
    pub asset_mint: Pubkey,
    pub asset_vault: Pubkey,
    pub fee_recipient: Pubkey,
    pub name: [u8; NAME_LEN],
    pub symbol: [u8; SYMBOL_LEN],
    pub fees: FeeSchedule,
    pub ledger: FeeLedger,
    pub total_shares: u128,
    pub total_basis: u128,
    pub last_accrual_ts: i64,
    pub bump: u8,
}

impl Pool {
    /// Vault balance net of fees owed to the operator, floored at zero.
    pub fn total_assets(&self, vault_balance: u64) -> u64 {
        (vault_balance as i128)
            .saturating_sub(self.ledger.accrued_fees)
            .clamp(0, u64::MAX as i128) as u64
    }

    pub fn totals(&self, vault_balance: u64) -> PoolTotals {
        PoolTotals::new(self.total_assets(vault_balance), self.total_shares)
    }
}
