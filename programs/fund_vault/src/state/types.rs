use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

/// Fee rates fixed at pool creation, all in basis points.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, InitSpace, PartialEq, Eq)]
pub struct FeeSchedule {
    pub withdrawal_fee_bps: u16,
    pub carry_fee_bps: u16,
    pub annual_fee_bps: u16,
}

impl FeeSchedule {
    pub fn new(withdrawal_fee_bps: u16, carry_fee_bps: u16, annual_fee_bps: u16) -> Result<Self> {
        let schedule = Self {
            withdrawal_fee_bps,
            carry_fee_bps,
            annual_fee_bps,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            (self.withdrawal_fee_bps as u64) < BPS_DENOM,
            ErrorCode::InvalidFeeBps
        );
        require!(
            (self.carry_fee_bps as u64) < BPS_DENOM,
            ErrorCode::InvalidFeeBps
        );
        require!(
            (self.annual_fee_bps as u64) < BPS_DENOM,
            ErrorCode::InvalidFeeBps
        );
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, InitSpace, PartialEq, Eq)]
pub enum GateMode {
    /// Nobody may perform the action.
    Closed,
    /// Only identities on the pool allowlist.
    Allowlisted,
    Open,
}

impl Default for GateMode {
    fn default() -> Self {
        GateMode::Open
    }
}
