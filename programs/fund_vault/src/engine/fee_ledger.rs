use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Running balance of fees owed to the operator.
///
/// `accrued_fees` is positive while the operator is owed fees and negative
/// after an advance has been drawn against future accruals.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, InitSpace, PartialEq, Eq)]
pub struct FeeLedger {
    pub accrued_fees: i128,
    pub advance_enabled: bool,
    pub one_time_fee_enabled: bool,
}

impl FeeLedger {
    pub fn new(advance_enabled: bool, one_time_fee_enabled: bool) -> Self {
        Self {
            accrued_fees: 0,
            advance_enabled,
            one_time_fee_enabled,
        }
    }

    pub fn accrue(&mut self, fee: u64) -> Result<()> {
        self.accrued_fees = self
            .accrued_fees
            .checked_add(fee as i128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn draw(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        if (amount as i128) > self.accrued_fees {
            require!(self.advance_enabled, ErrorCode::AdvanceDisabled);
        }
        self.accrued_fees = self
            .accrued_fees
            .checked_sub(amount as i128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    pub fn repay(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, ErrorCode::InvalidAmount);
        self.accrue(amount)
    }

    /// Operator-set adjustment, only while one-time fees remain enabled.
    pub fn apply_one_time_fee(&mut self, amount: i64) -> Result<()> {
        require!(self.one_time_fee_enabled, ErrorCode::OneTimeFeeDisabled);
        self.accrued_fees = self
            .accrued_fees
            .checked_add(amount as i128)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// One-way: once disabled, one-time fees cannot be turned back on.
    pub fn disable_one_time_fee(&mut self) {
        self.one_time_fee_enabled = false;
    }

    pub fn set_advance_enabled(&mut self, enabled: bool) {
        self.advance_enabled = enabled;
    }
}
