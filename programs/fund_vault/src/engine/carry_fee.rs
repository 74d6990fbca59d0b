//! Performance fee charged on realized gain over a position's cost basis.
//!
//! The carry is assessed on proceeds that have already had the withdrawal
//! fee removed, so the two fees never compound on the same units.

use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    math::{mul_bps_ceil, mul_div_floor, to_u64},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarryCharge {
    /// Portion of the position's basis retired by the exit.
    pub basis_consumed: u64,
    pub gain: u64,
    pub fee: u64,
}

/// Basis attributable to `shares_out` of a position holding `position_shares`,
/// rounded down.
pub fn basis_consumed(basis: u64, shares_out: u128, position_shares: u128) -> Result<u64> {
    require!(position_shares > 0, ErrorCode::InsufficientBalance);
    to_u64(mul_div_floor(basis as u128, shares_out, position_shares)?)
}

/// Carry on `proceeds` against the retired basis. Losses are never charged.
pub fn assess(proceeds: u64, basis_consumed: u64, carry_fee_bps: u16) -> Result<CarryCharge> {
    let gain = proceeds.saturating_sub(basis_consumed);
    let fee = if gain == 0 || carry_fee_bps == 0 {
        0
    } else {
        mul_bps_ceil(gain, carry_fee_bps)?
    };
    Ok(CarryCharge {
        basis_consumed,
        gain,
        fee,
    })
}

/// Net of carry for a given post-withdrawal-fee amount.
pub fn net_of_carry(proceeds: u64, charge: &CarryCharge) -> Result<u64> {
    proceeds
        .checked_sub(charge.fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}
