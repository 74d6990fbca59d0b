use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, SECONDS_PER_YEAR},
    error::ErrorCode,
    math::{checked_mul, div_floor, to_u64},
};

/// Management fee owed on `total_basis` for the time since `last_accrual_ts`.
///
/// `floor(total_basis * bps * elapsed / (10_000 * SECONDS_PER_YEAR))`. A clock
/// that has not advanced accrues nothing.
pub fn accrued_since(total_basis: u128, annual_fee_bps: u16, last_accrual_ts: i64, now: i64) -> Result<u64> {
    if annual_fee_bps == 0 || total_basis == 0 || now <= last_accrual_ts {
        return Ok(0);
    }

    let elapsed = now
        .checked_sub(last_accrual_ts)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let numerator = checked_mul(
        checked_mul(total_basis, annual_fee_bps as u128)?,
        elapsed as u128,
    )?;
    let denominator = checked_mul(BPS_DENOM as u128, SECONDS_PER_YEAR as u128)?;
    to_u64(div_floor(numerator, denominator)?)
}
