//! Rounding-aware integer helpers. Every conversion and fee formula in the
//! engine goes through these so the rounding direction is always explicit.

use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn div_floor(numerator: u128, denominator: u128) -> Result<u128> {
    require!(denominator != 0, ErrorCode::DivisionByZero);
    Ok(numerator / denominator)
}

pub fn div_ceil(numerator: u128, denominator: u128) -> Result<u128> {
    require!(denominator != 0, ErrorCode::DivisionByZero);
    let quotient = numerator / denominator;
    if numerator % denominator == 0 {
        Ok(quotient)
    } else {
        quotient
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    }
}

pub fn mul_div_floor(a: u128, b: u128, denominator: u128) -> Result<u128> {
    div_floor(checked_mul(a, b)?, denominator)
}

pub fn mul_div_ceil(a: u128, b: u128, denominator: u128) -> Result<u128> {
    div_ceil(checked_mul(a, b)?, denominator)
}

/// `value * bps / 10_000`, rounded down.
pub fn mul_bps_floor(value: u64, bps: u16) -> Result<u64> {
    to_u64(mul_div_floor(value as u128, bps as u128, BPS_DENOM as u128)?)
}

/// `value * bps / 10_000`, rounded up.
pub fn mul_bps_ceil(value: u64, bps: u16) -> Result<u64> {
    to_u64(mul_div_ceil(value as u128, bps as u128, BPS_DENOM as u128)?)
}

/// Smallest gross amount that still leaves `net` after a `bps` haircut:
/// `ceil(net * 10_000 / (10_000 - bps))`.
pub fn gross_up_bps(net: u64, bps: u16) -> Result<u64> {
    let keep = (BPS_DENOM as u128)
        .checked_sub(bps as u128)
        .ok_or_else(|| error!(ErrorCode::InvalidFeeBps))?;
    to_u64(mul_div_ceil(net as u128, BPS_DENOM as u128, keep)?)
}

pub fn checked_mul(a: u128, b: u128) -> Result<u128> {
    a.checked_mul(b)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(ErrorCode::MathOverflow))
}
