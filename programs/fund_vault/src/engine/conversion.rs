use anchor_lang::prelude::*;

use crate::math::{mul_div_ceil, mul_div_floor, to_u64};

/// Pool totals a conversion is priced against.
///
/// `total_assets` is the value held on behalf of shareholders: the vault
/// balance net of fees owed to the operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolTotals {
    pub total_assets: u64,
    pub total_shares: u128,
}

impl PoolTotals {
    pub fn new(total_assets: u64, total_shares: u128) -> Self {
        Self {
            total_assets,
            total_shares,
        }
    }

    /// Shares worth `assets`, rounded down. An empty pool prices 1:1.
    pub fn convert_to_shares(&self, assets: u64) -> Result<u128> {
        if self.total_shares == 0 {
            return Ok(assets as u128);
        }
        mul_div_floor(
            assets as u128,
            self.total_shares,
            self.total_assets as u128,
        )
    }

    /// Assets backing `shares`, rounded down. An empty pool values shares at zero.
    pub fn convert_to_assets(&self, shares: u128) -> Result<u64> {
        if self.total_shares == 0 {
            return Ok(0);
        }
        to_u64(mul_div_floor(
            shares,
            self.total_assets as u128,
            self.total_shares,
        )?)
    }

    /// Shares that must be burned to release `assets`, rounded up.
    pub fn shares_to_release(&self, assets: u64) -> Result<u128> {
        if self.total_shares == 0 {
            return Ok(assets as u128);
        }
        mul_div_ceil(
            assets as u128,
            self.total_shares,
            self.total_assets as u128,
        )
    }

    /// Assets that must be paid in to mint `shares`, rounded up.
    pub fn assets_to_mint(&self, shares: u128) -> Result<u64> {
        if self.total_shares == 0 {
            return to_u64(shares);
        }
        to_u64(mul_div_ceil(
            shares,
            self.total_assets as u128,
            self.total_shares,
        )?)
    }
}
