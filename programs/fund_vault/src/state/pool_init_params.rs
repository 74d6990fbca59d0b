use anchor_lang::prelude::*;

use crate::{
    constants::{NAME_LEN, SYMBOL_LEN},
    error::ErrorCode,
    state::{FeeSchedule, GateMode},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PoolInitParams {
    pub name: String,
    pub symbol: String,
    pub withdrawal_fee_bps: u16,
    pub carry_fee_bps: u16,
    pub annual_fee_bps: u16,
    pub advance_enabled: bool,
    pub one_time_fee_enabled: bool,
}

impl PoolInitParams {
    pub fn validate(&self) -> Result<FeeSchedule> {
        let fees = FeeSchedule::new(
            self.withdrawal_fee_bps,
            self.carry_fee_bps,
            self.annual_fee_bps,
        )?;
        to_fixed::<NAME_LEN>(&self.name, false)?;
        to_fixed::<SYMBOL_LEN>(&self.symbol, true)?;
        Ok(fees)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessParams {
    pub paused: bool,
    pub deposit_mode: GateMode,
    pub withdraw_mode: GateMode,
    pub transfer_mode: GateMode,
}

pub fn to_fixed<const N: usize>(value: &str, allow_empty: bool) -> Result<[u8; N]> {
    let bytes = value.as_bytes();
    require!(
        (allow_empty || !bytes.is_empty()) && bytes.len() <= N,
        ErrorCode::InvalidName
    );

    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}
