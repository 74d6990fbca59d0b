use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    math::{gross_up_bps, mul_bps_floor},
};

/// Split of value leaving the pool into the flat fee and what remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithdrawalFee {
    pub gross: u64,
    pub fee: u64,
    pub net: u64,
}

/// Share-specified exit: the fee is taken out of `gross`, rounded down.
pub fn on_gross(gross: u64, fee_bps: u16) -> Result<WithdrawalFee> {
    let fee = mul_bps_floor(gross, fee_bps)?;
    let net = gross
        .checked_sub(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok(WithdrawalFee { gross, fee, net })
}

/// Asset-specified exit: gross is grossed up so `net` survives the fee.
pub fn for_net(net: u64, fee_bps: u16) -> Result<WithdrawalFee> {
    let gross = gross_up_bps(net, fee_bps)?;
    let fee = gross
        .checked_sub(net)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok(WithdrawalFee { gross, fee, net })
}
