use anchor_lang::prelude::*;

use crate::{error::ErrorCode, events::AnnualFeeAccrued, state::Pool};

pub fn require_admin(admin: &Signer<'_>, pool: &Account<Pool>) -> Result<()> {
    require_keys_eq!(admin.key(), pool.admin, ErrorCode::Unauthorized);
    Ok(())
}

pub fn emit_annual_fee(pool: &Account<Pool>, fee: u64, now: i64) {
    if fee == 0 {
        return;
    }
    msg!("Annual fee accrued: {}", fee);
    emit!(AnnualFeeAccrued {
        pool: pool.key(),
        fee,
        accrued_fees: pool.ledger.accrued_fees,
        timestamp: now,
    });
}
