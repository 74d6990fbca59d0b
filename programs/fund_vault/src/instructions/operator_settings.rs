use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    engine::orchestrator,
    events::{AdvanceToggled, OneTimeFeeSet, OneTimeFeesDisabled},
    helpers::{emit_annual_fee, require_admin},
    state::Pool,
};

pub fn set_one_time_fee(ctx: Context<OneTimeFee>, amount: i64) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    let now = Clock::get()?.unix_timestamp;

    let vault_balance = ctx.accounts.asset_vault.amount;
    let annual_fee =
        orchestrator::set_one_time_fee(&mut ctx.accounts.pool, amount, vault_balance, now)?;
    emit_annual_fee(&ctx.accounts.pool, annual_fee, now);

    msg!("One-time fee {}", amount);
    emit!(OneTimeFeeSet {
        pool: ctx.accounts.pool.key(),
        amount,
        accrued_fees: ctx.accounts.pool.ledger.accrued_fees,
    });
    Ok(())
}

pub fn disable_one_time_fee(ctx: Context<OperatorSettings>) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    ctx.accounts.pool.ledger.disable_one_time_fee();
    msg!("One-time fees disabled");
    emit!(OneTimeFeesDisabled {
        pool: ctx.accounts.pool.key(),
        accrued_fees: ctx.accounts.pool.ledger.accrued_fees,
    });
    Ok(())
}

pub fn set_advance_enabled(ctx: Context<OperatorSettings>, enabled: bool) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    ctx.accounts.pool.ledger.set_advance_enabled(enabled);
    emit!(AdvanceToggled {
        pool: ctx.accounts.pool.key(),
        enabled,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct OperatorSettings<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

#[derive(Accounts)]
pub struct OneTimeFee<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
}
