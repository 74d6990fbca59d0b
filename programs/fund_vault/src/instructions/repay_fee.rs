use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    engine::orchestrator,
    error::ErrorCode,
    events::FeeRepaid,
    helpers::{emit_annual_fee, require_admin},
    state::Pool,
};

pub fn handler(ctx: Context<RepayFee>, amount: u64) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    let now = Clock::get()?.unix_timestamp;

    let vault_balance = ctx.accounts.asset_vault.amount;
    let annual_fee = orchestrator::repay_fee(&mut ctx.accounts.pool, amount, vault_balance, now)?;
    emit_annual_fee(&ctx.accounts.pool, annual_fee, now);

    let cpi_accounts = Transfer {
        from: ctx.accounts.payer_token_account.to_account_info(),
        to: ctx.accounts.asset_vault.to_account_info(),
        authority: ctx.accounts.admin.to_account_info(),
    };
    token::transfer(
        CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts),
        amount,
    )?;

    emit!(FeeRepaid {
        pool: ctx.accounts.pool.key(),
        payer: ctx.accounts.admin.key(),
        amount,
        accrued_fees: ctx.accounts.pool.ledger.accrued_fees,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RepayFee<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(mut, address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = payer_token_account.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = payer_token_account.owner == admin.key() @ ErrorCode::Unauthorized,
    )]
    pub payer_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
