use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    engine::orchestrator,
    error::ErrorCode,
    events::FeeDrawn,
    helpers::{emit_annual_fee, require_admin},
    state::Pool,
};

pub fn handler(ctx: Context<DrawFee>, amount: u64) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    let now = Clock::get()?.unix_timestamp;

    let vault_balance = ctx.accounts.asset_vault.amount;
    let annual_fee = orchestrator::draw_fee(&mut ctx.accounts.pool, amount, vault_balance, now)?;
    emit_annual_fee(&ctx.accounts.pool, annual_fee, now);

    let vault_auth_bump = ctx.bumps.vault_auth;
    let pool_key = ctx.accounts.pool.key();
    let signer_seed_group: &[&[u8]] = &[b"vault-auth", pool_key.as_ref(), &[vault_auth_bump]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.asset_vault.to_account_info(),
        to: ctx.accounts.recipient_token_account.to_account_info(),
        authority: ctx.accounts.vault_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount,
    )?;

    msg!(
        "Drew {} in fees, accrued now {}",
        amount,
        ctx.accounts.pool.ledger.accrued_fees
    );
    emit!(FeeDrawn {
        pool: pool_key,
        recipient: ctx.accounts.pool.fee_recipient,
        amount,
        accrued_fees: ctx.accounts.pool.ledger.accrued_fees,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DrawFee<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: vault authority PDA.
    #[account(seeds = [b"vault-auth", pool.key().as_ref()], bump)]
    pub vault_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = recipient_token_account.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = recipient_token_account.owner == pool.fee_recipient @ ErrorCode::InvalidTokenAccount,
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
