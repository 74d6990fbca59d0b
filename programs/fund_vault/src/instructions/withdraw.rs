use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    engine::orchestrator,
    error::ErrorCode,
    events::Withdrawn,
    helpers::emit_annual_fee,
    state::{AccessPolicy, DepositorPosition, Pool},
};

pub fn handler(mut ctx: Context<WithdrawAssets>, assets: u64) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.owner_position.owner,
        ctx.accounts.owner.key(),
        ErrorCode::Unauthorized
    );

    let vault_balance = ctx.accounts.asset_vault.amount;
    let accounts = &mut ctx.accounts;
    let receipt = orchestrator::withdraw(
        &*accounts.access_policy,
        &mut accounts.pool,
        &mut accounts.owner_position,
        assets,
        vault_balance,
        now,
    )?;
    emit_annual_fee(&accounts.pool, receipt.annual_fee, now);

    let exit = receipt.settlement;
    let vault_auth_bump = ctx.bumps.vault_auth;
    let pool_key = ctx.accounts.pool.key();
    let signer_seed_group: &[&[u8]] = &[b"vault-auth", pool_key.as_ref(), &[vault_auth_bump]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.asset_vault.to_account_info(),
        to: ctx.accounts.receiver_token_account.to_account_info(),
        authority: ctx.accounts.vault_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        exit.assets_out,
    )?;

    msg!(
        "Withdrew {} assets for {} shares (withdrawal fee {}, carry {})",
        exit.assets_out,
        exit.shares,
        exit.withdrawal.fee,
        exit.carry.fee
    );
    emit!(Withdrawn {
        pool: pool_key,
        owner: ctx.accounts.owner.key(),
        receiver: ctx.accounts.receiver_token_account.owner,
        shares: exit.shares,
        assets: exit.assets_out,
        withdrawal_fee: exit.withdrawal.fee,
        carry_fee: exit.carry.fee,
    });

    Ok(exit.shares)
}

#[derive(Accounts)]
pub struct WithdrawAssets<'info> {
    pub owner: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        seeds = [b"access", pool.key().as_ref()],
        bump = access_policy.bump,
    )]
    pub access_policy: Account<'info, AccessPolicy>,
    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), owner.key().as_ref()],
        bump = owner_position.bump,
    )]
    pub owner_position: Account<'info, DepositorPosition>,
    /// CHECK: vault authority PDA.
    #[account(seeds = [b"vault-auth", pool.key().as_ref()], bump)]
    pub vault_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = receiver_token_account.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub receiver_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
