use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    engine::orchestrator,
    error::ErrorCode,
    events::SharesTransferred,
    helpers::emit_annual_fee,
    state::{AccessPolicy, DepositorPosition, Pool},
};

pub fn handler(mut ctx: Context<TransferShares>, shares: u128) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.from_position.owner,
        ctx.accounts.owner.key(),
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.to_position.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidPosition
    );

    let vault_balance = ctx.accounts.asset_vault.amount;
    let accounts = &mut ctx.accounts;
    let receipt = orchestrator::transfer_shares(
        &*accounts.access_policy,
        &mut accounts.pool,
        &mut accounts.from_position,
        &mut accounts.to_position,
        shares,
        vault_balance,
        now,
    )?;
    emit_annual_fee(&accounts.pool, receipt.annual_fee, now);

    let transfer = receipt.settlement;
    emit!(SharesTransferred {
        pool: accounts.pool.key(),
        from: accounts.from_position.owner,
        to: accounts.to_position.owner,
        shares: transfer.shares,
        basis_moved: transfer.basis_moved,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferShares<'info> {
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
        bump = from_position.bump,
    )]
    pub from_position: Account<'info, DepositorPosition>,
    #[account(
        mut,
        seeds = [b"position", pool.key().as_ref(), to_position.owner.as_ref()],
        bump = to_position.bump,
    )]
    pub to_position: Account<'info, DepositorPosition>,
    #[account(address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
}
