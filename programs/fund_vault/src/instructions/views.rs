//! Read-only quotes. Each one prices against the pool as it would look after
//! the pending annual fee is booked, so a quote matches the operation it
//! previews when both run at the same timestamp.

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    engine::orchestrator,
    state::{DepositorPosition, Pool},
};

pub fn total_assets(ctx: Context<PoolView>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let totals =
        orchestrator::projected_totals(&ctx.accounts.pool, ctx.accounts.asset_vault.amount, now)?;
    Ok(totals.total_assets)
}

pub fn convert_to_shares(ctx: Context<PoolView>, assets: u64) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::projected_totals(&ctx.accounts.pool, ctx.accounts.asset_vault.amount, now)?
        .convert_to_shares(assets)
}

pub fn convert_to_assets(ctx: Context<PoolView>, shares: u128) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::projected_totals(&ctx.accounts.pool, ctx.accounts.asset_vault.amount, now)?
        .convert_to_assets(shares)
}

pub fn preview_deposit(ctx: Context<PoolView>, assets: u64) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::preview_deposit(&ctx.accounts.pool, assets, ctx.accounts.asset_vault.amount, now)
}

pub fn preview_mint(ctx: Context<PoolView>, shares: u128) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::preview_mint(&ctx.accounts.pool, shares, ctx.accounts.asset_vault.amount, now)
}

pub fn preview_withdraw(ctx: Context<PositionView>, assets: u64) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::preview_withdraw(
        &ctx.accounts.pool,
        &ctx.accounts.position,
        assets,
        ctx.accounts.asset_vault.amount,
        now,
    )
}

pub fn preview_redeem(ctx: Context<PositionView>, shares: u128) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::preview_redeem(
        &ctx.accounts.pool,
        &ctx.accounts.position,
        shares,
        ctx.accounts.asset_vault.amount,
        now,
    )
}

pub fn max_withdraw(ctx: Context<PositionView>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    orchestrator::max_withdraw(
        &ctx.accounts.pool,
        &ctx.accounts.position,
        ctx.accounts.asset_vault.amount,
        now,
    )
}

pub fn max_redeem(ctx: Context<PositionView>) -> Result<u128> {
    Ok(orchestrator::max_redeem(&ctx.accounts.position))
}

#[derive(Accounts)]
pub struct PoolView<'info> {
    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
}

#[derive(Accounts)]
pub struct PositionView<'info> {
    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        seeds = [b"position", pool.key().as_ref(), position.owner.as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, DepositorPosition>,
}
