use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{DepositorPosition, Pool},
};

pub fn handler(ctx: Context<ClosePosition>) -> Result<()> {
    let position = &ctx.accounts.position;
    require_keys_eq!(position.owner, ctx.accounts.user.key(), ErrorCode::Unauthorized);
    require!(position.shares == 0, ErrorCode::PositionNotEmpty);
    Ok(())
}

#[derive(Accounts)]
pub struct ClosePosition<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        close = user,
        seeds = [b"position", pool.key().as_ref(), user.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Account<'info, DepositorPosition>,
}
