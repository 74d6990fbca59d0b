use anchor_lang::prelude::*;

use crate::state::{DepositorPosition, Pool};

pub fn handler(ctx: Context<CreatePosition>) -> Result<()> {
    let position = &mut ctx.accounts.position;
    position.owner = ctx.accounts.user.key();
    position.pool = ctx.accounts.pool.key();
    position.shares = 0;
    position.cost_basis = 0;
    position.bump = ctx.bumps.position;
    Ok(())
}

#[derive(Accounts)]
pub struct CreatePosition<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init,
        payer = user,
        seeds = [b"position", pool.key().as_ref(), user.key().as_ref()],
        bump,
        space = 8 + DepositorPosition::INIT_SPACE,
    )]
    pub position: Account<'info, DepositorPosition>,
    pub system_program: Program<'info, System>,
}
