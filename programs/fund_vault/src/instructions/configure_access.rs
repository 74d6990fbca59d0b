use anchor_lang::prelude::*;

use crate::{
    events::AccessConfigured,
    helpers::require_admin,
    state::{AccessParams, AccessPolicy, Pool},
};

pub fn handler(ctx: Context<ConfigureAccess>, params: AccessParams) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;

    let access = &mut ctx.accounts.access_policy;
    access.paused = params.paused;
    access.deposit_mode = params.deposit_mode;
    access.withdraw_mode = params.withdraw_mode;
    access.transfer_mode = params.transfer_mode;

    emit!(AccessConfigured {
        pool: ctx.accounts.pool.key(),
        paused: params.paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigureAccess<'info> {
    pub admin: Signer<'info>,
    #[account(
        seeds = [b"pool", pool.asset_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [b"access", pool.key().as_ref()],
        bump = access_policy.bump,
    )]
    pub access_policy: Account<'info, AccessPolicy>,
}
