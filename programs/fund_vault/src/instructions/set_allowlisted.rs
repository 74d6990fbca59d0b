use anchor_lang::prelude::*;

use crate::{
    helpers::require_admin,
    state::{AccessPolicy, Pool},
};

pub fn handler(ctx: Context<SetAllowlisted>, identity: Pubkey, allowed: bool) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    ctx.accounts
        .access_policy
        .set_allowlisted(identity, allowed)?;
    msg!("Allowlist {}: {}", identity, allowed);
    Ok(())
}

#[derive(Accounts)]
pub struct SetAllowlisted<'info> {
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
