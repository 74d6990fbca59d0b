use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{NAME_LEN, SYMBOL_LEN},
    engine::FeeLedger,
    events::PoolInitialized,
    state::{to_fixed, AccessPolicy, GateMode, Pool, PoolInitParams},
};

pub fn handler(ctx: Context<InitializePool>, params: PoolInitParams) -> Result<()> {
    let fees = params.validate()?;
    let now = Clock::get()?.unix_timestamp;

    let pool = &mut ctx.accounts.pool;
    pool.admin = ctx.accounts.admin.key();
    pool.asset_mint = ctx.accounts.asset_mint.key();
    pool.asset_vault = ctx.accounts.asset_vault.key();
    pool.fee_recipient = ctx.accounts.fee_recipient.key();
    pool.name = to_fixed::<NAME_LEN>(&params.name, false)?;
    pool.symbol = to_fixed::<SYMBOL_LEN>(&params.symbol, true)?;
    pool.fees = fees;
    pool.ledger = FeeLedger::new(params.advance_enabled, params.one_time_fee_enabled);
    pool.total_shares = 0;
    pool.total_basis = 0;
    pool.last_accrual_ts = now;
    pool.bump = ctx.bumps.pool;

    let access = &mut ctx.accounts.access_policy;
    access.pool = pool.key();
    access.paused = false;
    access.deposit_mode = GateMode::Open;
    access.withdraw_mode = GateMode::Open;
    access.transfer_mode = GateMode::Open;
    access.allowlist = Vec::new();
    access.bump = ctx.bumps.access_policy;

    msg!(
        "Pool {} initialized: withdrawal {} bps, carry {} bps, annual {} bps",
        params.name,
        fees.withdrawal_fee_bps,
        fees.carry_fee_bps,
        fees.annual_fee_bps
    );
    emit!(PoolInitialized {
        pool: pool.key(),
        asset_mint: pool.asset_mint,
        fee_recipient: pool.fee_recipient,
        withdrawal_fee_bps: fees.withdrawal_fee_bps,
        carry_fee_bps: fees.carry_fee_bps,
        annual_fee_bps: fees.annual_fee_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub asset_mint: Account<'info, Mint>,
    /// CHECK: identity that receives drawn fees; only its key is stored.
    pub fee_recipient: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"pool", asset_mint.key().as_ref()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA authority for vault transfer signing.
    #[account(seeds = [b"vault-auth", pool.key().as_ref()], bump)]
    pub vault_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"vault", pool.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = vault_auth,
    )]
    pub asset_vault: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = admin,
        seeds = [b"access", pool.key().as_ref()],
        bump,
        space = 8 + AccessPolicy::INIT_SPACE,
    )]
    pub access_policy: Account<'info, AccessPolicy>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
