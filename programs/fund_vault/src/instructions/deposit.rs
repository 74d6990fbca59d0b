use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    engine::orchestrator,
    error::ErrorCode,
    events::Deposited,
    helpers::emit_annual_fee,
    state::{AccessPolicy, DepositorPosition, Pool},
};

pub fn handler(mut ctx: Context<DepositAssets>, assets: u64) -> Result<u128> {
    let now = Clock::get()?.unix_timestamp;
    require_keys_eq!(
        ctx.accounts.receiver_position.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidPosition
    );

    let depositor = ctx.accounts.depositor.key();
    let vault_balance = ctx.accounts.asset_vault.amount;
    let accounts = &mut ctx.accounts;
    let receipt = orchestrator::deposit(
        &*accounts.access_policy,
        &mut accounts.pool,
        &mut accounts.receiver_position,
        &depositor,
        assets,
        vault_balance,
        now,
    )?;
    emit_annual_fee(&accounts.pool, receipt.annual_fee, now);

    let entry = receipt.settlement;
    token::transfer(accounts.deposit_ctx(), entry.assets)?;

    msg!("Deposited {} assets for {} shares", entry.assets, entry.shares);
    emit!(Deposited {
        pool: accounts.pool.key(),
        caller: depositor,
        receiver: accounts.receiver_position.owner,
        assets: entry.assets,
        shares: entry.shares,
    });

    Ok(entry.shares)
}

#[derive(Accounts)]
pub struct DepositAssets<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,
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
        seeds = [b"position", pool.key().as_ref(), receiver_position.owner.as_ref()],
        bump = receiver_position.bump,
    )]
    pub receiver_position: Account<'info, DepositorPosition>,
    #[account(
        mut,
        constraint = depositor_token_account.mint == pool.asset_mint @ ErrorCode::InvalidTokenAccount,
        constraint = depositor_token_account.owner == depositor.key() @ ErrorCode::Unauthorized,
    )]
    pub depositor_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.asset_vault)]
    pub asset_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> DepositAssets<'info> {
    pub(crate) fn deposit_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.depositor_token_account.to_account_info(),
            to: self.asset_vault.to_account_info(),
            authority: self.depositor.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
