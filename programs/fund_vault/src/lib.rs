use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod gate;
pub mod helpers;
pub mod instructions;
pub mod math;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("9kF3vQeJxY7mT2pW8nRb4sLcA6dHgUoZ1iVyN5qMfEtK");

#[program]
pub mod fund_vault {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, params: PoolInitParams) -> Result<()> {
        instructions::initialize_pool::handler(ctx, params)
    }

    pub fn configure_access(ctx: Context<ConfigureAccess>, params: AccessParams) -> Result<()> {
        instructions::configure_access::handler(ctx, params)
    }

    pub fn set_allowlisted(
        ctx: Context<SetAllowlisted>,
        identity: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::set_allowlisted::handler(ctx, identity, allowed)
    }

    pub fn create_position(ctx: Context<CreatePosition>) -> Result<()> {
        instructions::create_position::handler(ctx)
    }

    pub fn close_position(ctx: Context<ClosePosition>) -> Result<()> {
        instructions::close_position::handler(ctx)
    }

    pub fn deposit(ctx: Context<DepositAssets>, assets: u64) -> Result<u128> {
        instructions::deposit::handler(ctx, assets)
    }

    pub fn mint(ctx: Context<MintShares>, shares: u128) -> Result<u64> {
        instructions::mint::handler(ctx, shares)
    }

    pub fn withdraw(ctx: Context<WithdrawAssets>, assets: u64) -> Result<u128> {
        instructions::withdraw::handler(ctx, assets)
    }

    pub fn redeem(ctx: Context<RedeemShares>, shares: u128) -> Result<u64> {
        instructions::redeem::handler(ctx, shares)
    }

    pub fn transfer_shares(ctx: Context<TransferShares>, shares: u128) -> Result<()> {
        instructions::transfer_shares::handler(ctx, shares)
    }

    pub fn draw_fee(ctx: Context<DrawFee>, amount: u64) -> Result<()> {
        instructions::draw_fee::handler(ctx, amount)
    }

    pub fn repay_fee(ctx: Context<RepayFee>, amount: u64) -> Result<()> {
        instructions::repay_fee::handler(ctx, amount)
    }

    pub fn set_one_time_fee(ctx: Context<OneTimeFee>, amount: i64) -> Result<()> {
        instructions::operator_settings::set_one_time_fee(ctx, amount)
    }

    pub fn disable_one_time_fee(ctx: Context<OperatorSettings>) -> Result<()> {
        instructions::operator_settings::disable_one_time_fee(ctx)
    }

    pub fn set_advance_enabled(ctx: Context<OperatorSettings>, enabled: bool) -> Result<()> {
        instructions::operator_settings::set_advance_enabled(ctx, enabled)
    }

    pub fn total_assets(ctx: Context<PoolView>) -> Result<u64> {
        instructions::views::total_assets(ctx)
    }

    pub fn convert_to_shares(ctx: Context<PoolView>, assets: u64) -> Result<u128> {
        instructions::views::convert_to_shares(ctx, assets)
    }

    pub fn convert_to_assets(ctx: Context<PoolView>, shares: u128) -> Result<u64> {
        instructions::views::convert_to_assets(ctx, shares)
    }

    pub fn preview_deposit(ctx: Context<PoolView>, assets: u64) -> Result<u128> {
        instructions::views::preview_deposit(ctx, assets)
    }

    pub fn preview_mint(ctx: Context<PoolView>, shares: u128) -> Result<u64> {
        instructions::views::preview_mint(ctx, shares)
    }

    pub fn preview_withdraw(ctx: Context<PositionView>, assets: u64) -> Result<u128> {
        instructions::views::preview_withdraw(ctx, assets)
    }

    pub fn preview_redeem(ctx: Context<PositionView>, shares: u128) -> Result<u64> {
        instructions::views::preview_redeem(ctx, shares)
    }

    pub fn max_withdraw(ctx: Context<PositionView>) -> Result<u64> {
        instructions::views::max_withdraw(ctx)
    }

    pub fn max_redeem(ctx: Context<PositionView>) -> Result<u128> {
        instructions::views::max_redeem(ctx)
    }
}
