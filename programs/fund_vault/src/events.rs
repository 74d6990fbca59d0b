use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub asset_mint: Pubkey,
    pub fee_recipient: Pubkey,
    pub withdrawal_fee_bps: u16,
    pub carry_fee_bps: u16,
    pub annual_fee_bps: u16,
}

#[event]
pub struct Deposited {
    pub pool: Pubkey,
    pub caller: Pubkey,
    pub receiver: Pubkey,
    pub assets: u64,
    pub shares: u128,
}

#[event]
pub struct Withdrawn {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub receiver: Pubkey,
    pub shares: u128,
    pub assets: u64,
    pub withdrawal_fee: u64,
    pub carry_fee: u64,
}

#[event]
pub struct SharesTransferred {
    pub pool: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub shares: u128,
    pub basis_moved: u64,
}

#[event]
pub struct AnnualFeeAccrued {
    pub pool: Pubkey,
    pub fee: u64,
    pub accrued_fees: i128,
    pub timestamp: i64,
}

#[event]
pub struct FeeDrawn {
    pub pool: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub accrued_fees: i128,
}

#[event]
pub struct FeeRepaid {
    pub pool: Pubkey,
    pub payer: Pubkey,
    pub amount: u64,
    pub accrued_fees: i128,
}

#[event]
pub struct OneTimeFeeSet {
    pub pool: Pubkey,
    pub amount: i64,
    pub accrued_fees: i128,
}

#[event]
pub struct AdvanceToggled {
    pub pool: Pubkey,
    pub enabled: bool,
}

#[event]
pub struct OneTimeFeesDisabled {
    pub pool: Pubkey,
    pub accrued_fees: i128,
}

#[event]
pub struct AccessConfigured {
    pub pool: Pubkey,
    pub paused: bool,
}
