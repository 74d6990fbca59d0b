use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct DepositorPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub shares: u128,
    /// Assets contributed, net of basis retired by exits.
    pub cost_basis: u64,
    pub bump: u8,
}
