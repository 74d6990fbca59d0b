use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Fee bps must be below 10000")]
    InvalidFeeBps,
    #[msg("Invalid name or symbol length")]
    InvalidName,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid depositor position")]
    InvalidPosition,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient share balance")]
    InsufficientBalance,
    #[msg("Position still holds shares")]
    PositionNotEmpty,
    #[msg("Pool is paused")]
    PoolPaused,
    #[msg("Action is disabled")]
    ActionDisabled,
    #[msg("Identity is not allowlisted")]
    NotAllowlisted,
    #[msg("Allowlist is full")]
    AllowlistFull,
    #[msg("Draw exceeds accrued fees and advances are disabled")]
    AdvanceDisabled,
    #[msg("One-time fee adjustments are disabled")]
    OneTimeFeeDisabled,
    #[msg("Division by zero")]
    DivisionByZero,
    #[msg("Math overflow")]
    MathOverflow,
}
