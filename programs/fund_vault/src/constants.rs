pub const BPS_DENOM: u64 = 10_000;
pub const SECONDS_PER_YEAR: i64 = 365 * 86_400;
pub const NAME_LEN: usize = 32;
pub const SYMBOL_LEN: usize = 10;
pub const MAX_ALLOWLIST: usize = 32;
