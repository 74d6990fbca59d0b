//! Pure share/asset accounting. Nothing in here touches accounts or tokens;
//! instruction handlers feed it the vault balance and clock and persist the
//! results.

pub mod annual_fee;
pub mod carry_fee;
pub mod conversion;
pub mod fee_ledger;
pub mod orchestrator;
pub mod withdrawal_fee;

pub use carry_fee::CarryCharge;
pub use conversion::PoolTotals;
pub use fee_ledger::FeeLedger;
pub use orchestrator::{Entry, Exit, Receipt, ShareTransfer};
pub use withdrawal_fee::WithdrawalFee;
