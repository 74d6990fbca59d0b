pub mod close_position;
pub mod configure_access;
pub mod create_position;
pub mod deposit;
pub mod draw_fee;
pub mod initialize_pool;
pub mod mint;
pub mod operator_settings;
pub mod redeem;
pub mod repay_fee;
pub mod set_allowlisted;
pub mod transfer_shares;
pub mod views;
pub mod withdraw;

pub use close_position::*;
pub use configure_access::*;
pub use create_position::*;
pub use deposit::*;
pub use draw_fee::*;
pub use initialize_pool::*;
pub use mint::*;
pub use operator_settings::*;
pub use redeem::*;
pub use repay_fee::*;
pub use set_allowlisted::*;
pub use transfer_shares::*;
pub use views::*;
pub use withdraw::*;
