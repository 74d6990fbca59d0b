pub mod access_policy;
pub mod depositor_position;
pub mod pool;
pub mod pool_init_params;
pub mod types;

pub use access_policy::*;
pub use depositor_position::*;
pub use pool::*;
pub use pool_init_params::*;
pub use types::*;
