pub mod global_state;
pub mod holding;
pub mod ledger_entry;
pub mod plan;
pub mod referral_code;
pub mod user_account;

pub use global_state::*;
pub use holding::*;
pub use ledger_entry::*;
pub use plan::*;
pub use referral_code::*;
pub use user_account::*;
