pub use config::*;
pub use entry_index::*;
pub use fee_vault::*;
pub use raffle::*;
pub use randomness_request::*;
pub use treasury::*;
pub use user_entry::*;
pub use winner_list::*;

pub mod config;
pub mod entry_index;
pub mod fee_vault;
pub mod raffle;
pub mod randomness_request;
pub mod treasury;
pub mod user_entry;
pub mod winner_list;
