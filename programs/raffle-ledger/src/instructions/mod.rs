pub use cancel_raffle::*;
pub use claim_refund::*;
pub use create_raffle::*;
pub use deliver_randomness::*;
pub use emergency_cancel_drawing::*;
pub use enter_raffle::*;
pub use init_config::*;
pub use set_paused::*;
pub use transfer_authority::*;
pub use trigger_draw::*;
pub use update_limits::*;
pub use update_vrf_config::*;
pub use withdraw_fees::*;

pub mod cancel_raffle;
pub mod claim_refund;
pub mod create_raffle;
pub mod deliver_randomness;
pub mod emergency_cancel_drawing;
pub mod enter_raffle;
pub mod init_config;
pub mod set_paused;
pub mod transfer_authority;
pub mod trigger_draw;
pub mod update_limits;
pub mod update_vrf_config;
pub mod withdraw_fees;
