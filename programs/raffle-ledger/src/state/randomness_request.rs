use anchor_lang::prelude::*;

// 8 discriminator + 8 id + 32 raffle + 4 num_values + 1 consumed + 1 bump
pub const RANDOMNESS_REQUEST_ACCOUNT_SIZE: usize = 8 + 8 + 32 + 4 + 1 + 1;

/// One row of the request/response correlation table. Created when a draw
/// is triggered, flagged consumed when its delivery settles the raffle.
/// Request ids are allocated from a monotonic counter and never reused.
#[account]
pub struct RandomnessRequest {
    pub id: u64,
    pub raffle: Pubkey,
    /// Number of random values asked of the oracle
    pub num_values: u32,
    pub consumed: bool,
    pub bump: u8,
}
