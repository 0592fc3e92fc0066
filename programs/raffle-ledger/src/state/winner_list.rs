use anchor_lang::prelude::*;

use crate::constants::MAX_WINNERS;

// 8 discriminator + 32 raffle + 4 vec length + 32 * MAX_WINNERS + 1 bump
pub const WINNER_LIST_ACCOUNT_SIZE: usize = 8 + 32 + 4 + 32 * MAX_WINNERS as usize + 1;

/// Ordered winner set for one raffle. Written entirely within the
/// randomness delivery and immutable once the raffle is Completed.
#[account]
pub struct WinnerList {
    pub raffle: Pubkey,
    pub winners: Vec<Pubkey>,
    pub bump: u8,
}
