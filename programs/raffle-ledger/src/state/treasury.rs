use anchor_lang::prelude::*;

// 8 discriminator, 32 pubkey, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program-owned escrow holding one raffle's pool. Lamports only ever
/// leave it through winner payouts, refunds, or the fee credit to the
/// global fee vault.
#[account]
pub struct Treasury {
    pub raffle: Pubkey,
    pub bump: u8,
}
