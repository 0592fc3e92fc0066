use anchor_lang::prelude::*;

// 8 discriminator, 1 bump
pub const FEE_VAULT_ACCOUNT_SIZE: usize = 8 + 1;

/// Program-owned vault holding accrued protocol fees. Withdrawals are
/// bounded by `Config::fee_balance`, never by the raw lamport balance, so
/// the rent-exempt minimum stays untouched.
#[account]
pub struct FeeVault {
    pub bump: u8,
}
