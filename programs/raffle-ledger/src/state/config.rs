use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 discriminator + 32 authority + 32 pending_authority + 32 vrf_authority
// + 1 paused + 8 fee_balance + 8 next_raffle_id + 8 next_request_id
// + 8 max_entries_per_user + 8 max_pool_lamports + 8 min_entries
// + 1 bump + 1 fee_vault_bump
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 1 + 8 + 8 + 8 + 8 + 8 + 8 + 1 + 1;

/// Singleton program configuration.
///
/// `authority` is the admin capability; handing it over is a two-step
/// nominate/accept flow through `pending_authority` so a typo'd key can
/// never take the program with it. `Pubkey::default()` in
/// `pending_authority` means no nomination is outstanding.
///
/// `fee_balance` is the only lamport amount the authority may ever move out
/// of program custody. It grows exclusively from completed raffles' fee
/// shares and is tracked separately from the fee vault's raw balance so
/// rent can never be withdrawn.
#[account]
pub struct Config {
    pub authority: Pubkey,
    pub pending_authority: Pubkey,
    /// Oracle identity allowed to sign randomness deliveries
    pub vrf_authority: Pubkey,
    /// Blocks raffle creation and entry purchases; refunds stay open
    pub paused: bool,
    /// Withdrawable protocol fee balance, in lamports
    pub fee_balance: u64,
    /// Next raffle id to allocate; ids start at 1, 0 means "not found"
    pub next_raffle_id: u64,
    /// Next randomness request id; ids are never reused
    pub next_request_id: u64,
    pub max_entries_per_user: u64,
    pub max_pool_lamports: u64,
    /// Fewest entries a raffle needs for its draw to proceed
    pub min_entries: u64,
    pub bump: u8,
    pub fee_vault_bump: u8,
}

impl Config {
    /// Debits a withdrawal from the tracked fee balance. The counter, not
    /// the vault's raw lamports, bounds the amount, which keeps vault rent
    /// out of reach.
    pub fn debit_fees(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, RaffleError::ZeroWithdrawAmount);
        require!(
            amount <= self.fee_balance,
            RaffleError::InsufficientFeeBalance
        );
        self.fee_balance = self
            .fee_balance
            .checked_sub(amount)
            .ok_or(RaffleError::Overflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(fee_balance: u64) -> Config {
        Config {
            authority: Pubkey::new_unique(),
            pending_authority: Pubkey::default(),
            vrf_authority: Pubkey::new_unique(),
            paused: false,
            fee_balance,
            next_raffle_id: 1,
            next_request_id: 1,
            max_entries_per_user: 250,
            max_pool_lamports: 10_000_000_000_000,
            min_entries: 2,
            bump: 255,
            fee_vault_bump: 254,
        }
    }

    #[test]
    fn debit_reduces_balance() {
        let mut c = config(15_000_000);
        c.debit_fees(6_000_000).unwrap();
        assert_eq!(c.fee_balance, 9_000_000);
        c.debit_fees(9_000_000).unwrap();
        assert_eq!(c.fee_balance, 0);
    }

    #[test]
    fn debit_above_balance_is_rejected() {
        let mut c = config(15_000_000);
        assert!(c.debit_fees(15_000_001).is_err());
        // a rejected debit leaves the balance untouched
        assert_eq!(c.fee_balance, 15_000_000);
    }

    #[test]
    fn zero_debit_is_rejected() {
        let mut c = config(15_000_000);
        assert!(c.debit_fees(0).is_err());
        assert_eq!(c.fee_balance, 15_000_000);
    }

    #[test]
    fn debit_of_empty_balance_is_rejected() {
        let mut c = config(0);
        assert!(c.debit_fees(1).is_err());
    }
}
