use anchor_lang::prelude::*;

use crate::error::RaffleError;

// 8 discriminator + 32 raffle + 32 owner + 8 entries + 8 first_slot
// + 1 refund_claimed + 1 bump
pub const USER_ENTRY_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 1 + 1;

/// Per-(raffle, participant) entry record, created on first purchase.
/// `refund_claimed` is set exactly once and never cleared, which is why
/// this account is kept open instead of being closed on refund.
#[account]
pub struct UserEntry {
    pub raffle: Pubkey,
    pub owner: Pubkey,
    pub entries: u64,
    /// First slot index assigned to this participant
    pub first_slot: u64,
    pub refund_claimed: bool,
    pub bump: u8,
}

impl UserEntry {
    /// Marks the refund claimed and returns the amount owed. The flag
    /// flips before any lamports move, so a second call fails no matter
    /// how the caller orders its transfers.
    pub fn claim(&mut self, entry_price: u64) -> Result<u64> {
        require!(self.entries > 0, RaffleError::NoEntriesOwned);
        require!(!self.refund_claimed, RaffleError::RefundAlreadyClaimed);
        let amount = self
            .entries
            .checked_mul(entry_price)
            .ok_or(RaffleError::Overflow)?;
        self.refund_claimed = true;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(entries: u64) -> UserEntry {
        UserEntry {
            raffle: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            entries,
            first_slot: 0,
            refund_claimed: false,
            bump: 255,
        }
    }

    #[test]
    fn claim_returns_stake_and_flips_flag() {
        let mut e = entry(4);
        assert_eq!(e.claim(3_000_000).unwrap(), 12_000_000);
        assert!(e.refund_claimed);
    }

    #[test]
    fn second_claim_is_rejected() {
        let mut e = entry(4);
        e.claim(3_000_000).unwrap();
        assert!(e.claim(3_000_000).is_err());
    }

    #[test]
    fn claim_requires_entries() {
        let mut e = entry(0);
        assert!(e.claim(3_000_000).is_err());
        // a failed claim must not burn the flag
        assert!(!e.refund_claimed);
    }

    #[test]
    fn overflowing_stake_leaves_flag_clear() {
        let mut e = entry(u64::MAX);
        assert!(e.claim(2).is_err());
        assert!(!e.refund_claimed);
    }
}
