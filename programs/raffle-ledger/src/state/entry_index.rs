use anchor_lang::prelude::*;

use crate::constants::ENTRY_INDEX_CAPACITY;
use crate::error::RaffleError;

pub const ENTRY_INDEX_ACCOUNT_SIZE: usize = 8 + 8 + 32 * ENTRY_INDEX_CAPACITY as usize;

/// Slot-to-owner index for one raffle.
///
/// Slots are assigned contiguously in purchase order: slot `0` through
/// `total - 1`. The index is append-only while the raffle accepts entries
/// and read-only afterwards; it is how a random slot number resolves to
/// the participant who owns it.
///
/// The account is too large for CPI allocation, so the client creates and
/// zeroes it in the same transaction that creates the raffle.
#[account(zero_copy)]
pub struct EntryIndex {
    pub total: u64,
    pub owners: [Pubkey; ENTRY_INDEX_CAPACITY as usize],
}

impl EntryIndex {
    pub fn append(&mut self, owner: Pubkey) -> Result<()> {
        if self.total >= ENTRY_INDEX_CAPACITY {
            return Err(error!(RaffleError::EntryIndexFull));
        }
        self.owners[self.total as usize] = owner;
        self.total += 1;
        Ok(())
    }

    pub fn owner_of(&self, slot: u64) -> Pubkey {
        self.owners[slot as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_index() -> Box<EntryIndex> {
        Box::new(EntryIndex {
            total: 0,
            owners: [Pubkey::default(); ENTRY_INDEX_CAPACITY as usize],
        })
    }

    #[test]
    fn slots_are_contiguous() {
        let mut index = empty_index();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        index.append(a).unwrap();
        index.append(a).unwrap();
        index.append(b).unwrap();
        assert_eq!(index.total, 3);
        assert_eq!(index.owner_of(0), a);
        assert_eq!(index.owner_of(1), a);
        assert_eq!(index.owner_of(2), b);
    }

    #[test]
    fn append_fails_at_capacity() {
        let mut index = empty_index();
        index.total = ENTRY_INDEX_CAPACITY;
        assert!(index.append(Pubkey::new_unique()).is_err());
    }
}
