//! Winner quota, prize split, and unique-winner selection.
//!
//! Everything here is pure so the draw math can be exercised without a
//! validator and so the read-only projections on `Raffle` share one
//! definition with the randomness delivery handler.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;
use arrayref::array_ref;

use crate::constants::{MAX_WINNERS, SELECTION_ROUNDS};
use crate::error::RaffleError;

/// Number of winners for a raffle of `total_entries` entries:
/// `floor(total * percent / 100)`, floored to at least 1, capped at
/// `MAX_WINNERS` and at the entry count itself.
pub fn winner_quota(total_entries: u64, winner_percent: u8) -> u32 {
    if total_entries == 0 {
        return 0;
    }
    let raw = total_entries.saturating_mul(winner_percent as u64) / 100;
    raw.max(1).min(MAX_WINNERS as u64).min(total_entries) as u32
}

pub struct PrizeSplit {
    /// Fee share of the pool, inclusive of division dust
    pub fee: u64,
    pub prize_per_winner: u64,
}

/// Splits a completed raffle's pool between winners and the protocol fee.
/// The integer-division remainder is folded into the fee, so
/// `prize_per_winner * num_winners + fee == total_pool` holds exactly.
pub fn prize_split(total_pool: u64, fee_percent: u8, num_winners: u32) -> Result<PrizeSplit> {
    let fee = total_pool
        .checked_mul(fee_percent as u64)
        .and_then(|v| v.checked_div(100))
        .ok_or(RaffleError::Overflow)?;
    let prize_pool = total_pool.checked_sub(fee).ok_or(RaffleError::Overflow)?;
    let prize_per_winner = prize_pool
        .checked_div(num_winners as u64)
        .ok_or(RaffleError::Overflow)?;
    let paid = prize_per_winner
        .checked_mul(num_winners as u64)
        .ok_or(RaffleError::Overflow)?;
    let dust = prize_pool.checked_sub(paid).ok_or(RaffleError::Overflow)?;
    let fee = fee.checked_add(dust).ok_or(RaffleError::Overflow)?;
    Ok(PrizeSplit {
        fee,
        prize_per_winner,
    })
}

/// Maps a 32-byte random word to an entry slot.
pub fn value_to_slot(value: &[u8; 32], total_entries: u64) -> u64 {
    let word = u64::from_le_bytes(*array_ref![value, 0, 8]);
    word % total_entries
}

/// Derives an auxiliary random value from a delivered one, so a short
/// delivery can be stretched without a second oracle round trip.
/// Hash-with-counter derivation per Chainlink's multi-number guidance.
pub fn derive_value(base: &[u8; 32], round: u32) -> [u8; 32] {
    keccak::hashv(&[base, &round.to_le_bytes()]).to_bytes()
}

/// Selects up to `quota` unique winners from the entry ownership index.
///
/// Rounds below the delivered value count use those values directly;
/// later rounds derive fresh values by hashing a delivered value with the
/// round number. A participant owning several slots can be selected only
/// once. If `SELECTION_ROUNDS` iterations cannot find `quota` unique
/// owners the shorter list is returned and the raffle settles with that
/// many winners.
pub fn select_winners<F>(
    values: &[[u8; 32]],
    total_entries: u64,
    quota: u32,
    owner_of: F,
) -> Vec<Pubkey>
where
    F: Fn(u64) -> Pubkey,
{
    let mut winners: Vec<Pubkey> = Vec::with_capacity(quota as usize);
    if values.is_empty() || total_entries == 0 || quota == 0 {
        return winners;
    }
    for round in 0..SELECTION_ROUNDS {
        if winners.len() as u32 == quota {
            break;
        }
        let value = if (round as usize) < values.len() {
            values[round as usize]
        } else {
            derive_value(&values[round as usize % values.len()], round)
        };
        let slot = value_to_slot(&value, total_entries);
        let owner = owner_of(slot);
        if !winners.contains(&owner) {
            winners.push(owner);
        }
    }
    winners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_for_slot(slot: u64) -> [u8; 32] {
        let mut v = [0u8; 32];
        v[..8].copy_from_slice(&slot.to_le_bytes());
        v
    }

    #[test]
    fn quota_basic_percentages() {
        assert_eq!(winner_quota(100, 10), 10);
        assert_eq!(winner_quota(200, 1), 2);
        assert_eq!(winner_quota(40, 50), 20);
    }

    #[test]
    fn quota_floors_to_one() {
        // 5 entries at 1% computes to 0 and is floored to a single winner
        assert_eq!(winner_quota(5, 1), 1);
        assert_eq!(winner_quota(1, 1), 1);
        assert_eq!(winner_quota(3, 50), 1);
    }

    #[test]
    fn quota_caps() {
        assert_eq!(winner_quota(1000, 50), 100);
        assert_eq!(winner_quota(5000, 50), 100);
        // never more winners than entries
        assert_eq!(winner_quota(1, 50), 1);
    }

    #[test]
    fn quota_zero_entries() {
        assert_eq!(winner_quota(0, 10), 0);
    }

    #[test]
    fn split_matches_published_example() {
        let split = prize_split(300_000_000, 5, 10).unwrap();
        assert_eq!(split.fee, 15_000_000);
        assert_eq!(split.prize_per_winner, 28_500_000);
    }

    #[test]
    fn split_folds_dust_into_fee() {
        let split = prize_split(100, 0, 3).unwrap();
        assert_eq!(split.prize_per_winner, 33);
        assert_eq!(split.fee, 1);
    }

    #[test]
    fn split_conserves_pool_exactly() {
        for (pool, fee_percent, winners) in [
            (300_000_000u64, 5u8, 10u32),
            (1_003, 5, 7),
            (999_999_937, 3, 11),
            (1, 0, 1),
            (12_345_678_901, 5, 100),
        ] {
            let split = prize_split(pool, fee_percent, winners).unwrap();
            assert_eq!(
                split.prize_per_winner * winners as u64 + split.fee,
                pool,
                "pool {} fee {} winners {}",
                pool,
                fee_percent,
                winners
            );
        }
    }

    #[test]
    fn split_rejects_zero_winners() {
        assert!(prize_split(100, 5, 0).is_err());
    }

    #[test]
    fn slot_mapping_uses_low_word() {
        assert_eq!(value_to_slot(&value_for_slot(7), 100), 7);
        assert_eq!(value_to_slot(&value_for_slot(107), 100), 7);
    }

    #[test]
    fn selects_unique_winners_from_direct_values() {
        let owners: Vec<Pubkey> = (0..10).map(|_| Pubkey::new_unique()).collect();
        let values: Vec<[u8; 32]> = (0..10).map(value_for_slot).collect();
        let winners = select_winners(&values, 10, 10, |slot| owners[slot as usize]);
        assert_eq!(winners.len(), 10);
        for (i, w) in winners.iter().enumerate() {
            assert_eq!(*w, owners[i]);
        }
    }

    #[test]
    fn duplicate_owner_is_skipped() {
        // slots 0 and 1 belong to the same participant
        let shared = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let owners = [shared, shared, other];
        let values = vec![value_for_slot(0), value_for_slot(1), value_for_slot(2)];
        let winners = select_winners(&values, 3, 2, |slot| owners[slot as usize]);
        assert_eq!(winners, vec![shared, other]);
    }

    #[test]
    fn short_delivery_is_stretched_by_derivation() {
        let owners: Vec<Pubkey> = (0..50).map(|_| Pubkey::new_unique()).collect();
        let values = vec![value_for_slot(3)];
        let winners = select_winners(&values, 50, 5, |slot| owners[slot as usize]);
        assert_eq!(winners.len(), 5);
        assert_eq!(winners[0], owners[3]);
        // all unique
        for i in 0..winners.len() {
            assert!(!winners[i + 1..].contains(&winners[i]));
        }
    }

    #[test]
    fn degrades_when_unique_owners_run_out() {
        // every slot owned by one of two participants, quota of five
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let values: Vec<[u8; 32]> = (0..5).map(value_for_slot).collect();
        let winners = select_winners(&values, 20, 5, |slot| if slot % 2 == 0 { a } else { b });
        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn selection_is_deterministic() {
        let owners: Vec<Pubkey> = (0..30).map(|_| Pubkey::new_unique()).collect();
        let values = vec![value_for_slot(11), value_for_slot(29)];
        let first = select_winners(&values, 30, 8, |slot| owners[slot as usize]);
        let second = select_winners(&values, 30, 8, |slot| owners[slot as usize]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_delivery_selects_nobody() {
        let winners = select_winners(&[], 10, 3, |_| Pubkey::new_unique());
        assert!(winners.is_empty());
    }
}
