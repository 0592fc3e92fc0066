use anchor_lang::prelude::*;

use crate::constants::{EMERGENCY_CANCEL_DELAY, MAX_CANCEL_REASON_LEN};
use crate::error::RaffleError;
use crate::selection;

// Space calculation:
// 8 (discriminator) +
// 8 (id) +
// 8 (entry_price) +
// 8 (start_time) +
// 8 (end_time) +
// 8 (max_entries) +
// 1 (winner_percent) +
// 1 (fee_percent) +
// 1 (state) +
// 8 (total_entries) +
// 8 (total_pool) +
// 4 (num_winners) +
// 8 (prize_per_winner) +
// 8 (request_id) +
// 8 (draw_triggered_at) +
// 4 + 64 (cancel_reason) +
// 32 (entry_index) +
// 32 (treasury) +
// 1 (bump) =
// 228 total bytes
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 8
    + 8
    + 8
    + 8
    + 8
    + 1
    + 1
    + 1
    + 8
    + 8
    + 4
    + 8
    + 8
    + 8
    + 4
    + MAX_CANCEL_REASON_LEN
    + 32
    + 32
    + 1;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaffleState {
    Active = 0,
    Drawing = 1,
    Completed = 2,
    Cancelled = 3,
}

impl RaffleState {
    /// The closed lifecycle graph. The state field doubles as the
    /// concurrency gate: the second of two racing transitions observes the
    /// updated state and fails here.
    pub fn can_transition(self, next: RaffleState) -> bool {
        matches!(
            (self, next),
            (RaffleState::Active, RaffleState::Drawing)
                | (RaffleState::Active, RaffleState::Cancelled)
                | (RaffleState::Drawing, RaffleState::Completed)
                | (RaffleState::Drawing, RaffleState::Cancelled)
        )
    }
}

#[account]
pub struct Raffle {
    /// Sequential id, starting at 1; 0 is reserved for "not found"
    pub id: u64,
    /// Price of one entry, in lamports; fixed at creation
    pub entry_price: u64,
    pub start_time: i64,
    pub end_time: i64,
    /// Entry cap for this raffle; 0 means unbounded up to the index capacity
    pub max_entries: u64,
    /// Share of entries that win, 1..=50; fixed at creation
    pub winner_percent: u8,
    /// Platform fee share, 0..=5; fixed at creation
    pub fee_percent: u8,
    pub state: RaffleState,
    pub total_entries: u64,
    /// Lamports collected into this raffle's escrow
    pub total_pool: u64,
    /// Final winner count; populated by the randomness delivery
    pub num_winners: u32,
    /// Final prize per winner; populated by the randomness delivery
    pub prize_per_winner: u64,
    /// Outstanding randomness request id; 0 means none
    pub request_id: u64,
    /// When the draw was triggered; gates the emergency cancel time lock
    pub draw_triggered_at: i64,
    pub cancel_reason: String,
    /// The entry ownership index account for this raffle
    pub entry_index: Pubkey,
    /// The escrow holding this raffle's pool
    pub treasury: Pubkey,
    pub bump: u8,
}

impl Raffle {
    pub fn transition(&mut self, next: RaffleState) -> Result<()> {
        require!(
            self.state.can_transition(next),
            RaffleError::InvalidStateTransition
        );
        self.state = next;
        Ok(())
    }

    /// Seconds until entries close; 0 once the end time has passed
    pub fn time_remaining(&self, now: i64) -> i64 {
        self.end_time.saturating_sub(now).max(0)
    }

    pub fn accepts_entries(&self, now: i64) -> bool {
        self.state == RaffleState::Active && now < self.end_time
    }

    /// Whether a draw may be triggered right now. A raffle below
    /// `min_entries` is still eligible; triggering it cancels instead of
    /// drawing.
    pub fn draw_eligible(&self, now: i64) -> bool {
        self.state == RaffleState::Active && now >= self.end_time
    }

    /// Whether the emergency-cancel time lock has elapsed for a stuck
    /// draw. Always false outside Drawing.
    pub fn emergency_cancel_unlocked(&self, now: i64) -> bool {
        self.state == RaffleState::Drawing
            && now >= self.draw_triggered_at.saturating_add(EMERGENCY_CANCEL_DELAY)
    }

    /// Winner count this raffle would settle with if drawn at its current
    /// size. Matches the quota computed at trigger time exactly.
    pub fn projected_winners(&self) -> u32 {
        selection::winner_quota(self.total_entries, self.winner_percent)
    }

    /// Prize each winner would receive if the raffle completed at its
    /// current size with the full projected winner count.
    pub fn projected_prize_per_winner(&self) -> u64 {
        let quota = self.projected_winners();
        if quota == 0 {
            return 0;
        }
        match selection::prize_split(self.total_pool, self.fee_percent, quota) {
            Ok(split) => split.prize_per_winner,
            Err(_) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raffle(state: RaffleState) -> Raffle {
        Raffle {
            id: 1,
            entry_price: 3_000_000,
            start_time: 1_000,
            end_time: 1_000 + 86_400,
            max_entries: 0,
            winner_percent: 10,
            fee_percent: 5,
            state,
            total_entries: 0,
            total_pool: 0,
            num_winners: 0,
            prize_per_winner: 0,
            request_id: 0,
            draw_triggered_at: 0,
            cancel_reason: String::new(),
            entry_index: Pubkey::default(),
            treasury: Pubkey::default(),
            bump: 255,
        }
    }

    #[test]
    fn permitted_transitions() {
        assert!(RaffleState::Active.can_transition(RaffleState::Drawing));
        assert!(RaffleState::Active.can_transition(RaffleState::Cancelled));
        assert!(RaffleState::Drawing.can_transition(RaffleState::Completed));
        assert!(RaffleState::Drawing.can_transition(RaffleState::Cancelled));
    }

    #[test]
    fn rejected_transitions() {
        // terminal states never move
        for next in [
            RaffleState::Active,
            RaffleState::Drawing,
            RaffleState::Completed,
            RaffleState::Cancelled,
        ] {
            assert!(!RaffleState::Completed.can_transition(next));
            assert!(!RaffleState::Cancelled.can_transition(next));
        }
        assert!(!RaffleState::Active.can_transition(RaffleState::Completed));
        assert!(!RaffleState::Drawing.can_transition(RaffleState::Drawing));
        assert!(!RaffleState::Active.can_transition(RaffleState::Active));
    }

    #[test]
    fn transition_updates_state() {
        let mut r = raffle(RaffleState::Active);
        r.transition(RaffleState::Drawing).unwrap();
        assert_eq!(r.state, RaffleState::Drawing);
        assert!(r.transition(RaffleState::Active).is_err());
        r.transition(RaffleState::Completed).unwrap();
        assert!(r.transition(RaffleState::Cancelled).is_err());
    }

    #[test]
    fn entry_window() {
        let r = raffle(RaffleState::Active);
        assert!(r.accepts_entries(r.end_time - 1));
        assert!(!r.accepts_entries(r.end_time));
        assert!(!r.accepts_entries(r.end_time + 1));
        let cancelled = raffle(RaffleState::Cancelled);
        assert!(!cancelled.accepts_entries(cancelled.end_time - 1));
    }

    #[test]
    fn draw_eligibility() {
        let r = raffle(RaffleState::Active);
        assert!(!r.draw_eligible(r.end_time - 1));
        assert!(r.draw_eligible(r.end_time));
        assert!(!raffle(RaffleState::Drawing).draw_eligible(i64::MAX));
    }

    #[test]
    fn time_remaining_floors_at_zero() {
        let r = raffle(RaffleState::Active);
        assert_eq!(r.time_remaining(r.start_time), 86_400);
        assert_eq!(r.time_remaining(r.end_time + 500), 0);
    }

    #[test]
    fn emergency_cancel_time_lock() {
        let mut r = raffle(RaffleState::Drawing);
        r.draw_triggered_at = 10_000;
        assert!(!r.emergency_cancel_unlocked(10_000 + 3_600));
        assert!(!r.emergency_cancel_unlocked(10_000 + EMERGENCY_CANCEL_DELAY - 1));
        assert!(r.emergency_cancel_unlocked(10_000 + EMERGENCY_CANCEL_DELAY));
        assert!(r.emergency_cancel_unlocked(10_000 + EMERGENCY_CANCEL_DELAY + 1));
        // never unlocked outside Drawing
        let mut active = raffle(RaffleState::Active);
        active.draw_triggered_at = 10_000;
        assert!(!active.emergency_cancel_unlocked(i64::MAX));
    }

    #[test]
    fn projections_match_draw_math() {
        let mut r = raffle(RaffleState::Active);
        r.total_entries = 100;
        r.total_pool = 300_000_000;
        assert_eq!(r.projected_winners(), 10);
        assert_eq!(r.projected_prize_per_winner(), 28_500_000);
    }
}
