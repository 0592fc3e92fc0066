use anchor_lang::prelude::*;

use crate::{
    constants::{
        ENTRY_INDEX_CAPACITY, MAX_DURATION, MAX_PLATFORM_FEE_PERCENT, MAX_WINNER_PERCENT,
        MIN_DURATION, MIN_ENTRY_PRICE, MIN_WINNER_PERCENT,
    },
    error::RaffleError,
    state::{
        Config, EntryIndex, Raffle, RaffleState, Treasury, RAFFLE_ACCOUNT_SIZE,
        TREASURY_ACCOUNT_SIZE,
    },
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// Sequential raffle id
    pub id: u64,
    /// Price per entry in lamports
    pub entry_price: u64,
    /// When entries open
    pub start_time: i64,
    /// When entries close
    pub end_time: i64,
    /// Entry cap; 0 means unbounded up to the index capacity
    pub max_entries: u64,
    /// Share of entries that win
    pub winner_percent: u8,
    /// Platform fee share
    pub fee_percent: u8,
}

/// Instruction to create a new raffle with fixed parameters
///
/// # Arguments
/// * `entry_price` - Price per entry in lamports
/// * `duration` - Seconds until entries close, measured from now
/// * `max_entries` - Entry cap; 0 leaves the raffle bounded only by the
///   ownership index capacity and the global pool cap
/// * `winner_percent` - Share of entries that win, 1..=50
/// * `fee_percent` - Platform fee share, 0..=5
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates caller is the program authority via the config PDA
/// 2. Rejects creation while the program is paused
/// 3. Bounds every creation parameter; failure names the offending field
///    and mutates nothing
/// 4. Allocates the next sequential id; id 0 is reserved for "not found"
/// 5. Adopts a client-zeroed ownership index account (too large for CPI
///    allocation) and a fresh treasury PDA for the pool
pub fn create_raffle(
    ctx: Context<CreateRaffle>,
    entry_price: u64,
    duration: i64,
    max_entries: u64,
    winner_percent: u8,
    fee_percent: u8,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    validate_raffle_params(entry_price, duration, max_entries, winner_percent, fee_percent)?;

    let end_time = current_time
        .checked_add(duration)
        .ok_or(RaffleError::Overflow)?;

    let id = ctx.accounts.config.next_raffle_id;

    let raffle = &mut ctx.accounts.raffle;
    raffle.id = id;
    raffle.entry_price = entry_price;
    raffle.start_time = current_time;
    raffle.end_time = end_time;
    raffle.max_entries = max_entries;
    raffle.winner_percent = winner_percent;
    raffle.fee_percent = fee_percent;
    raffle.state = RaffleState::Active;
    raffle.total_entries = 0;
    raffle.total_pool = 0;
    raffle.num_winners = 0;
    raffle.prize_per_winner = 0;
    raffle.request_id = 0;
    raffle.draw_triggered_at = 0;
    raffle.cancel_reason = String::new();
    raffle.entry_index = ctx.accounts.entry_index.key();
    raffle.treasury = ctx.accounts.treasury.key();
    raffle.bump = ctx.bumps.raffle;

    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();
    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    // Adopt the zeroed index; slot count starts at zero
    ctx.accounts.entry_index.load_init()?;

    ctx.accounts.config.next_raffle_id = id.checked_add(1).ok_or(RaffleError::Overflow)?;

    emit!(RaffleCreated {
        raffle: ctx.accounts.raffle.key(),
        id,
        entry_price,
        start_time: current_time,
        end_time,
        max_entries,
        winner_percent,
        fee_percent,
    });

    Ok(())
}

/// Bounds every creation parameter. Pure so the accepted ranges can be
/// pinned down without an account context.
fn validate_raffle_params(
    entry_price: u64,
    duration: i64,
    max_entries: u64,
    winner_percent: u8,
    fee_percent: u8,
) -> Result<()> {
    require!(entry_price >= MIN_ENTRY_PRICE, RaffleError::EntryPriceTooLow);
    require!(duration >= MIN_DURATION, RaffleError::DurationTooShort);
    require!(duration <= MAX_DURATION, RaffleError::DurationTooLong);
    require!(
        (MIN_WINNER_PERCENT..=MAX_WINNER_PERCENT).contains(&winner_percent),
        RaffleError::WinnerPercentOutOfRange
    );
    require!(
        fee_percent <= MAX_PLATFORM_FEE_PERCENT,
        RaffleError::FeePercentTooHigh
    );
    require!(
        max_entries <= ENTRY_INDEX_CAPACITY,
        RaffleError::MaxEntriesExceedsCapacity
    );
    Ok(())
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            config.next_raffle_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// Ownership index created and zeroed by the client in this
    /// transaction; the program takes it over here
    #[account(zero)]
    pub entry_index: AccountLoader<'info, EntryIndex>,

    #[account(
        init,
        payer = authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
        constraint = !config.paused @ RaffleError::ProgramPaused,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::validate_raffle_params as validate;

    #[test]
    fn accepts_typical_parameters() {
        assert!(validate(3_000_000, 86_400, 0, 10, 5).is_ok());
    }

    #[test]
    fn entry_price_boundary() {
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, 10, 5).is_ok());
        assert!(validate(MIN_ENTRY_PRICE - 1, 86_400, 0, 10, 5).is_err());
        assert!(validate(0, 86_400, 0, 10, 5).is_err());
    }

    #[test]
    fn duration_boundaries() {
        assert!(validate(MIN_ENTRY_PRICE, MIN_DURATION, 0, 10, 5).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, MIN_DURATION - 1, 0, 10, 5).is_err());
        assert!(validate(MIN_ENTRY_PRICE, MAX_DURATION, 0, 10, 5).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, MAX_DURATION + 1, 0, 10, 5).is_err());
    }

    #[test]
    fn winner_percent_boundaries() {
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, 0, 5).is_err());
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, MIN_WINNER_PERCENT, 5).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, MAX_WINNER_PERCENT, 5).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, MAX_WINNER_PERCENT + 1, 5).is_err());
    }

    #[test]
    fn fee_percent_boundary() {
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, 10, 0).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, 10, MAX_PLATFORM_FEE_PERCENT).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, 86_400, 0, 10, MAX_PLATFORM_FEE_PERCENT + 1).is_err());
    }

    #[test]
    fn max_entries_capped_by_index_capacity() {
        assert!(validate(MIN_ENTRY_PRICE, 86_400, ENTRY_INDEX_CAPACITY, 10, 5).is_ok());
        assert!(validate(MIN_ENTRY_PRICE, 86_400, ENTRY_INDEX_CAPACITY + 1, 10, 5).is_err());
    }
}
