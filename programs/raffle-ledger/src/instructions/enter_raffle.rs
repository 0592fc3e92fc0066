use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        Config, EntryIndex, Raffle, RaffleState, Treasury, UserEntry, USER_ENTRY_ACCOUNT_SIZE,
    },
};

/// Event emitted when entries are purchased
#[event]
pub struct EntriesPurchased {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The participant's address
    pub participant: Pubkey,
    /// Number of entries purchased
    pub count: u64,
    /// Total amount paid in lamports
    pub cost: u64,
    /// First slot index assigned by this purchase
    pub first_slot: u64,
}

/// Instruction to purchase entries in an active raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `count` - The number of entries to purchase
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates entry count is greater than 0
/// 2. Rejects purchases while the program is paused
/// 3. Enforces the per-user cap, the global pool cap, and the raffle's
///    own entry cap before any state is touched
/// 4. Validates raffle is Active and not past its end time through
///    account constraints
/// 5. Assigns contiguous slot indices and records ownership of each slot
///    in the append-only index
/// 6. Completes every state mutation before the lamport transfer in, so
///    the external call can never observe or re-enter half-updated state
///
/// # Implementation Notes
/// - Uses checked arithmetic operations to prevent overflow
/// - A successful entry is irreversible except through the
///   Cancelled-then-refund path
pub fn enter_raffle(ctx: Context<EnterRaffle>, count: u64) -> Result<()> {
    require!(count >= 1, RaffleError::InvalidEntryCount);

    let raffle_key = ctx.accounts.raffle.key();
    let participant_key = ctx.accounts.participant.key();
    let config = &ctx.accounts.config;

    let cost = count
        .checked_mul(ctx.accounts.raffle.entry_price)
        .ok_or(RaffleError::Overflow)?;

    // Cumulative caps: per user, per pool, per raffle
    let new_entries = ctx
        .accounts
        .user_entry
        .entries
        .checked_add(count)
        .ok_or(RaffleError::Overflow)?;
    require!(
        new_entries <= config.max_entries_per_user,
        RaffleError::UserEntryCapExceeded
    );

    let new_pool = ctx
        .accounts
        .raffle
        .total_pool
        .checked_add(cost)
        .ok_or(RaffleError::Overflow)?;
    require!(
        new_pool <= config.max_pool_lamports,
        RaffleError::PoolCapExceeded
    );

    let new_total = ctx
        .accounts
        .raffle
        .total_entries
        .checked_add(count)
        .ok_or(RaffleError::Overflow)?;
    if ctx.accounts.raffle.max_entries > 0 {
        require!(
            new_total <= ctx.accounts.raffle.max_entries,
            RaffleError::RaffleCapExceeded
        );
    }

    // Record ownership of each assigned slot
    let first_slot = ctx.accounts.raffle.total_entries;
    {
        let mut index = ctx.accounts.entry_index.load_mut()?;
        for _ in 0..count {
            index.append(participant_key)?;
        }
    }

    let user_entry = &mut ctx.accounts.user_entry;
    if user_entry.entries == 0 {
        user_entry.raffle = raffle_key;
        user_entry.owner = participant_key;
        user_entry.first_slot = first_slot;
        user_entry.refund_claimed = false;
        user_entry.bump = ctx.bumps.user_entry;
    }
    user_entry.entries = new_entries;

    let raffle = &mut ctx.accounts.raffle;
    raffle.total_entries = new_total;
    raffle.total_pool = new_pool;

    // All bookkeeping is done; move the funds into escrow last
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &participant_key,
            &ctx.accounts.treasury.key(),
            cost,
        ),
        &[
            ctx.accounts.participant.to_account_info(),
            ctx.accounts.treasury.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
        ],
    )?;

    emit!(EntriesPurchased {
        raffle: raffle_key,
        participant: participant_key,
        count,
        cost,
        first_slot,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The raffle entries are being purchased for
    /// Must be Active and strictly before its end time
    #[account(
        mut,
        constraint = raffle.state == RaffleState::Active @ RaffleError::RaffleNotActive,
        constraint = Clock::get()?.unix_timestamp < raffle.end_time @ RaffleError::RaffleEnded,
        has_one = entry_index,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub entry_index: AccountLoader<'info, EntryIndex>,

    /// Per-(raffle, participant) record, created on first purchase
    #[account(
        init_if_needed,
        payer = participant,
        space = USER_ENTRY_ACCOUNT_SIZE,
        seeds = [
            b"user_entry",
            raffle.key().as_ref(),
            participant.key().as_ref()
        ],
        bump,
    )]
    pub user_entry: Account<'info, UserEntry>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        constraint = !config.paused @ RaffleError::ProgramPaused,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub participant: Signer<'info>,

    /// Escrow receiving payment for the entries
    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}
