use anchor_lang::prelude::*;
use anchor_lang::AccountsClose;

use crate::{
    error::RaffleError,
    selection,
    state::{
        Config, Raffle, RaffleState, RandomnessRequest, WinnerList,
        RANDOMNESS_REQUEST_ACCOUNT_SIZE, WINNER_LIST_ACCOUNT_SIZE,
    },
};

use super::cancel_raffle::RaffleCancelled;

pub const MIN_ENTRIES_CANCEL_REASON: &str = "minimum entries not reached";

/// Event emitted when a draw is triggered and randomness is requested.
/// The oracle watches for this and later invokes deliver_randomness with
/// the same request id.
#[event]
pub struct RandomnessRequested {
    pub raffle: Pubkey,
    pub request_id: u64,
    /// Number of random values requested, equal to the winner quota
    pub num_values: u32,
    pub triggered_at: i64,
}

/// Instruction to close entries on an ended raffle and request randomness
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates caller is the program authority via the config PDA
/// 2. Requires the raffle to be Active and past its end time
/// 3. A raffle below the minimum entry threshold cancels instead of
///    drawing; the request and winner-list accounts created for this call
///    are closed back to the payer on that path
/// 4. All bookkeeping (state flip, quota, trigger timestamp, request
///    correlation row) lands before the request event is emitted
///
/// # Implementation Notes
/// - The winner quota recorded here is provisional; the delivery may
///   settle with fewer winners if unique owners run out
/// - The trigger timestamp gates the emergency-cancel time lock
pub fn trigger_draw(ctx: Context<TriggerDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();

    require!(
        clock.unix_timestamp >= ctx.accounts.raffle.end_time,
        RaffleError::RaffleNotEnded
    );

    if ctx.accounts.raffle.total_entries < ctx.accounts.config.min_entries {
        let raffle = &mut ctx.accounts.raffle;
        raffle.transition(RaffleState::Cancelled)?;
        raffle.cancel_reason = MIN_ENTRIES_CANCEL_REASON.to_string();

        // No draw will happen; return the rent for this call's accounts
        ctx.accounts
            .request
            .close(ctx.accounts.authority.to_account_info())?;
        ctx.accounts
            .winner_list
            .close(ctx.accounts.authority.to_account_info())?;

        emit!(RaffleCancelled {
            raffle: raffle_key,
            reason: MIN_ENTRIES_CANCEL_REASON.to_string(),
            cancelled_at: clock.unix_timestamp,
        });
        return Ok(());
    }

    let quota = selection::winner_quota(
        ctx.accounts.raffle.total_entries,
        ctx.accounts.raffle.winner_percent,
    );

    let config = &mut ctx.accounts.config;
    let request_id = config.next_request_id;
    config.next_request_id = request_id.checked_add(1).ok_or(RaffleError::Overflow)?;

    let request = &mut ctx.accounts.request;
    request.id = request_id;
    request.raffle = raffle_key;
    request.num_values = quota;
    request.consumed = false;
    request.bump = ctx.bumps.request;

    let winner_list = &mut ctx.accounts.winner_list;
    winner_list.raffle = raffle_key;
    winner_list.winners = Vec::new();
    winner_list.bump = ctx.bumps.winner_list;

    let raffle = &mut ctx.accounts.raffle;
    raffle.transition(RaffleState::Drawing)?;
    raffle.num_winners = quota;
    raffle.request_id = request_id;
    raffle.draw_triggered_at = clock.unix_timestamp;

    msg!(
        "Requesting {} random values for raffle {}",
        quota,
        raffle.id
    );

    emit!(RandomnessRequested {
        raffle: raffle_key,
        request_id,
        num_values: quota,
        triggered_at: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TriggerDraw<'info> {
    #[account(
        mut,
        constraint = raffle.state == RaffleState::Active @ RaffleError::RaffleNotActive,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Correlation row for the outstanding randomness request
    #[account(
        init,
        payer = authority,
        space = RANDOMNESS_REQUEST_ACCOUNT_SIZE,
        seeds = [
            b"request",
            config.next_request_id.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub request: Account<'info, RandomnessRequest>,

    /// Winner set, filled in by the randomness delivery
    #[account(
        init,
        payer = authority,
        space = WINNER_LIST_ACCOUNT_SIZE,
        seeds = [
            b"winners",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub winner_list: Account<'info, WinnerList>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
