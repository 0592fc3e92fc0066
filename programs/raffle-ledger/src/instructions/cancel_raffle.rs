use anchor_lang::prelude::*;

use crate::{
    constants::MAX_CANCEL_REASON_LEN,
    error::RaffleError,
    state::{Config, Raffle, RaffleState},
};

/// Event emitted whenever a raffle reaches the Cancelled state, whatever
/// the path: admin cancel, under-minimum trigger, or emergency cancel
#[event]
pub struct RaffleCancelled {
    pub raffle: Pubkey,
    pub reason: String,
    pub cancelled_at: i64,
}

/// Instruction to cancel an Active raffle, unlocking per-user refunds
///
/// # Account Validations
/// * Raffle - Must be Active; Drawing raffles go through the time-locked
///   emergency path instead
/// * Config - Signer must be the program authority
pub fn cancel_raffle(ctx: Context<CancelRaffle>, reason: String) -> Result<()> {
    require!(
        reason.len() <= MAX_CANCEL_REASON_LEN,
        RaffleError::CancelReasonTooLong
    );

    let raffle = &mut ctx.accounts.raffle;
    raffle.transition(RaffleState::Cancelled)?;
    raffle.cancel_reason = reason.clone();

    emit!(RaffleCancelled {
        raffle: ctx.accounts.raffle.key(),
        reason,
        cancelled_at: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelRaffle<'info> {
    #[account(
        mut,
        constraint = raffle.state == RaffleState::Active @ RaffleError::RaffleNotActive,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}
