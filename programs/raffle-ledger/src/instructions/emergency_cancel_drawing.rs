use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle, RaffleState},
};

use super::cancel_raffle::RaffleCancelled;

pub const EMERGENCY_CANCEL_REASON: &str = "randomness delivery timed out";

/// Instruction to recover a raffle whose randomness delivery never arrived
///
/// Permitted only from Drawing and only once the delay measured from the
/// trigger timestamp has elapsed. The delay exists so the authority cannot
/// cancel a draw merely because an already-resolved but unfavorable
/// outcome is pending; by the time it elapses, the delivery has either
/// arrived (making this path moot) or genuinely failed.
///
/// Cancelling does not retract the oracle request; a delivery landing
/// afterwards hits the stale-callback no-op.
pub fn emergency_cancel_drawing(ctx: Context<EmergencyCancelDrawing>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    require!(
        ctx.accounts.raffle.emergency_cancel_unlocked(now),
        RaffleError::EmergencyDelayNotElapsed
    );

    let raffle = &mut ctx.accounts.raffle;
    raffle.transition(RaffleState::Cancelled)?;
    raffle.cancel_reason = EMERGENCY_CANCEL_REASON.to_string();

    emit!(RaffleCancelled {
        raffle: ctx.accounts.raffle.key(),
        reason: EMERGENCY_CANCEL_REASON.to_string(),
        cancelled_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyCancelDrawing<'info> {
    #[account(
        mut,
        constraint = raffle.state == RaffleState::Drawing @ RaffleError::RaffleNotDrawing,
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
