use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, RaffleState, Treasury, UserEntry},
};

/// Event emitted when a participant reclaims their stake
#[event]
pub struct RefundClaimed {
    pub raffle: Pubkey,
    pub participant: Pubkey,
    pub entries: u64,
    pub amount: u64,
}

/// Instruction to refund a participant's entries in a cancelled raffle
///
/// Refunds are participant-initiated rather than pushed at cancellation
/// time so no single operation pays an unbounded number of accounts.
/// They deliberately ignore the pause flag: a paused program must never
/// trap user funds.
///
/// # Security Considerations
/// 1. Validates the raffle is Cancelled
/// 2. The signer must own the entry record, which is bound to the raffle
///    by its PDA seeds
/// 3. The one-shot claimed flag is set before the lamports move, so the
///    claim cannot be replayed
pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
    // Flag first, transfer second
    let amount = ctx
        .accounts
        .user_entry
        .claim(ctx.accounts.raffle.entry_price)?;

    let treasury_info = ctx.accounts.treasury.to_account_info();
    treasury_info.sub_lamports(amount)?;
    ctx.accounts
        .participant
        .to_account_info()
        .add_lamports(amount)?;

    emit!(RefundClaimed {
        raffle: ctx.accounts.raffle.key(),
        participant: ctx.accounts.participant.key(),
        entries: ctx.accounts.user_entry.entries,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimRefund<'info> {
    #[account(mut)]
    pub participant: Signer<'info>,

    /// The participant's entry record; stays open so the claimed flag is
    /// permanent
    #[account(
        mut,
        seeds = [
            b"user_entry",
            raffle.key().as_ref(),
            participant.key().as_ref()
        ],
        bump = user_entry.bump,
        constraint = user_entry.owner == participant.key() @ RaffleError::OwnerMismatch,
    )]
    pub user_entry: Account<'info, UserEntry>,

    #[account(
        constraint = raffle.state == RaffleState::Cancelled @ RaffleError::RaffleNotCancelled,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,
}
