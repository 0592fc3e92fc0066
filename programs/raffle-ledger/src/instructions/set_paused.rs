use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

#[event]
pub struct PauseToggled {
    pub paused: bool,
}

/// Toggles the pause gate. Pausing blocks raffle creation and entry
/// purchases; refunds stay open so user funds are never trapped.
pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    ctx.accounts.config.paused = paused;
    emit!(PauseToggled { paused });
    Ok(())
}

#[derive(Accounts)]
pub struct SetPaused<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}
