use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

#[event]
pub struct LimitsUpdated {
    pub max_entries_per_user: u64,
    pub max_pool_lamports: u64,
    pub min_entries: u64,
}

/// Adjusts the runtime-tunable limits. Takes effect for subsequent
/// operations only; raffles already past a gate are not re-checked.
pub fn update_limits(
    ctx: Context<UpdateLimits>,
    max_entries_per_user: u64,
    max_pool_lamports: u64,
    min_entries: u64,
) -> Result<()> {
    require!(max_entries_per_user > 0, RaffleError::InvalidLimit);
    require!(max_pool_lamports > 0, RaffleError::InvalidLimit);
    require!(min_entries > 0, RaffleError::InvalidLimit);

    let config = &mut ctx.accounts.config;
    config.max_entries_per_user = max_entries_per_user;
    config.max_pool_lamports = max_pool_lamports;
    config.min_entries = min_entries;

    emit!(LimitsUpdated {
        max_entries_per_user,
        max_pool_lamports,
        min_entries,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateLimits<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}
