use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

#[event]
pub struct VrfConfigUpdated {
    pub vrf_authority: Pubkey,
}

/// Rotates the oracle identity. Takes effect for subsequent deliveries
/// only; requests already outstanding must be fulfilled by the new
/// identity.
pub fn update_vrf_config(ctx: Context<UpdateVrfConfig>, new_vrf_authority: Pubkey) -> Result<()> {
    ctx.accounts.config.vrf_authority = new_vrf_authority;
    emit!(VrfConfigUpdated {
        vrf_authority: new_vrf_authority,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateVrfConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}
