use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

#[event]
pub struct AuthorityTransferStarted {
    pub current: Pubkey,
    pub pending: Pubkey,
}

#[event]
pub struct AuthorityTransferred {
    pub previous: Pubkey,
    pub new: Pubkey,
}

/// Nominates a successor for the admin capability. Nothing changes hands
/// until the successor accepts, so a mistyped key cannot orphan the
/// program. Nominating `Pubkey::default()` clears an outstanding
/// nomination.
pub fn transfer_authority(ctx: Context<TransferAuthority>, new_authority: Pubkey) -> Result<()> {
    ctx.accounts.config.pending_authority = new_authority;
    emit!(AuthorityTransferStarted {
        current: ctx.accounts.config.authority,
        pending: new_authority,
    });
    Ok(())
}

/// Completes a pending transfer; only the nominated successor may sign.
pub fn accept_authority(ctx: Context<AcceptAuthority>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(
        config.pending_authority != Pubkey::default(),
        RaffleError::NoPendingAuthority
    );
    require!(
        ctx.accounts.new_authority.key() == config.pending_authority,
        RaffleError::NotPendingAuthority
    );

    let previous = config.authority;
    config.authority = config.pending_authority;
    config.pending_authority = Pubkey::default();

    emit!(AuthorityTransferred {
        previous,
        new: config.authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferAuthority<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}

#[derive(Accounts)]
pub struct AcceptAuthority<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    pub new_authority: Signer<'info>,
}
