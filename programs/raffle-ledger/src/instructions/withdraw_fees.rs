use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, FeeVault},
};

/// Event emitted when protocol fees are withdrawn
#[event]
pub struct FeesWithdrawn {
    pub destination: Pubkey,
    pub amount: u64,
    /// Fee balance remaining after this withdrawal
    pub remaining: u64,
}

/// Instruction to withdraw accrued protocol fees
///
/// # Security Considerations
/// 1. Validates the signer is the program authority
/// 2. Rejects a zero destination, a zero amount, and any amount above the
///    tracked fee balance - the counter, not the vault's raw lamports,
///    bounds the withdrawal, so rent is untouchable
/// 3. The balance is decremented before the lamports move
/// 4. This instruction has no access path to any raffle's escrow; only
///    the segregated fee vault is debited
pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.destination.key() != Pubkey::default(),
        RaffleError::ZeroWithdrawDestination
    );

    // Balance first, transfer second
    ctx.accounts.config.debit_fees(amount)?;

    let vault_info = ctx.accounts.fee_vault.to_account_info();
    vault_info.sub_lamports(amount)?;
    ctx.accounts.destination.add_lamports(amount)?;

    emit!(FeesWithdrawn {
        destination: ctx.accounts.destination.key(),
        amount,
        remaining: ctx.accounts.config.fee_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ RaffleError::NotProgramAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [b"fee_vault"],
        bump = config.fee_vault_bump,
    )]
    pub fee_vault: Account<'info, FeeVault>,

    /// CHECK: Any wallet the authority designates; validated non-zero in
    /// the handler
    #[account(mut)]
    pub destination: UncheckedAccount<'info>,

    pub authority: Signer<'info>,
}
