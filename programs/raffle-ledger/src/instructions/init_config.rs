use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_MAX_ENTRIES_PER_USER, DEFAULT_MAX_POOL_LAMPORTS, DEFAULT_MIN_ENTRIES,
};
use crate::state::{Config, FeeVault, CONFIG_ACCOUNT_SIZE, FEE_VAULT_ACCOUNT_SIZE};

/// Instruction to initialize the program configuration and the fee vault
/// This should be called once during program deployment
///
/// # Security Considerations
/// - Creates PDAs with seeds "config" and "fee_vault"
/// - The signer becomes the program authority; handing the capability over
///   later requires the two-step transfer_authority/accept_authority flow
/// - `vrf_authority` is the only identity whose randomness deliveries
///   will be accepted
///
/// # Account Validations
/// * Config - New PDA initialized with proper space allocation
/// * FeeVault - New PDA that will custody accrued protocol fees
/// * Authority - Signer, becomes the admin capability holder
pub fn init_config(ctx: Context<InitConfig>, vrf_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.pending_authority = Pubkey::default();
    config.vrf_authority = vrf_authority;
    config.paused = false;
    config.fee_balance = 0;
    config.next_raffle_id = 1;
    config.next_request_id = 1;
    config.max_entries_per_user = DEFAULT_MAX_ENTRIES_PER_USER;
    config.max_pool_lamports = DEFAULT_MAX_POOL_LAMPORTS;
    config.min_entries = DEFAULT_MIN_ENTRIES;
    config.bump = ctx.bumps.config;
    config.fee_vault_bump = ctx.bumps.fee_vault;

    ctx.accounts.fee_vault.bump = ctx.bumps.fee_vault;
    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = FEE_VAULT_ACCOUNT_SIZE,
        seeds = [b"fee_vault"],
        bump
    )]
    pub fee_vault: Account<'info, FeeVault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
