use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod selection;
pub mod state;

declare_id!("8MzT2NEtMboWQ2iohBF83WZxp53FL3ceuyffk27tbDbi");

#[program]
pub mod raffle_ledger {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>, vrf_authority: Pubkey) -> Result<()> {
        instructions::init_config::init_config(ctx, vrf_authority)
    }

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        entry_price: u64,
        duration: i64,
        max_entries: u64,
        winner_percent: u8,
        fee_percent: u8,
    ) -> Result<()> {
        instructions::create_raffle::create_raffle(
            ctx,
            entry_price,
            duration,
            max_entries,
            winner_percent,
            fee_percent,
        )
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, count: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, count)
    }

    pub fn trigger_draw(ctx: Context<TriggerDraw>) -> Result<()> {
        instructions::trigger_draw::trigger_draw(ctx)
    }

    pub fn deliver_randomness<'info>(
        ctx: Context<'_, '_, 'info, 'info, DeliverRandomness<'info>>,
        request_id: u64,
        values: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::deliver_randomness::deliver_randomness(ctx, request_id, values)
    }

    pub fn cancel_raffle(ctx: Context<CancelRaffle>, reason: String) -> Result<()> {
        instructions::cancel_raffle::cancel_raffle(ctx, reason)
    }

    pub fn emergency_cancel_drawing(ctx: Context<EmergencyCancelDrawing>) -> Result<()> {
        instructions::emergency_cancel_drawing::emergency_cancel_drawing(ctx)
    }

    pub fn claim_refund(ctx: Context<ClaimRefund>) -> Result<()> {
        instructions::claim_refund::claim_refund(ctx)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        instructions::withdraw_fees::withdraw_fees(ctx, amount)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::set_paused(ctx, paused)
    }

    pub fn update_vrf_config(
        ctx: Context<UpdateVrfConfig>,
        new_vrf_authority: Pubkey,
    ) -> Result<()> {
        instructions::update_vrf_config::update_vrf_config(ctx, new_vrf_authority)
    }

    pub fn update_limits(
        ctx: Context<UpdateLimits>,
        max_entries_per_user: u64,
        max_pool_lamports: u64,
        min_entries: u64,
    ) -> Result<()> {
        instructions::update_limits::update_limits(
            ctx,
            max_entries_per_user,
            max_pool_lamports,
            min_entries,
        )
    }

    pub fn transfer_authority(
        ctx: Context<TransferAuthority>,
        new_authority: Pubkey,
    ) -> Result<()> {
        instructions::transfer_authority::transfer_authority(ctx, new_authority)
    }

    pub fn accept_authority(ctx: Context<AcceptAuthority>) -> Result<()> {
        instructions::transfer_authority::accept_authority(ctx)
    }
}
