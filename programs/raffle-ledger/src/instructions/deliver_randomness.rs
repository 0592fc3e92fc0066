use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    selection,
    state::{
        Config, EntryIndex, FeeVault, Raffle, RaffleState, RandomnessRequest, Treasury,
        WinnerList,
    },
};

/// Event emitted when winners are selected and paid
#[event]
pub struct WinnersSelected {
    pub raffle: Pubkey,
    pub request_id: u64,
    /// Final winner count; may be below the quota if unique owners ran out
    pub num_winners: u32,
    pub prize_per_winner: u64,
    /// Fee credited to the protocol balance, inclusive of division dust
    pub fee: u64,
}

/// The asynchronous randomness callback. Invoked by the configured oracle
/// identity with the values requested in trigger_draw.
///
/// A structurally valid delivery whose context no longer matches - the
/// raffle left Drawing, the request was already consumed, or it is not the
/// raffle's outstanding request - is a silent no-op rather than an error:
/// the oracle cannot be prevented from delivering late or twice, and a
/// duplicate must never double-pay.
///
/// # Security Considerations
/// 1. Only the configured vrf_authority signer is accepted
/// 2. The request account is bound to its id by PDA seeds and to the
///    raffle by stored key, so a delivery can never settle the wrong raffle
/// 3. Winner selection, the prize split, and every state write complete
///    before any lamports move; payouts are direct balance edits on the
///    program-owned escrow and perform no external calls
/// 4. Winner wallets are supplied as remaining accounts; a missing wallet
///    aborts the whole delivery with no partial payout, and the oracle may
///    retry with the correct account list
pub fn deliver_randomness<'info>(
    ctx: Context<'_, '_, 'info, 'info, DeliverRandomness<'info>>,
    request_id: u64,
    values: Vec<[u8; 32]>,
) -> Result<()> {
    let raffle_key = ctx.accounts.raffle.key();

    if ctx.accounts.request.consumed
        || ctx.accounts.raffle.state != RaffleState::Drawing
        || ctx.accounts.raffle.request_id != ctx.accounts.request.id
    {
        msg!("Stale randomness delivery for request {}; ignoring", request_id);
        return Ok(());
    }

    require!(!values.is_empty(), RaffleError::EmptyRandomness);

    let total_entries = ctx.accounts.raffle.total_entries;
    let quota = ctx.accounts.raffle.num_winners;

    let winners = {
        let index = ctx.accounts.entry_index.load()?;
        selection::select_winners(&values, total_entries, quota, |slot| index.owner_of(slot))
    };
    // total_entries >= 1 and values is non-empty, so at least one winner
    let num_winners = winners.len() as u32;

    let split = selection::prize_split(
        ctx.accounts.raffle.total_pool,
        ctx.accounts.raffle.fee_percent,
        num_winners,
    )?;

    // Finalize all bookkeeping before touching lamports
    let raffle = &mut ctx.accounts.raffle;
    raffle.transition(RaffleState::Completed)?;
    raffle.num_winners = num_winners;
    raffle.prize_per_winner = split.prize_per_winner;

    ctx.accounts.request.consumed = true;
    ctx.accounts.winner_list.winners = winners.clone();

    let config = &mut ctx.accounts.config;
    config.fee_balance = config
        .fee_balance
        .checked_add(split.fee)
        .ok_or(RaffleError::Overflow)?;

    // Fee share moves to the global vault, prizes to the winners.
    // Direct balance edits work because both escrows are program-owned.
    let treasury_info = ctx.accounts.treasury.to_account_info();
    treasury_info.sub_lamports(split.fee)?;
    ctx.accounts
        .fee_vault
        .to_account_info()
        .add_lamports(split.fee)?;

    for winner in &winners {
        let wallet = ctx
            .remaining_accounts
            .iter()
            .find(|a| a.key() == *winner)
            .ok_or(RaffleError::WinnerAccountMissing)?;
        treasury_info.sub_lamports(split.prize_per_winner)?;
        wallet.add_lamports(split.prize_per_winner)?;
    }

    emit!(WinnersSelected {
        raffle: raffle_key,
        request_id,
        num_winners,
        prize_per_winner: split.prize_per_winner,
        fee: split.fee,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct DeliverRandomness<'info> {
    /// The oracle identity configured on the program
    pub vrf_authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = vrf_authority @ RaffleError::NotVrfAuthority,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [
            b"request",
            request_id.to_le_bytes().as_ref(),
        ],
        bump = request.bump,
    )]
    pub request: Account<'info, RandomnessRequest>,

    #[account(
        mut,
        constraint = request.raffle == raffle.key() @ RaffleError::RequestRaffleMismatch,
        has_one = entry_index,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    pub entry_index: AccountLoader<'info, EntryIndex>,

    #[account(
        mut,
        seeds = [
            b"winners",
            raffle.key().as_ref(),
        ],
        bump = winner_list.bump,
    )]
    pub winner_list: Account<'info, WinnerList>,

    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [b"fee_vault"],
        bump = config.fee_vault_bump,
    )]
    pub fee_vault: Account<'info, FeeVault>,
    // Winner wallets are passed as remaining accounts
}
