use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    #[msg("Entry price is below the minimum")]
    EntryPriceTooLow,
    #[msg("Raffle duration is below the minimum")]
    DurationTooShort,
    #[msg("Raffle duration exceeds the maximum")]
    DurationTooLong,
    #[msg("Winner percentage must be between 1 and 50")]
    WinnerPercentOutOfRange,
    #[msg("Platform fee percentage exceeds the hard ceiling")]
    FeePercentTooHigh,
    #[msg("Entry count must be greater than zero")]
    InvalidEntryCount,
    #[msg("Entry cap exceeds the ownership index capacity")]
    MaxEntriesExceedsCapacity,
    #[msg("Cancellation reason is too long")]
    CancelReasonTooLong,
    #[msg("Randomness delivery carried no values")]
    EmptyRandomness,
    #[msg("Raffle is not accepting entries")]
    RaffleNotActive,
    #[msg("Raffle is not in Drawing state")]
    RaffleNotDrawing,
    #[msg("Raffle has not been cancelled")]
    RaffleNotCancelled,
    #[msg("Raffle has ended")]
    RaffleEnded,
    #[msg("Raffle has not ended yet")]
    RaffleNotEnded,
    #[msg("Lifecycle transition is not permitted")]
    InvalidStateTransition,
    #[msg("Only the program authority can perform this operation")]
    NotProgramAuthority,
    #[msg("Only the configured randomness authority can deliver values")]
    NotVrfAuthority,
    #[msg("Only the nominated successor can accept authority")]
    NotPendingAuthority,
    #[msg("No successor has been nominated")]
    NoPendingAuthority,
    #[msg("Signer does not own this entry record")]
    OwnerMismatch,
    #[msg("Purchase would exceed the per-user entry cap")]
    UserEntryCapExceeded,
    #[msg("Purchase would exceed the global pool size cap")]
    PoolCapExceeded,
    #[msg("Purchase would exceed this raffle's entry cap")]
    RaffleCapExceeded,
    #[msg("Entry ownership index is full")]
    EntryIndexFull,
    #[msg("Amount exceeds the withdrawable fee balance")]
    InsufficientFeeBalance,
    #[msg("Withdrawal amount must be greater than zero")]
    ZeroWithdrawAmount,
    #[msg("Withdrawal destination must not be the zero address")]
    ZeroWithdrawDestination,
    #[msg("No entries recorded for this participant")]
    NoEntriesOwned,
    #[msg("Refund has already been claimed")]
    RefundAlreadyClaimed,
    #[msg("A selected winner's wallet was not supplied")]
    WinnerAccountMissing,
    #[msg("Request does not belong to this raffle")]
    RequestRaffleMismatch,
    #[msg("Treasury account does not match the raffle")]
    InvalidTreasury,
    #[msg("Program is paused")]
    ProgramPaused,
    #[msg("Emergency cancel delay has not elapsed")]
    EmergencyDelayNotElapsed,
    #[msg("Limit values must be greater than zero")]
    InvalidLimit,
}
