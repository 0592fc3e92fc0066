//! Program-wide limits. The percentage bounds are fixed for the lifetime of
//! the program; the per-user/pool/minimum limits have runtime-tunable
//! counterparts on the config account seeded from the defaults below.

/// Smallest allowed entry price, in lamports (0.001 SOL)
pub const MIN_ENTRY_PRICE: u64 = 1_000_000;

/// Shortest allowed raffle duration in seconds (1 hour)
pub const MIN_DURATION: i64 = 60 * 60;
/// Longest allowed raffle duration in seconds (30 days)
pub const MAX_DURATION: i64 = 30 * 24 * 60 * 60;

pub const MIN_WINNER_PERCENT: u8 = 1;
pub const MAX_WINNER_PERCENT: u8 = 50;

/// Hard ceiling on the platform fee share of any raffle
pub const MAX_PLATFORM_FEE_PERCENT: u8 = 5;

/// Hard cap on the winner count of a single raffle
pub const MAX_WINNERS: u32 = 100;

/// Upper bound on winner-selection iterations in one randomness delivery.
/// When exhausted, the raffle settles with however many unique winners
/// were found.
pub const SELECTION_ROUNDS: u32 = 1000;

/// How long a draw must sit unresolved before the admin may cancel it (12 h)
pub const EMERGENCY_CANCEL_DELAY: i64 = 12 * 60 * 60;

/// Fixed slot capacity of the per-raffle entry ownership index
pub const ENTRY_INDEX_CAPACITY: u64 = 5000;

/// Longest accepted cancellation reason, in bytes
pub const MAX_CANCEL_REASON_LEN: usize = 64;

// Config defaults, adjustable later through update_limits
pub const DEFAULT_MAX_ENTRIES_PER_USER: u64 = 250;
pub const DEFAULT_MAX_POOL_LAMPORTS: u64 = 10_000 * 1_000_000_000; // 10k SOL
pub const DEFAULT_MIN_ENTRIES: u64 = 2;
