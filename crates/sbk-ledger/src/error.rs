use sbk_types::BallCoordinate;
use thiserror::Error;

/// Errors produced by ledger operations.
///
/// These are invariant violations: the caller asked for something the
/// ledger must never do. Expected business outcomes (a completed over, a
/// fallen wicket) are ordinary return values, never errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("over already holds 6 valid deliveries; start the next over")]
    OverFull,

    #[error("innings is closed; no further deliveries accepted")]
    InningsClosed,

    #[error("previous over is incomplete; cannot start a new over")]
    OverIncomplete,

    #[error("no over in progress; start an over before recording")]
    NoActiveOver,

    #[error("no batsmen at the crease; set batsmen before recording")]
    NoBatsmen,

    #[error("delivery {coordinate} does not belong to over {current_over}")]
    WrongOver {
        coordinate: BallCoordinate,
        current_over: u32,
    },

    #[error("no delivery recorded yet; nothing to augment")]
    NothingToAugment,
}
