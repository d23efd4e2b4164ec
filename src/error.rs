//! Error types for table operations.
//!
//! Every error is recoverable at the engine boundary: the rejected operation
//! is a no-op and may be re-initiated by the caller.

use thiserror::Error;

/// Errors that can occur while placing or clearing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// The table is busy with a scheduled step chain.
    #[error("table is busy")]
    Busy,
    /// Betting is not open.
    #[error("betting is not open")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The increment would overdraw the chip total.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when confirming a bet and starting the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The table is busy with a scheduled step chain.
    #[error("table is busy")]
    Busy,
    /// Betting is not open.
    #[error("betting is not open")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The table is busy with a scheduled step chain.
    #[error("table is busy")]
    Busy,
    /// It is not the player's turn.
    #[error("invalid state for this action")]
    InvalidState,
    /// The hand's legality predicate rejects this action.
    #[error("action not allowed for this hand")]
    NotAllowed,
    /// The action is surfaced but not implemented.
    #[error("action not implemented yet")]
    Unimplemented,
    /// The shoe ran out of cards; the round was aborted.
    #[error("shoe exhausted")]
    ShoeExhausted,
}

/// Errors that can occur while advancing the step queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// No step is pending.
    #[error("no step is pending")]
    NothingPending,
    /// The shoe ran out of cards; the round was aborted.
    #[error("shoe exhausted")]
    ShoeExhausted,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The table is busy with a scheduled step chain.
    #[error("table is busy")]
    Busy,
    /// A round is already under way.
    #[error("invalid state to start a round")]
    InvalidState,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// The table is busy with a scheduled step chain.
    #[error("table is busy")]
    Busy,
    /// A round is under way; reshuffling is only possible between rounds.
    #[error("round in progress")]
    RoundInProgress,
}
