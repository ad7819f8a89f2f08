//! Error types for card parsing, the card source, and round actions.

use alloc::string::String;

use thiserror::Error;

/// Errors raised when a card reported by the source cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank string is not one of the recognised ranks.
    #[error("unrecognized card rank {0:?}")]
    MalformedRank(String),
    /// The suit string is not one of the recognised suits.
    #[error("unrecognized card suit {0:?}")]
    MalformedSuit(String),
}

/// Failures reported by a [`CardSource`](crate::source::CardSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The deck has too few cards left for the draw.
    #[error("deck exhausted")]
    Exhausted,
    /// The source could not be reached or failed the request.
    #[error("card source unavailable")]
    Unavailable,
}

/// Errors surfaced by the round state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The action is not legal in the current state.
    #[error("invalid round state for this action")]
    InvalidState,
    /// A card source request is already in flight.
    #[error("a card source request is already in flight")]
    RequestPending,
    /// There is no failed request to retry.
    #[error("nothing to retry")]
    NothingToRetry,
    /// The card source failed; the same action may be retried.
    #[error("card source unavailable; please try again")]
    SourceUnavailable,
    /// The card source returned a card that could not be parsed. The round
    /// was reset to idle.
    #[error("malformed card: {0}")]
    MalformedCard(#[from] CardError),
    /// The card source returned a different number of cards than requested.
    /// The round was reset to idle.
    #[error("expected {expected} cards from the source, got {got}")]
    WrongCardCount {
        /// Number of cards requested.
        expected: usize,
        /// Number of cards received.
        got: usize,
    },
    /// The reply does not answer the request in flight.
    #[error("reply does not match the request in flight")]
    UnexpectedReply,
}

impl RoundError {
    /// Returns whether the failed action may be retried without starting a
    /// new round.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::SourceUnavailable)
    }

    /// Returns whether the error forced the round back to idle.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MalformedCard(_) | Self::WrongCardCount { .. })
    }
}
