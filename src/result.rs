//! Round result types.

use core::cmp::Ordering;

use crate::round::RoundState;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player had the higher total.
    PlayerWin,
    /// Dealer had the higher total.
    DealerWin,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Compares final totals of two hands that both stood.
    ///
    /// Higher wins; equal totals push.
    #[must_use]
    pub fn compare(player_score: u8, dealer_score: u8) -> Self {
        match player_score.cmp(&dealer_score) {
            Ordering::Greater => Self::PlayerWin,
            Ordering::Less => Self::DealerWin,
            Ordering::Equal => Self::Push,
        }
    }

    /// Returns the terminal round state for this outcome.
    #[must_use]
    pub const fn state(self) -> RoundState {
        match self {
            Self::PlayerBust => RoundState::PlayerBust,
            Self::DealerBust => RoundState::DealerBust,
            Self::PlayerWin => RoundState::PlayerWin,
            Self::DealerWin => RoundState::DealerWin,
            Self::Push => RoundState::Push,
        }
    }

    /// Returns the status message shown for this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Bust! You went over 21.",
            Self::DealerBust => "Dealer busts! You win!",
            Self::PlayerWin => "You win!",
            Self::DealerWin => "Dealer wins!",
            Self::Push => "It's a push (tie)!",
        }
    }

    /// Returns whether the player came out ahead.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(self, Self::DealerBust | Self::PlayerWin)
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final total.
    pub player_score: u8,
    /// The dealer's final total.
    pub dealer_score: u8,
}
