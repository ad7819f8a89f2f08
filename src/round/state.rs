//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundState {
    /// No round in progress.
    Idle,
    /// Acquiring a deck and dealing the initial four cards.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// The player went over 21.
    PlayerBust,
    /// The dealer plays out their hand.
    DealerTurn,
    /// The dealer went over 21.
    DealerBust,
    /// The player finished closer to 21.
    PlayerWin,
    /// The dealer finished closer to 21.
    DealerWin,
    /// Both sides finished on the same total.
    Push,
}

impl RoundState {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::PlayerBust | Self::DealerBust | Self::PlayerWin | Self::DealerWin | Self::Push
        )
    }

    /// Returns whether a new round may be started from this state.
    #[must_use]
    pub const fn accepts_new_round(self) -> bool {
        matches!(self, Self::Idle) || self.is_terminal()
    }

    /// Returns whether the dealer's hole card is kept face down.
    #[must_use]
    pub const fn hides_hole_card(self) -> bool {
        matches!(self, Self::Dealing | Self::PlayerTurn)
    }
}

/// Which hand a draw is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The initial four-card deal, alternating player and dealer.
    Initial,
    /// The player's hand.
    Player,
    /// The dealer's hand.
    Dealer,
}
