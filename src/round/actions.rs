use alloc::vec;
use tracing::{debug, info};

use crate::error::RoundError;

use super::{Pending, Round, RoundState, Side, Transition};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        if self.in_flight.is_some() {
            return Err(RoundError::RequestPending);
        }

        Ok(())
    }

    /// Starts a new round: clears both hands, reshuffles (or acquires) the
    /// deck, and deals two cards to each side.
    ///
    /// Legal from idle, from any finished state, and from a deal that stalled
    /// on a source failure.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] while a round is being played or
    /// a deal is in flight.
    pub fn new_round(&mut self) -> Result<Transition, RoundError> {
        let stalled_deal = self.state == RoundState::Dealing && self.in_flight.is_none();
        if !self.state.accepts_new_round() && !stalled_deal {
            return Err(RoundError::InvalidState);
        }

        self.reset_to_idle("Game started! Your turn.");
        self.state = RoundState::Dealing;
        info!(generation = self.generation, "starting round");

        let first = if self.options.reshuffle_on_new_round {
            Pending::Reshuffle
        } else {
            Pending::INITIAL
        };
        let effect = self.issue(first);

        Ok(self.transition(vec![effect]))
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the player's turn and
    /// [`RoundError::RequestPending`] while a draw is already in flight. The
    /// round is left untouched in both cases.
    pub fn hit(&mut self) -> Result<Transition, RoundError> {
        self.ensure_player_turn()?;

        self.stalled = None;
        let effect = self.issue(Pending::Draw {
            side: Side::Player,
            count: 1,
        });

        Ok(self.transition(vec![effect]))
    }

    /// Player action: Stand (keep current hand). The dealer reveals the hole
    /// card and starts playing.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] outside the player's turn and
    /// [`RoundError::RequestPending`] while a draw is in flight.
    pub fn stand(&mut self) -> Result<Transition, RoundError> {
        self.ensure_player_turn()?;

        self.stalled = None;
        self.resume = None;
        self.state = RoundState::DealerTurn;
        self.dealer.reveal_hole();
        self.set_message("Dealer's turn.");
        debug!(
            generation = self.generation,
            player = self.player.value(),
            "player stands"
        );

        let effects = self.dealer_step();
        Ok(self.transition(effects))
    }

    /// Re-issues the card source request that last failed with
    /// [`RoundError::SourceUnavailable`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::RequestPending`] while a request is in flight and
    /// [`RoundError::NothingToRetry`] if no request has failed.
    pub fn retry(&mut self) -> Result<Transition, RoundError> {
        if self.in_flight.is_some() {
            return Err(RoundError::RequestPending);
        }

        let pending = self.stalled.take().ok_or(RoundError::NothingToRetry)?;
        debug!(generation = self.generation, ?pending, "retrying request");
        let effect = self.issue(pending);

        Ok(self.transition(vec![effect]))
    }
}
