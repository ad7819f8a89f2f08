//! The round state machine.
//!
//! [`Round`] performs no I/O. Every input (a player action, a reply from the
//! card source, a due dealer tick) returns a [`Transition`] carrying the new
//! state and the [`Effect`]s the caller must carry out. Card source requests
//! and dealer ticks are tagged with the round generation; anything that comes
//! back tagged with an older generation is discarded.

use core::time::Duration;

use alloc::string::String;
use alloc::vec::Vec;
use tracing::{info, warn};

use crate::card::{Card, WireCard};
use crate::error::{RoundError, SourceError};
use crate::hand::{CardView, DealerHand, Hand};
use crate::options::RoundOptions;
use crate::result::{Outcome, RoundResult};
use crate::schedule::DealerTick;
use crate::source::DeckHandle;

mod actions;
mod dealer;
mod reply;
pub mod state;

pub use state::{RoundState, Side};

const WELCOME: &str = "Welcome to Blackjack!";

/// Cards dealt at the start of a round: two each, player first.
pub const INITIAL_DEAL: usize = 4;

/// A call the caller must make on the card source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Acquire a fresh shuffled deck.
    NewDeck,
    /// Reshuffle the given deck.
    Reshuffle(DeckHandle),
    /// Draw `count` cards from the given deck.
    Draw {
        /// Deck to draw from.
        deck: DeckHandle,
        /// Number of cards.
        count: usize,
    },
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send `request` to the card source and pass the reply to
    /// [`Round::complete`] with the same `generation`.
    Request {
        /// Round generation the request belongs to.
        generation: u64,
        /// The call to make.
        request: Request,
    },
    /// Hand `tick` to [`Round::tick`] once `delay` has passed.
    ScheduleDealerDraw {
        /// The deferred draw.
        tick: DealerTick,
        /// Pause before the draw.
        delay: Duration,
    },
}

/// The card source's answer to a [`Request`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A new deck was acquired.
    Deck(DeckHandle),
    /// The deck was reshuffled.
    Reshuffled,
    /// Cards were drawn.
    Cards(Vec<WireCard>),
    /// The request failed.
    Failed(SourceError),
}

/// The result of feeding one input to a [`Round`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the input was applied.
    pub state: RoundState,
    /// Work to carry out, in order.
    pub effects: Vec<Effect>,
    /// The input belonged to an older generation or answered nothing, and
    /// was ignored.
    pub stale: bool,
}

/// What the presentation layer is shown after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Round generation.
    pub generation: u64,
    /// Current state.
    pub state: RoundState,
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// The dealer's cards, hole card face down until the player stands.
    pub dealer_hand: Vec<CardView>,
    /// The player's total.
    pub player_score: u8,
    /// The dealer's total, unknown while the hole card is face down.
    pub dealer_score: Option<u8>,
    /// Status line.
    pub message: String,
    /// A card source request is in flight.
    pub awaiting_source: bool,
    /// The last request failed and may be retried.
    pub retryable: bool,
    /// Final result once the round is over.
    pub result: Option<RoundResult>,
}

/// A request the round is waiting on, or one that failed and can be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// `replacing` is set when the previous deck ran out mid-round.
    NewDeck { replacing: bool },
    Reshuffle,
    Draw { side: Side, count: usize },
}

impl Pending {
    const INITIAL: Self = Self::Draw {
        side: Side::Initial,
        count: INITIAL_DEAL,
    };

    const fn failure_message(self) -> &'static str {
        match self {
            Self::NewDeck { .. } => "Error fetching deck. Please try again.",
            Self::Reshuffle => "Error shuffling deck. Please try again.",
            Self::Draw { .. } => "Error drawing card. Please try again.",
        }
    }
}

/// A single-player blackjack round against the house.
///
/// The round owns both hands, the deck handle, and the generation counter.
/// It accepts one card source request at a time.
///
/// # Example
///
/// ```
/// use bjround::{Effect, Request, Round, RoundOptions, RoundState};
///
/// let mut round = Round::new(RoundOptions::default());
/// let transition = round.new_round().unwrap();
/// assert_eq!(transition.state, RoundState::Dealing);
/// assert!(matches!(
///     transition.effects[..],
///     [Effect::Request { request: Request::NewDeck, .. }]
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    options: RoundOptions,
    state: RoundState,
    player: Hand,
    dealer: DealerHand,
    deck: Option<DeckHandle>,
    generation: u64,
    in_flight: Option<Pending>,
    stalled: Option<Pending>,
    /// Draw to re-issue once a replacement deck arrives.
    resume: Option<Pending>,
    /// Set between a replacement deck arriving and the next card landing.
    deck_replaced: bool,
    tick_armed: bool,
    result: Option<RoundResult>,
    message: String,
}

impl Round {
    /// Creates an idle round with no deck.
    #[must_use]
    pub fn new(options: RoundOptions) -> Self {
        Self {
            options,
            state: RoundState::Idle,
            player: Hand::new(),
            dealer: DealerHand::new(),
            deck: None,
            generation: 0,
            in_flight: None,
            stalled: None,
            resume: None,
            deck_replaced: false,
            tick_armed: false,
            result: None,
            message: String::from(WELCOME),
        }
    }

    /// Creates an idle round that will use an already acquired deck.
    #[must_use]
    pub fn with_deck(options: RoundOptions, deck: DeckHandle) -> Self {
        let mut round = Self::new(options);
        round.deck = Some(deck);
        round
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the deck handle in use, if any.
    #[must_use]
    pub const fn deck(&self) -> Option<&DeckHandle> {
        self.deck.as_ref()
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the result once the round is over.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns whether a card source request is in flight.
    #[must_use]
    pub const fn is_awaiting_source(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns whether a failed request is waiting for [`retry`](Self::retry).
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.stalled.is_some()
    }

    /// Returns whether the dealer still has a draw scheduled, in flight, or
    /// waiting to be retried.
    #[must_use]
    pub const fn dealer_draw_pending(&self) -> bool {
        matches!(self.state, RoundState::DealerTurn)
            && (self.tick_armed || self.in_flight.is_some() || self.stalled.is_some())
    }

    /// Builds the presentation snapshot of the current round.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            state: self.state,
            player_hand: self.player.cards().to_vec(),
            dealer_hand: self.dealer.visible_cards(),
            player_score: self.player.value(),
            dealer_score: self
                .dealer
                .is_hole_revealed()
                .then(|| self.dealer.value()),
            message: self.message.clone(),
            awaiting_source: self.in_flight.is_some(),
            retryable: self.stalled.is_some(),
            result: self.result,
        }
    }

    /// Abandons whatever is in progress and returns to idle.
    ///
    /// Any reply or dealer tick still outstanding is ignored when it arrives.
    pub fn abandon(&mut self) -> Transition {
        self.reset_to_idle(WELCOME);
        self.transition(Vec::new())
    }

    fn set_message(&mut self, message: &str) {
        self.message.clear();
        self.message.push_str(message);
    }

    fn transition(&self, effects: Vec<Effect>) -> Transition {
        Transition {
            state: self.state,
            effects,
            stale: false,
        }
    }

    fn stale(&self) -> Transition {
        Transition {
            state: self.state,
            effects: Vec::new(),
            stale: true,
        }
    }

    /// Records a request as in flight and returns the effect that performs it.
    ///
    /// A draw or reshuffle without a deck first acquires one.
    fn issue(&mut self, pending: Pending) -> Effect {
        let request = match (pending, self.deck.clone()) {
            (Pending::NewDeck { .. }, _) => Request::NewDeck,
            (Pending::Reshuffle, Some(deck)) => Request::Reshuffle(deck),
            (Pending::Draw { count, .. }, Some(deck)) => Request::Draw { deck, count },
            (Pending::Reshuffle, None) => return self.replace_deck(Pending::INITIAL, false),
            (Pending::Draw { side, .. }, None) => {
                return self.replace_deck(pending, side != Side::Initial);
            }
        };

        self.in_flight = Some(pending);
        Effect::Request {
            generation: self.generation,
            request,
        }
    }

    /// Drops the current deck and asks for a new one, remembering the draw
    /// to re-issue once it arrives.
    fn replace_deck(&mut self, resume: Pending, replacing: bool) -> Effect {
        self.deck = None;
        self.resume = Some(resume);
        self.issue(Pending::NewDeck { replacing })
    }

    /// Ends the round with the given outcome.
    fn finish(&mut self, outcome: Outcome) {
        self.dealer.reveal_hole();
        self.tick_armed = false;
        self.state = outcome.state();
        self.set_message(outcome.message());

        let result = RoundResult {
            outcome,
            player_score: self.player.value(),
            dealer_score: self.dealer.value(),
        };
        info!(
            generation = self.generation,
            ?outcome,
            player = result.player_score,
            dealer = result.dealer_score,
            "round finished"
        );
        self.result = Some(result);
    }

    /// Aborts the round after the source broke its contract.
    fn fail_round(&mut self, error: RoundError) -> RoundError {
        warn!(generation = self.generation, %error, "abandoning round");
        self.reset_to_idle("The card source sent an unreadable card. Start a new round.");
        error
    }

    fn reset_to_idle(&mut self, message: &str) {
        self.generation += 1;
        self.player.clear();
        self.dealer.clear();
        self.in_flight = None;
        self.stalled = None;
        self.resume = None;
        self.deck_replaced = false;
        self.tick_armed = false;
        self.result = None;
        self.state = RoundState::Idle;
        self.set_message(message);
    }
}
