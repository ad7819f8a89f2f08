//! The card source capability and an in-process implementation.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit, WireCard};
use crate::error::SourceError;
use crate::sync::Mutex;

/// Opaque reference to a shuffled deck held by a card source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckHandle(String);

impl DeckHandle {
    /// Wraps a source-specific deck identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the deck identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that hands out shuffled decks and draws cards from them.
///
/// The round never shuffles or stores cards itself; it asks a source.
pub trait CardSource {
    /// Acquires a freshly shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the source cannot be reached.
    fn new_deck(&self) -> Result<DeckHandle, SourceError>;

    /// Draws `count` cards from the deck.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Exhausted`] if fewer than `count` cards remain,
    /// or [`SourceError::Unavailable`] on any other failure.
    fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<WireCard>, SourceError>;

    /// Returns all drawn cards to the deck and shuffles it.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the source cannot be reached.
    fn reshuffle(&self, deck: &DeckHandle) -> Result<(), SourceError>;
}

impl<S: CardSource + ?Sized> CardSource for &S {
    fn new_deck(&self) -> Result<DeckHandle, SourceError> {
        (**self).new_deck()
    }

    fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<WireCard>, SourceError> {
        (**self).draw(deck, count)
    }

    fn reshuffle(&self, deck: &DeckHandle) -> Result<(), SourceError> {
        (**self).reshuffle(deck)
    }
}

/// An in-process card source holding any number of independent single
/// decks, shuffled with a seeded RNG.
pub struct ShuffledDecks {
    /// Remaining cards per deck; the top of the deck is the end of the vector.
    decks: Mutex<HashMap<DeckHandle, Vec<Card>>>,
    /// Next deck number to assign.
    next_id: AtomicU64,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl ShuffledDecks {
    /// Creates a source with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{CardSource, ShuffledDecks};
    ///
    /// let source = ShuffledDecks::new(42);
    /// let deck = source.new_deck().unwrap();
    /// assert_eq!(source.cards_remaining(&deck), Some(52));
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            decks: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates and shuffles a full deck.
    fn create_deck(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        cards.shuffle(&mut *self.rng.lock());
        cards
    }

    /// Returns the number of cards left in the deck, or `None` for an
    /// unknown handle.
    pub fn cards_remaining(&self, deck: &DeckHandle) -> Option<usize> {
        self.decks.lock().get(deck).map(Vec::len)
    }

    /// Replaces the contents of a deck. `cards[0]` is drawn first.
    ///
    /// Returns `false` if the handle is unknown.
    pub fn stack(&self, deck: &DeckHandle, cards: &[Card]) -> bool {
        let mut decks = self.decks.lock();
        let Some(remaining) = decks.get_mut(deck) else {
            return false;
        };
        remaining.clear();
        remaining.extend(cards.iter().rev().cloned());
        true
    }
}

impl CardSource for ShuffledDecks {
    fn new_deck(&self) -> Result<DeckHandle, SourceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let handle = DeckHandle::new(format!("deck-{id}"));
        let cards = self.create_deck();
        self.decks.lock().insert(handle.clone(), cards);
        debug!(deck = %handle, "created deck");
        Ok(handle)
    }

    fn draw(&self, deck: &DeckHandle, count: usize) -> Result<Vec<WireCard>, SourceError> {
        let mut decks = self.decks.lock();
        let remaining = decks.get_mut(deck).ok_or(SourceError::Unavailable)?;

        if remaining.len() < count {
            return Err(SourceError::Exhausted);
        }

        let split = remaining.len() - count;
        let drawn: Vec<WireCard> = remaining.drain(split..).rev().map(|c| c.to_wire()).collect();
        drop(decks);

        Ok(drawn)
    }

    fn reshuffle(&self, deck: &DeckHandle) -> Result<(), SourceError> {
        if !self.decks.lock().contains_key(deck) {
            return Err(SourceError::Unavailable);
        }

        let cards = self.create_deck();
        self.decks.lock().insert(deck.clone(), cards);
        Ok(())
    }
}
