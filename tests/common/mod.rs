//! Shared helpers for integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use bjround::{Card, CardSource, DeckHandle, Rank, SourceError, Suit, WireCard};

pub const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Card source call kinds, for scripting failures and inspecting traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    NewDeck,
    Draw(usize),
    Reshuffle,
}

#[derive(Default)]
struct Script {
    cards: VecDeque<WireCard>,
    failures: VecDeque<(Call, SourceError)>,
    short_next_draw: bool,
    decks_issued: usize,
    calls: Vec<Call>,
}

/// A card source that deals a fixed sequence of cards across all decks.
#[derive(Default)]
pub struct ScriptedSource {
    script: RefCell<Script>,
}

impl ScriptedSource {
    /// Cards are drawn in the order given.
    pub fn new(cards: &[Card]) -> Self {
        let source = Self::default();
        source.push_cards(cards);
        source
    }

    pub fn push_cards(&self, cards: &[Card]) {
        self.script
            .borrow_mut()
            .cards
            .extend(cards.iter().map(Card::to_wire));
    }

    pub fn push_wire(&self, wire: WireCard) {
        self.script.borrow_mut().cards.push_back(wire);
    }

    /// The next call of this kind fails with `error`.
    pub fn fail_next(&self, call: Call, error: SourceError) {
        self.script.borrow_mut().failures.push_back((call, error));
    }

    /// The next draw returns one card fewer than requested.
    pub fn short_next_draw(&self) {
        self.script.borrow_mut().short_next_draw = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.borrow().calls.clone()
    }

    pub fn decks_issued(&self) -> usize {
        self.script.borrow().decks_issued
    }

    fn scripted_failure(script: &mut Script, call: Call) -> Option<SourceError> {
        script.calls.push(call);
        let matches = script
            .failures
            .front()
            .is_some_and(|(scripted, _)| *scripted == call);
        if matches {
            script.failures.pop_front().map(|(_, error)| error)
        } else {
            None
        }
    }
}

impl CardSource for ScriptedSource {
    fn new_deck(&self) -> Result<DeckHandle, SourceError> {
        let mut script = self.script.borrow_mut();
        if let Some(error) = Self::scripted_failure(&mut script, Call::NewDeck) {
            return Err(error);
        }
        script.decks_issued += 1;
        Ok(DeckHandle::new(format!("scripted-{}", script.decks_issued)))
    }

    fn draw(&self, _deck: &DeckHandle, count: usize) -> Result<Vec<WireCard>, SourceError> {
        let mut script = self.script.borrow_mut();
        if let Some(error) = Self::scripted_failure(&mut script, Call::Draw(count)) {
            return Err(error);
        }
        if script.cards.len() < count {
            return Err(SourceError::Exhausted);
        }
        let take = if std::mem::take(&mut script.short_next_draw) {
            count - 1
        } else {
            count
        };
        Ok(script.cards.drain(..take).collect())
    }

    fn reshuffle(&self, _deck: &DeckHandle) -> Result<(), SourceError> {
        let mut script = self.script.borrow_mut();
        match Self::scripted_failure(&mut script, Call::Reshuffle) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
