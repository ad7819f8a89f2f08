//! Drives a [`Round`] against a card source, a scheduler, and a presenter.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use tracing::debug;

use crate::error::RoundError;
use crate::options::RoundOptions;
use crate::round::{Effect, Reply, Request, Round, Snapshot, Transition};
use crate::schedule::Scheduler;
use crate::source::CardSource;

/// Receives a snapshot after every transition.
pub trait Presenter {
    /// Shows the snapshot.
    fn present(&mut self, snapshot: &Snapshot);
}

/// Discards every snapshot.
impl Presenter for () {
    fn present(&mut self, _snapshot: &Snapshot) {}
}

/// Records every snapshot.
impl Presenter for Vec<Snapshot> {
    fn present(&mut self, snapshot: &Snapshot) {
        self.push(snapshot.clone());
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn present(&mut self, snapshot: &Snapshot) {
        (**self).present(snapshot);
    }
}

/// A round wired to its collaborators.
///
/// Each action runs until the round needs the player again: requests are
/// sent to the source one at a time, and dealer ticks are delivered as the
/// scheduler releases them.
///
/// # Example
///
/// ```
/// use bjround::{ImmediateScheduler, RoundOptions, RoundState, ShuffledDecks, Snapshot, Table};
///
/// let mut table = Table::new(
///     RoundOptions::default(),
///     ShuffledDecks::new(7),
///     ImmediateScheduler::new(),
///     Vec::<Snapshot>::new(),
/// );
/// table.new_round().unwrap();
/// assert_eq!(table.round().state(), RoundState::PlayerTurn);
/// table.stand().unwrap();
/// assert!(table.round().state().is_terminal());
/// ```
pub struct Table<S, D, P> {
    round: Round,
    source: S,
    scheduler: D,
    presenter: P,
}

impl<S: CardSource, D: Scheduler, P: Presenter> Table<S, D, P> {
    /// Creates a table with an idle round.
    pub fn new(options: RoundOptions, source: S, scheduler: D, presenter: P) -> Self {
        Self {
            round: Round::new(options),
            source,
            scheduler,
            presenter,
        }
    }

    /// Returns the round.
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the card source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the scheduler.
    pub const fn scheduler_mut(&mut self) -> &mut D {
        &mut self.scheduler
    }

    /// Returns the presenter.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Starts a new round and deals.
    ///
    /// # Errors
    ///
    /// See [`Round::new_round`] and [`Round::complete`].
    pub fn new_round(&mut self) -> Result<(), RoundError> {
        let transition = self.round.new_round()?;
        self.run(transition)
    }

    /// Hits.
    ///
    /// # Errors
    ///
    /// See [`Round::hit`] and [`Round::complete`].
    pub fn hit(&mut self) -> Result<(), RoundError> {
        let transition = self.round.hit()?;
        self.run(transition)
    }

    /// Stands and lets the dealer play as far as the scheduler allows.
    ///
    /// # Errors
    ///
    /// See [`Round::stand`] and [`Round::complete`].
    pub fn stand(&mut self) -> Result<(), RoundError> {
        let transition = self.round.stand()?;
        self.run(transition)
    }

    /// Re-issues the request that last failed.
    ///
    /// # Errors
    ///
    /// See [`Round::retry`] and [`Round::complete`].
    pub fn retry(&mut self) -> Result<(), RoundError> {
        let transition = self.round.retry()?;
        self.run(transition)
    }

    /// Abandons the round and returns to idle.
    pub fn abandon(&mut self) {
        self.round.abandon();
        self.publish();
    }

    /// Delivers dealer ticks the scheduler has released since the last call.
    ///
    /// # Errors
    ///
    /// See [`Round::complete`].
    pub fn pump(&mut self) -> Result<(), RoundError> {
        self.run_effects(VecDeque::new())
    }

    fn run(&mut self, transition: Transition) -> Result<(), RoundError> {
        self.publish();
        self.run_effects(transition.effects.into())
    }

    fn run_effects(&mut self, mut queue: VecDeque<Effect>) -> Result<(), RoundError> {
        loop {
            let transition = match queue.pop_front() {
                Some(Effect::Request {
                    generation,
                    request,
                }) => {
                    let reply = self.call(&request);
                    let result = self.round.complete(generation, reply);
                    if !matches!(&result, Ok(transition) if transition.stale) {
                        self.publish();
                    }
                    result?
                }
                Some(Effect::ScheduleDealerDraw { tick, delay }) => {
                    self.scheduler.schedule(tick, delay);
                    continue;
                }
                None => match self.scheduler.next_due() {
                    Some(tick) => {
                        let transition = self.round.tick(tick);
                        if !transition.stale {
                            self.publish();
                        }
                        transition
                    }
                    None => return Ok(()),
                },
            };

            if transition.stale {
                debug!(state = ?transition.state, "stale input ignored");
            }
            queue.extend(transition.effects);
        }
    }

    fn call(&self, request: &Request) -> Reply {
        let result = match request {
            Request::NewDeck => self.source.new_deck().map(Reply::Deck),
            Request::Reshuffle(deck) => self.source.reshuffle(deck).map(|()| Reply::Reshuffled),
            Request::Draw { deck, count } => self.source.draw(deck, *count).map(Reply::Cards),
        };
        result.unwrap_or_else(Reply::Failed)
    }

    fn publish(&mut self) {
        let snapshot = self.round.snapshot();
        self.presenter.present(&snapshot);
    }
}
