//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a sans-I/O [`Round`] state machine that deals, scores,
//! plays the house, and decides the outcome, and a [`Table`] that drives a
//! round against an injectable [`CardSource`], [`Scheduler`], and
//! [`Presenter`].
//!
//! # Example
//!
//! ```no_run
//! use bjround::{ImmediateScheduler, RoundOptions, ShuffledDecks, Table};
//!
//! let mut table = Table::new(
//!     RoundOptions::default(),
//!     ShuffledDecks::new(42),
//!     ImmediateScheduler::new(),
//!     (),
//! );
//! table.new_round().unwrap();
//! table.hit().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod schedule;
pub mod score;
pub mod source;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, ImageRef, Rank, Suit, WireCard};
pub use error::{CardError, RoundError, SourceError};
pub use hand::{CardView, DealerHand, Hand};
pub use options::RoundOptions;
pub use result::{Outcome, RoundResult};
pub use round::{Effect, INITIAL_DEAL, Reply, Request, Round, RoundState, Snapshot, Transition};
#[cfg(feature = "std")]
pub use schedule::PacedScheduler;
pub use schedule::{DealerTick, ImmediateScheduler, ManualScheduler, Scheduler};
pub use score::{BLACKJACK, score};
pub use source::{CardSource, DeckHandle, ShuffledDecks};
pub use table::{Presenter, Table};
