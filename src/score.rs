//! Hand scoring.
//!
//! Aces count as 11 until the total would exceed 21, at which point they are
//! downgraded to 1 one at a time. The result is the highest total not above
//! 21, or the all-aces-low total when every assignment busts.

use crate::card::{Card, Rank};

/// The best possible hand total.
pub const BLACKJACK: u8 = 21;

/// Returns the provisional value of a rank (aces count 11).
#[must_use]
pub const fn card_value(rank: Rank) -> u8 {
    match rank {
        Rank::Ace => 11,
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
    }
}

/// Returns the hand total and whether an ace is still counted as 11.
///
/// Totals above `u8::MAX` are reported as `u8::MAX`.
#[must_use]
pub fn evaluate(cards: &[Card]) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.rank == Rank::Ace {
            aces += 1;
        }
        value += u32::from(card_value(card.rank));
    }

    while value > u32::from(BLACKJACK) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u32::from(BLACKJACK);
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Returns the best blackjack total of the cards. An empty hand scores 0.
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    evaluate(cards).0
}

/// Returns whether the cards total more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}
