//! Card types and the raw card format reported by a card source.

use alloc::string::{String, ToString};

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Parses a suit as reported by a card source (`"HEARTS"`, `"SPADES"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedSuit`] for anything else.
    pub fn parse(value: &str) -> Result<Self, CardError> {
        match value {
            "HEARTS" => Ok(Self::Hearts),
            "DIAMONDS" => Ok(Self::Diamonds),
            "CLUBS" => Ok(Self::Clubs),
            "SPADES" => Ok(Self::Spades),
            other => Err(CardError::MalformedSuit(other.to_string())),
        }
    }

    /// Returns the wire name of the suit.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hearts => "HEARTS",
            Self::Diamonds => "DIAMONDS",
            Self::Clubs => "CLUBS",
            Self::Spades => "SPADES",
        }
    }

    const fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    /// Ace, worth 11 or 1.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Parses a rank as reported by a card source.
    ///
    /// Only `"ACE"`, `"JACK"`, `"QUEEN"`, `"KING"` and the exact numeric
    /// strings `"2"` through `"10"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedRank`] for any other value.
    pub fn parse(value: &str) -> Result<Self, CardError> {
        match value {
            "ACE" => Ok(Self::Ace),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "4" => Ok(Self::Four),
            "5" => Ok(Self::Five),
            "6" => Ok(Self::Six),
            "7" => Ok(Self::Seven),
            "8" => Ok(Self::Eight),
            "9" => Ok(Self::Nine),
            "10" => Ok(Self::Ten),
            "JACK" => Ok(Self::Jack),
            "QUEEN" => Ok(Self::Queen),
            "KING" => Ok(Self::King),
            other => Err(CardError::MalformedRank(other.to_string())),
        }
    }

    /// Returns the wire name of the rank.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ace => "ACE",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
        }
    }

    const fn code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Ten => "0",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            other => other.as_str(),
        }
    }
}

/// Opaque display handle for a card face. Ignored by game logic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef(pub String);

/// A playing card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
    /// Display handle supplied by the card source.
    pub image: ImageRef,
}

impl Card {
    /// Creates a card without an image.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            image: ImageRef(String::new()),
        }
    }

    /// Converts the card back into the raw form a card source reports.
    #[must_use]
    pub fn to_wire(&self) -> WireCard {
        let mut code = String::from(self.rank.code());
        code.push(self.suit.code());
        WireCard {
            code,
            value: self.rank.as_str().to_string(),
            suit: self.suit.as_str().to_string(),
            image: self.image.0.clone(),
        }
    }
}

/// A card exactly as the card source reported it, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireCard {
    /// Short code such as `"AS"` or `"0H"`.
    pub code: String,
    /// Rank string (`"ACE"`, `"2"`..`"10"`, `"JACK"`, `"QUEEN"`, `"KING"`).
    pub value: String,
    /// Suit string (`"HEARTS"`, `"DIAMONDS"`, `"CLUBS"`, `"SPADES"`).
    pub suit: String,
    /// Image URL or other display handle.
    pub image: String,
}

impl TryFrom<&WireCard> for Card {
    type Error = CardError;

    fn try_from(wire: &WireCard) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::parse(&wire.value)?,
            suit: Suit::parse(&wire.suit)?,
            image: ImageRef(wire.image.clone()),
        })
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
