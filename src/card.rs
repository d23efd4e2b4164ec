//! Card types and deck constants.

use alloc::format;
use alloc::string::String;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits, in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// The suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl core::fmt::Display for Suit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// Equality includes the origin deck tag, so two physically identical cards
/// from different decks of a multi-deck shoe stay distinguishable. The tag
/// is a display/debug key, never a gameplay rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Index of the deck this card came from (0-based within the shoe).
    pub deck: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8, deck: u8) -> Self {
        Self { suit, rank, deck }
    }

    /// Short rank label: `"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`.
    #[must_use]
    pub const fn rank_label(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }

    /// Rank label joined with the suit symbol, e.g. `"A♠"`.
    #[must_use]
    pub fn name(&self) -> String {
        format!("{self}")
    }

    /// Unique key for this physical card within the shoe, e.g. `"A♠-0"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{self}-{}", self.deck)
    }
}

impl core::fmt::Display for Card {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
