//! Multi-deck shoe: the pool of not-yet-dealt cards.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// An ordered pool of cards across one or more decks.
///
/// Insertion order is draw order: [`Shoe::remove`] always takes from the
/// tail, so after a shuffle the tail is simply the top of the shoe.
#[derive(Debug, Clone, Default)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Creates an empty shoe.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Replaces the shoe's contents with `decks` full standard 52-card sets,
    /// each tagged with its own deck index (`0..decks`).
    pub fn add_decks(&mut self, decks: u8) {
        self.cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for deck in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    self.cards.push(Card::new(suit, rank, deck));
                }
            }
        }
    }

    /// Uniformly permutes the remaining cards.
    ///
    /// Callable at any time; the engine only invokes it between rounds.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Appends cards to the shoe (used to merge discards back in).
    pub fn add<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Removes and returns up to `amount` cards from the draw end.
    ///
    /// A result shorter than `amount` means the shoe ran out; callers must
    /// check the returned length before treating a deal as valid.
    pub fn remove(&mut self, amount: usize) -> Vec<Card> {
        let take = amount.min(self.cards.len());
        self.cards.split_off(self.cards.len() - take)
    }

    /// Returns the cards still in the shoe, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<Vec<Card>> for Shoe {
    /// Builds a shoe with a fixed draw order; the last card is drawn first.
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
