//! The dealing deck.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, Pip, Suit};
use crate::shuffle::{ShuffleMode, shuffle};

/// An ordered deck of cards, dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Builds a full 52-card deck in suit-major order, unshuffled.
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for pip in Pip::ALL {
                cards.push_back(Card::new(suit, pip));
            }
        }
        Self { cards }
    }

    /// Builds a full deck, shuffling it with `mode` when `shuffle` is set.
    #[must_use]
    pub fn build<R: Rng + ?Sized>(shuffle: bool, mode: ShuffleMode, rng: &mut R) -> Self {
        let mut deck = Self::ordered();
        if shuffle {
            deck.shuffle(mode, rng);
        }
        deck
    }

    /// Creates a deck that deals `cards` in the given order.
    ///
    /// Useful for stacking a round in tests or replays.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, mode: ShuffleMode, rng: &mut R) {
        shuffle(self.cards.make_contiguous(), mode, rng);
    }

    /// Removes and returns the front card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates the remaining cards front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}
