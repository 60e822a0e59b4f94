//! Hand scoring and the player/dealer hand container.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Points gained by counting one ace as 11 instead of 1.
const SOFT_BONUS: u8 = 10;

/// A hand's primary and alternate totals.
///
/// `score` counts every ace as 1. `secondary_score` is `score + 10` when the
/// hand holds an ace and `score < 12`, and 0 otherwise; 0 means "no soft
/// total", never a real alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HandScore {
    /// Total with every ace counted as 1.
    pub score: u8,
    /// Total with one ace counted as 11, or 0 if not applicable.
    pub secondary_score: u8,
}

impl HandScore {
    /// Returns the soft total if one applies.
    #[must_use]
    pub const fn soft(&self) -> Option<u8> {
        if self.secondary_score == 0 {
            None
        } else {
            Some(self.secondary_score)
        }
    }

    /// Returns the best usable total. See [`effective_value`].
    #[must_use]
    pub const fn effective(&self) -> u8 {
        effective_value(*self)
    }

    /// Returns whether either total reads exactly 21.
    #[must_use]
    pub const fn is_twenty_one(&self) -> bool {
        self.score == BLACKJACK || self.secondary_score == BLACKJACK
    }
}

/// Scores a sequence of cards.
///
/// At most one ace is upgraded to 11, and only while the hard total is
/// below 12. An empty hand scores `{0, 0}`.
#[must_use]
pub fn score_hand(cards: &[Card]) -> HandScore {
    let mut score: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        score = score.saturating_add(card.pip.points());
    }

    let secondary_score = if has_ace && score < 12 {
        score + SOFT_BONUS
    } else {
        0
    };

    HandScore {
        score,
        secondary_score,
    }
}

/// Returns whether `cards` is a natural: exactly two cards totalling 21 by
/// either score.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && score_hand(cards).is_twenty_one()
}

/// Returns whether the hard total exceeds 21.
#[must_use]
pub const fn is_bust(score: HandScore) -> bool {
    score.score > BLACKJACK
}

/// Returns the soft total when present and not over 21, else the hard total.
#[must_use]
pub const fn effective_value(score: HandScore) -> u8 {
    if score.secondary_score != 0 && score.secondary_score <= BLACKJACK {
        score.secondary_score
    } else {
        score.score
    }
}

/// A hand of cards held by the player or the dealer.
///
/// The score is always derived from the cards, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the hand.
    #[must_use]
    pub fn score(&self) -> HandScore {
        score_hand(&self.cards)
    }

    /// Returns the best usable total.
    #[must_use]
    pub fn value(&self) -> u8 {
        effective_value(self.score())
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(self.score())
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
