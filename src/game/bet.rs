use tracing::debug;

use crate::error::{BetError, DealError};
use crate::ledger::ChipLedger;

use super::{Chip, Game, GamePhase};

/// Seats dealt on the opening deal: the player and the dealer.
const SEATS: usize = 2;

/// Cards consumed by the opening deal.
const OPENING_CARDS: usize = SEATS * 2;

impl<L: ChipLedger> Game<L> {
    /// Returns whether `chip` can be added to the current bet.
    pub fn can_raise(&self, chip: Chip) -> bool {
        self.phase == GamePhase::Betting && self.balance >= self.bet + chip.value()
    }

    /// Adds `chip` to the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase or the raised
    /// bet would exceed the balance.
    pub fn place_bet(&mut self, chip: Chip) -> Result<(), BetError> {
        if self.phase != GamePhase::Betting {
            return Err(BetError::InvalidState);
        }

        if !self.can_raise(chip) {
            return Err(BetError::InsufficientFunds);
        }

        self.bet += chip.value();
        debug!(bet = self.bet, "bet raised");

        Ok(())
    }

    /// Adds a raw chip amount to the bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::UnknownChip`] if `amount` is not a table
    /// denomination, otherwise as [`Game::place_bet`].
    pub fn place_bet_amount(&mut self, amount: usize) -> Result<(), BetError> {
        let chip = Chip::from_amount(amount).ok_or(BetError::UnknownChip)?;
        self.place_bet(chip)
    }

    /// Sets the bet back to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase.
    pub fn clear_bet(&mut self) -> Result<(), BetError> {
        if self.phase != GamePhase::Betting {
            return Err(BetError::InvalidState);
        }

        self.bet = 0;
        Ok(())
    }

    /// Returns whether the opening deal is available.
    pub const fn can_deal(&self) -> bool {
        matches!(self.phase, GamePhase::Betting) && self.bet > 0
    }

    /// Stakes the bet and deals two cards each to the player and the dealer,
    /// alternating player first.
    ///
    /// If either hand is a blackjack the round resolves immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the betting phase, no bet has
    /// been placed, or the deck cannot cover the deal.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.phase != GamePhase::Betting {
            return Err(DealError::InvalidState);
        }

        if self.bet == 0 {
            return Err(DealError::NoBet);
        }

        if self.deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.balance -= self.bet;
        self.persist();

        self.player.clear();
        self.dealer.clear();

        for _ in 0..SEATS {
            if let Some(card) = self.deck.draw() {
                self.player.add_card(card);
            }
            if let Some(card) = self.deck.draw() {
                self.dealer.add_card(card);
            }
        }

        debug!(
            bet = self.bet,
            balance = self.balance,
            player = self.player.score().score,
            "opening hand dealt"
        );

        if self.player.is_blackjack() || self.dealer.is_blackjack() {
            self.finish_round();
        } else {
            self.set_phase(GamePhase::PlayerTurn);
        }

        Ok(())
    }
}
