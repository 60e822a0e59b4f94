use crate::card::Card;
use crate::error::ActionError;
use crate::ledger::ChipLedger;
use crate::result::Settlement;

use super::{Game, GamePhase};

impl<L: ChipLedger> Game<L> {
    /// Returns whether the player may hit.
    ///
    /// Hitting is withheld once either of the player's totals reads 21.
    pub fn can_hit(&self) -> bool {
        self.phase == GamePhase::PlayerTurn && !self.player.score().is_twenty_one()
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round without a dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand already reads
    /// 21, or the deck is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase != GamePhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if !self.can_hit() {
            return Err(ActionError::CannotHit);
        }

        let card = self.deck.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.finish_round();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round is resolved. If the
    /// deck runs out mid-draw the dealer stands on the cards already held.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<Settlement, ActionError> {
        if self.phase != GamePhase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.set_phase(GamePhase::DealerTurn);
        self.dealer_play();

        Ok(self.finish_round())
    }
}
