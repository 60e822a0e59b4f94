use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::Card;
use crate::hand::{BLACKJACK, HandScore, effective_value, is_blackjack, score_hand};
use crate::ledger::ChipLedger;
use crate::options::RoundingMode;
use crate::result::{RoundResult, Settlement};

use super::{Game, GamePhase};

/// The dealer stops drawing once either total reaches this.
pub const DEALER_STANDS_AT: u8 = 17;

/// Returns whether the dealer must draw on `score`.
///
/// The dealer draws only while both the hard and the soft total are below
/// 17, so a soft 17 stands.
#[must_use]
pub const fn dealer_draws(score: HandScore) -> bool {
    score.score < DEALER_STANDS_AT && score.secondary_score < DEALER_STANDS_AT
}

/// Resolves a finished round.
///
/// Rules are applied in order:
/// 1. Equal effective values push and return the bet.
/// 2. A player blackjack pays the bet plus a 3:2 bonus.
/// 3. A player at 21 or under wins double the bet if the dealer busts or is
///    beaten, and loses otherwise.
/// 4. A busted player loses.
///
/// The payout includes the returned stake.
#[must_use]
pub fn settle(player: &[Card], dealer: &[Card], bet: usize, rounding: RoundingMode) -> Settlement {
    let player_value = effective_value(score_hand(player));
    let dealer_value = effective_value(score_hand(dealer));
    let player_blackjack = is_blackjack(player);

    let (result, payout) = if player_value == dealer_value {
        (RoundResult::Push, bet)
    } else if player_blackjack {
        (RoundResult::Win, bet + rounding.halve(bet * 3))
    } else if player_value <= BLACKJACK {
        if dealer_value > BLACKJACK || player_value > dealer_value {
            (RoundResult::Win, bet * 2)
        } else {
            (RoundResult::Lose, 0)
        }
    } else {
        (RoundResult::Lose, 0)
    };

    Settlement {
        result,
        bet,
        payout,
        player_value,
        dealer_value,
        player_blackjack,
    }
}

impl<L: ChipLedger> Game<L> {
    /// Dealer draws until [`dealer_draws`] says stop.
    ///
    /// An exhausted deck ends the draw early and the dealer stands on the
    /// current hand. Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Vec<Card> {
        let mut drawn_cards = Vec::new();

        while dealer_draws(self.dealer.score()) {
            let Some(card) = self.deck.draw() else {
                warn!(dealer = self.dealer.value(), "deck exhausted during dealer draw");
                break;
            };
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        debug!(
            drawn = drawn_cards.len(),
            dealer = self.dealer.value(),
            "dealer stands"
        );

        drawn_cards
    }

    /// Enters [`GamePhase::HandOver`], pays out, and zeroes the bet.
    pub(super) fn finish_round(&mut self) -> Settlement {
        self.set_phase(GamePhase::HandOver);

        let settlement = settle(
            self.player.cards(),
            self.dealer.cards(),
            self.bet,
            self.options.rounding_blackjack,
        );

        self.result = settlement.result;
        self.settlement = Some(settlement);
        self.bet = 0;

        if settlement.payout > 0 {
            self.balance += settlement.payout;
            self.persist();
        }

        debug!(
            result = settlement.result.label(),
            player = settlement.player_value,
            dealer = settlement.dealer_value,
            payout = settlement.payout,
            balance = self.balance,
            "round settled"
        );

        settlement
    }
}
