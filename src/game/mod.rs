//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ClearError, ReshuffleError, ResetError};
use crate::hand::{Hand, HandScore};
use crate::ledger::{ChipLedger, MemoryLedger};
use crate::options::GameOptions;
use crate::result::{RoundResult, Settlement};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{DEALER_STANDS_AT, dealer_draws, settle};
pub use state::{Chip, GamePhase};

/// A single-player blackjack table.
///
/// The game owns the deck, both hands, the bet, and the phase. The chip
/// balance is cached here and written through to the [`ChipLedger`] after
/// every change.
pub struct Game<L: ChipLedger = MemoryLedger> {
    /// Game options.
    pub options: GameOptions,
    /// Cards left to deal.
    deck: Deck,
    /// Current phase.
    phase: GamePhase,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: Hand,
    /// Chips staked on the current round.
    bet: usize,
    /// Cached chip balance.
    balance: usize,
    /// Outcome of the last resolved round.
    result: RoundResult,
    /// Payout details of the last resolved round.
    settlement: Option<Settlement>,
    /// Balance storage.
    ledger: L,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl<L: ChipLedger> Game<L> {
    /// Creates a new game with the given seed.
    ///
    /// The balance is loaded from `ledger`. When the ledger is empty or
    /// unreadable the balance starts at [`GameOptions::starting_chips`] and
    /// that value is stored immediately.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameOptions, GamePhase, MemoryLedger};
    ///
    /// let game = Game::new(GameOptions::default(), MemoryLedger::new(), 42);
    /// assert_eq!(game.balance(), 500);
    /// assert_eq!(game.phase(), GamePhase::Betting);
    /// ```
    pub fn new(options: GameOptions, mut ledger: L, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::build(true, options.shuffle, &mut rng);

        let stored = match ledger.load() {
            Ok(stored) => stored,
            Err(err) => {
                warn!(%err, "stored chip balance unreadable");
                None
            }
        };

        let mut game = Self {
            balance: stored.unwrap_or(options.starting_chips),
            options,
            deck,
            phase: GamePhase::Betting,
            player: Hand::new(),
            dealer: Hand::new(),
            bet: 0,
            result: RoundResult::None,
            settlement: None,
            ledger,
            rng,
        };

        if stored.is_none() {
            debug!(balance = game.balance, "seeding chip balance");
            game.persist();
        }

        game
    }

    /// Writes the cached balance through to the ledger.
    fn persist(&mut self) {
        if let Err(err) = self.ledger.save(self.balance) {
            warn!(%err, balance = self.balance, "failed to store chip balance");
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        debug!(from = self.phase.as_str(), to = phase.as_str(), "phase change");
        self.phase = phase;
    }

    fn fresh_deck(&mut self) -> Deck {
        Deck::build(true, self.options.shuffle, &mut self.rng)
    }

    /// Rebuilds and shuffles the deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reshuffle(&mut self) -> Result<(), ReshuffleError> {
        if self.phase != GamePhase::Betting {
            return Err(ReshuffleError::InvalidState);
        }
        self.deck = self.fresh_deck();
        Ok(())
    }

    /// Replaces the deck with `deck`, which will be dealt front to back.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn replace_deck(&mut self, deck: Deck) -> Result<(), ReshuffleError> {
        if self.phase != GamePhase::Betting {
            return Err(ReshuffleError::InvalidState);
        }
        self.deck = deck;
        Ok(())
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the current phase.
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current bet.
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the chip balance.
    pub const fn balance(&self) -> usize {
        self.balance
    }

    /// Returns the outcome of the current round, [`RoundResult::None`] until
    /// it is resolved.
    pub const fn round_result(&self) -> RoundResult {
        self.result
    }

    /// Returns the payout details of the resolved round.
    pub const fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hole card included.
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the player's score.
    pub fn player_score(&self) -> HandScore {
        self.player.score()
    }

    /// Returns the dealer's score, hole card included.
    pub fn dealer_score(&self) -> HandScore {
        self.dealer.score()
    }

    /// Returns whether the dealer's second card is face down.
    pub fn is_hole_hidden(&self) -> bool {
        self.phase == GamePhase::PlayerTurn
    }

    /// Returns the dealer's cards as the player sees them; the hole card is
    /// `None` while hidden.
    pub fn visible_dealer_cards(&self) -> Vec<Option<Card>> {
        let hidden = self.is_hole_hidden();
        self.dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!hidden || index != 1).then_some(*card))
            .collect()
    }

    /// Returns the dealer's score, or `None` while the hole card is hidden.
    pub fn visible_dealer_score(&self) -> Option<HandScore> {
        (!self.is_hole_hidden()).then(|| self.dealer.score())
    }

    /// Returns the ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Consumes the game and returns the ledger.
    pub fn into_ledger(self) -> L {
        self.ledger
    }

    /// Returns whether a chip reset is on offer.
    pub const fn can_reset_chips(&self) -> bool {
        self.balance < self.options.chip_floor
    }

    /// Restores the balance to [`GameOptions::starting_chips`].
    ///
    /// # Errors
    ///
    /// Returns an error if the balance is not below the chip floor.
    pub fn reset_chips(&mut self) -> Result<(), ResetError> {
        if !self.can_reset_chips() {
            return Err(ResetError::AboveFloor);
        }

        debug!(
            from = self.balance,
            to = self.options.starting_chips,
            "resetting chips"
        );
        self.balance = self.options.starting_chips;
        self.persist();

        Ok(())
    }

    /// Clears the finished hand and returns to betting with a freshly
    /// shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved.
    pub fn clear_hand(&mut self) -> Result<(), ClearError> {
        if self.phase != GamePhase::HandOver {
            return Err(ClearError::InvalidState);
        }

        self.player.clear();
        self.dealer.clear();
        self.deck = self.fresh_deck();
        self.result = RoundResult::None;
        self.settlement = None;
        self.set_phase(GamePhase::Betting);

        Ok(())
    }
}
