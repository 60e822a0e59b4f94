//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs the round flow: betting,
//! the opening deal, the player's turn, dealer play, and payout. The chip
//! balance is persisted through a [`ChipLedger`].
//!
//! # Example
//!
//! ```
//! use bjtable::{Chip, Game, GameOptions, GamePhase, MemoryLedger};
//!
//! let mut game = Game::new(GameOptions::default(), MemoryLedger::new(), 42);
//! game.place_bet(Chip::TwentyFive).unwrap();
//! game.deal().unwrap();
//! if game.phase() == GamePhase::PlayerTurn {
//!     game.stand().unwrap();
//! }
//! assert_eq!(game.phase(), GamePhase::HandOver);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Pip, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, ClearError, DealError, LedgerError, ResetError, ReshuffleError,
};
pub use game::{Chip, Game, GamePhase};
pub use hand::{Hand, HandScore, effective_value, is_blackjack, is_bust, score_hand};
#[cfg(feature = "std")]
pub use ledger::FileLedger;
pub use ledger::{ChipLedger, MemoryLedger};
pub use options::{GameOptions, RoundingMode};
pub use result::{RoundResult, Settlement};
pub use shuffle::ShuffleMode;
