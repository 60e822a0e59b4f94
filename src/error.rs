//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while adjusting the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The raised bet would exceed the chip balance.
    #[error("insufficient chips")]
    InsufficientFunds,
    /// The amount is not one of the table's chip denominations.
    #[error("unrecognized chip amount")]
    UnknownChip,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The hand already reads 21.
    #[error("cannot hit on 21")]
    CannotHit,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when clearing a finished hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClearError {
    /// The round has not been resolved yet.
    #[error("the round has not been resolved yet")]
    InvalidState,
}

/// Errors that can occur when resetting the chip balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResetError {
    /// The balance is not below the chip floor.
    #[error("balance is not below the chip floor")]
    AboveFloor,
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Errors raised by a chip ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The stored balance is not an integer.
    #[error("stored chip balance is not an integer")]
    Corrupt,
    /// The backing storage could not be reached.
    #[error("chip storage is unavailable")]
    Unavailable,
    /// Reading or writing the backing file failed.
    #[cfg(feature = "std")]
    #[error("chip storage I/O failed: {0}")]
    Io(std::io::ErrorKind),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.kind())
    }
}
