//! Game configuration options.

use crate::shuffle::ShuffleMode;

/// Rounding mode for the fractional half of a 3:2 blackjack bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest, halves away from zero.
    Nearest,
}

impl RoundingMode {
    /// Returns `numerator / 2` rounded with this mode.
    #[must_use]
    pub const fn halve(self, numerator: usize) -> usize {
        match self {
            Self::Down => numerator / 2,
            Self::Up | Self::Nearest => numerator.div_ceil(2),
        }
    }
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::{GameOptions, ShuffleMode};
///
/// let options = GameOptions::default()
///     .with_starting_chips(1_000)
///     .with_shuffle(ShuffleMode::Uniform);
/// assert_eq!(options.starting_chips, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Balance used on first run and when chips are reset.
    pub starting_chips: usize,
    /// Chip resets are offered only while the balance is below this.
    pub chip_floor: usize,
    /// Shuffle algorithm used when the deck is rebuilt.
    pub shuffle: ShuffleMode,
    /// Rounding mode for blackjack payouts on odd bets.
    pub rounding_blackjack: RoundingMode,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 500,
            chip_floor: 5,
            shuffle: ShuffleMode::Legacy,
            rounding_blackjack: RoundingMode::Down,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the balance below which a chip reset is offered.
    #[must_use]
    pub const fn with_chip_floor(mut self, floor: usize) -> Self {
        self.chip_floor = floor;
        self
    }

    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, ShuffleMode};
    ///
    /// let options = GameOptions::default().with_shuffle(ShuffleMode::Uniform);
    /// assert_eq!(options.shuffle, ShuffleMode::Uniform);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, mode: ShuffleMode) -> Self {
        self.shuffle = mode;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }
}
