//! Game phase types.

/// Phase of the round. Exactly one is active at a time.
///
/// Rounds cycle `Betting -> PlayerTurn -> DealerTurn -> HandOver -> Betting`.
/// A natural on the deal or a player bust skips straight to `HandOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Accepting bets for the next round.
    #[default]
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is resolved and awaiting clear.
    HandOver,
}

impl GamePhase {
    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Betting => "Betting",
            Self::PlayerTurn => "PlayerTurn",
            Self::DealerTurn => "DealerTurn",
            Self::HandOver => "HandOver",
        }
    }
}

/// A chip denomination the player can add to the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    /// Five chips.
    Five,
    /// Twenty-five chips.
    TwentyFive,
    /// Fifty chips.
    Fifty,
}

impl Chip {
    /// All denominations, smallest first.
    pub const ALL: [Self; 3] = [Self::Five, Self::TwentyFive, Self::Fifty];

    /// Returns the chip's value.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::Five => 5,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
        }
    }

    /// Maps a raw amount to a denomination.
    #[must_use]
    pub const fn from_amount(amount: usize) -> Option<Self> {
        match amount {
            5 => Some(Self::Five),
            25 => Some(Self::TwentyFive),
            50 => Some(Self::Fifty),
            _ => None,
        }
    }
}
