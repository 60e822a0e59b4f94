//! Round result types.

/// Outcome of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundResult {
    /// Player wins (blackjack, higher value, or dealer bust).
    Win,
    /// Player loses (bust or lower value).
    Lose,
    /// Push (tie); the bet is returned.
    Push,
    /// No round has been resolved yet.
    #[default]
    None,
}

impl RoundResult {
    /// Returns the display label, empty for [`RoundResult::None`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Push => "Push",
            Self::None => "",
        }
    }
}

/// Payout details recorded when a round is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome of the round.
    pub result: RoundResult,
    /// The bet that was staked at deal time.
    pub bet: usize,
    /// Chips credited back to the balance (stake included).
    pub payout: usize,
    /// The player's effective hand value.
    pub player_value: u8,
    /// The dealer's effective hand value.
    pub dealer_value: u8,
    /// Whether the player held a blackjack.
    pub player_blackjack: bool,
}

impl Settlement {
    /// Net chips won or lost on the round.
    #[expect(clippy::cast_possible_wrap, reason = "chip values fit in isize")]
    #[must_use]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}
