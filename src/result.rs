//! Settled-round summary types.

/// How the round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    Win,
    /// Player loses (player busts or dealer has the higher value).
    Lose,
    /// Push (tie, bet returned).
    Push,
}

/// Snapshot of a settled round, kept for the render observer until the next
/// round settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundResult {
    /// The outcome for the player.
    pub outcome: Outcome,
    /// Signed chips won or lost, after rounding.
    pub net: isize,
    /// The bet that was riding.
    pub bet: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player held a blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer held a blackjack.
    pub dealer_blackjack: bool,
}
