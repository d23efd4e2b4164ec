//! Round state types.

/// Position in the per-round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round in progress; a new round must be started externally.
    Idle,
    /// Accepting bets for the next round.
    Betting,
    /// Dealing initial cards, one per step.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer draws out their hand, one card per step.
    DealerTurn,
    /// Payout applied; result on display before betting reopens.
    Settling,
}

/// The party whose hand currently receives cards.
///
/// The turn order is the fixed two-element cycle player → dealer → player;
/// no party is ever skipped mid-deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player's hand.
    Player,
    /// The dealer's hand.
    Dealer,
}

impl Seat {
    /// The next seat in the deal cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Player => Self::Dealer,
            Self::Dealer => Self::Player,
        }
    }
}
