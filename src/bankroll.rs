//! Chip total and pending bet for the table's single seat.

use crate::error::BetError;

/// The seat's chips and the bet currently riding, if any.
///
/// `current_bet` is `None` outside the betting window; the engine's
/// transition handlers are the only mutators during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bankroll {
    total: usize,
    current_bet: Option<usize>,
}

impl Bankroll {
    /// Creates an empty bankroll.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            current_bet: None,
        }
    }

    /// Chips not currently riding on a bet.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// The pending bet, or `None` when betting is not open.
    #[must_use]
    pub const fn current_bet(&self) -> Option<usize> {
        self.current_bet
    }

    /// Adds bought-in chips to the total.
    pub const fn deposit(&mut self, chips: usize) {
        self.total += chips;
    }

    /// Moves `amount` chips from the total onto the pending bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] without touching anything if
    /// the increment would overdraw the total.
    pub const fn place(&mut self, amount: usize) -> Result<(), BetError> {
        if amount > self.total {
            return Err(BetError::InsufficientFunds);
        }

        self.total -= amount;
        self.current_bet = Some(match self.current_bet {
            Some(bet) => bet + amount,
            None => amount,
        });
        Ok(())
    }

    /// Refunds the whole pending bet into the total and clears it.
    ///
    /// Returns the refunded amount (0 if no bet was pending).
    pub const fn refund(&mut self) -> usize {
        let bet = match self.current_bet.take() {
            Some(bet) => bet,
            None => 0,
        };
        self.total += bet;
        bet
    }

    /// Settles the round: returns the stake to the total, applies the signed
    /// payout, and clears the bet.
    ///
    /// `net` is never below `-bet`, so the total cannot underflow; a push
    /// (`net == 0`) restores the pre-bet total exactly.
    pub fn settle(&mut self, net: isize) {
        let bet = self.current_bet.take().unwrap_or(0);
        self.total = (self.total + bet).saturating_add_signed(net);
    }
}
