use crate::error::{BetError, DealError};

use super::{RoundState, Seat, Step, Table};

impl Table {
    /// Adds chips to the pending bet.
    ///
    /// The increment is atomic: it either moves the full amount from the
    /// total onto the bet, or rejects without touching either.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy, betting is not open, the
    /// amount is zero, or the increment would overdraw the total.
    pub fn add_bet(&self, amount: usize) -> Result<(), BetError> {
        if self.is_busy() {
            return Err(BetError::Busy);
        }
        if *self.state.lock() != RoundState::Betting {
            return Err(BetError::InvalidState);
        }
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        self.bankroll.lock().place(amount)
    }

    /// Refunds the whole pending bet into the total.
    ///
    /// Returns the refunded amount; one call undoes any number of
    /// preceding [`Table::add_bet`] increments.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy or betting is not open.
    pub fn clear_bet(&self) -> Result<usize, BetError> {
        if self.is_busy() {
            return Err(BetError::Busy);
        }
        if *self.state.lock() != RoundState::Betting {
            return Err(BetError::InvalidState);
        }

        Ok(self.bankroll.lock().refund())
    }

    /// Confirms the pending bet and starts the dealing chain.
    ///
    /// No cards move synchronously: dealing proceeds one card per
    /// [`Table::advance`], alternating player and dealer until both hands
    /// hold their two starting cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy, betting is not open, or no
    /// positive bet has been placed.
    pub fn deal(&self) -> Result<(), DealError> {
        if self.is_busy() {
            return Err(DealError::Busy);
        }

        let mut state = self.state.lock();
        if *state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }
        if !matches!(self.bankroll.lock().current_bet(), Some(bet) if bet > 0) {
            return Err(DealError::NoBet);
        }

        *state = RoundState::Dealing;
        drop(state);

        self.set_active_seat(Seat::Player);
        self.schedule(Step::DealCard, 0);
        Ok(())
    }
}
