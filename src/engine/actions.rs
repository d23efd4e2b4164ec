use crate::card::Card;
use crate::error::ActionError;
use crate::notify::NoticeKind;

use super::{RoundState, Table};

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.is_busy() {
            return Err(ActionError::Busy);
        }
        if *self.state.lock() != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// On bust or 21 the turn passes to the dealer automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy, it is not the player's turn,
    /// the hand cannot take another card, or the shoe ran out (aborting the
    /// round).
    pub fn hit(&self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        if !self.player_hand.lock().can_hit() {
            return Err(ActionError::NotAllowed);
        }

        let Some(card) = self.draw() else {
            self.abort_exhausted();
            return Err(ActionError::ShoeExhausted);
        };

        let mut hand = self.player_hand.lock();
        hand.add([card]);
        let turn_over = hand.is_bust() || hand.is_twenty_one();
        drop(hand);

        if turn_over {
            self.begin_dealer_turn();
        }

        Ok(card)
    }

    /// Player action: Stay (keep the current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy, it is not the player's turn,
    /// or the hand cannot stand.
    pub fn stay(&self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        if !self.player_hand.lock().can_stay() {
            return Err(ActionError::NotAllowed);
        }

        self.begin_dealer_turn();
        Ok(())
    }

    /// Player action: Double down.
    ///
    /// Not implemented yet; surfaced as a warning through the sink and
    /// rejected with state unchanged. Eligibility is still queryable via
    /// [`crate::Hand::can_double_down`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy or it is not the player's
    /// turn, otherwise [`ActionError::Unimplemented`].
    pub fn double_down(&self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.notify(NoticeKind::Warning, "double down not implemented yet");
        Err(ActionError::Unimplemented)
    }

    /// Player action: Split.
    ///
    /// Not implemented yet; surfaced as a warning through the sink and
    /// rejected with state unchanged. Eligibility is still queryable via
    /// [`crate::Hand::can_split`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy or it is not the player's
    /// turn, otherwise [`ActionError::Unimplemented`].
    pub fn split(&self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.notify(NoticeKind::Warning, "split not implemented yet");
        Err(ActionError::Unimplemented)
    }
}
