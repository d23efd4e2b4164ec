//! The scheduled step chain behind staggered dealing and dealer play.

use crate::error::StepError;

use super::{RoundState, Seat, Table};

/// A discrete, independently observable unit of engine-driven work.
///
/// Each executed step schedules at most one successor, so the chain is
/// advanced one card (or one settlement phase) at a time and the observer
/// sees a consistent snapshot between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Deal one card to the active seat.
    DealCard,
    /// Dealer draws one card, or stands and settlement begins.
    DealerDraw,
    /// Compute and apply the payout, surface the outcome.
    Settle,
    /// Discard both hands and reopen betting.
    FinishRound,
}

/// A step waiting to run, plus the pacing delay the driver should let pass
/// before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingStep {
    /// The step to run next.
    pub step: Step,
    /// Wall-clock delay the driver should wait before [`Table::advance`].
    /// Purely advisory: tests advance immediately.
    pub delay_ms: u64,
}

impl Table {
    /// Returns the scheduled step, if any.
    pub fn pending_step(&self) -> Option<PendingStep> {
        *self.pending.lock()
    }

    /// Returns the advisory delay before the next [`Table::advance`] call.
    pub fn next_delay(&self) -> Option<u64> {
        self.pending.lock().as_ref().map(|pending| pending.delay_ms)
    }

    /// Runs the pending step.
    ///
    /// The driver owns the clock: it waits [`Table::next_delay`] (or not,
    /// under test) and calls this until the table is no longer busy. A chain
    /// cannot be cancelled; it runs to completion.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NothingPending`] when no step is scheduled, or
    /// [`StepError::ShoeExhausted`] when a draw came up short and the round
    /// was aborted.
    pub fn advance(&self) -> Result<Step, StepError> {
        let Some(pending) = self.pending.lock().take() else {
            return Err(StepError::NothingPending);
        };

        let result = match pending.step {
            Step::DealCard => self.step_deal_card(),
            Step::DealerDraw => self.step_dealer_draw(),
            Step::Settle => {
                self.step_settle();
                Ok(())
            }
            Step::FinishRound => {
                self.step_finish_round();
                Ok(())
            }
        };

        if self.pending.lock().is_none() {
            self.busy.clear();
        }

        result.map(|()| pending.step)
    }

    /// Schedules the next step and raises the busy flag.
    pub(super) fn schedule(&self, step: Step, delay_ms: u64) {
        *self.pending.lock() = Some(PendingStep { step, delay_ms });
        self.busy.raise();
    }

    /// Enters the dealer turn and schedules the first draw.
    pub(super) fn begin_dealer_turn(&self) {
        *self.state.lock() = RoundState::DealerTurn;
        self.set_active_seat(Seat::Dealer);
        self.schedule(Step::DealerDraw, self.options.dealer_pace_ms);
    }

    /// Deals one card to the active seat and advances the cycle.
    fn step_deal_card(&self) -> Result<(), StepError> {
        let Some(card) = self.draw() else {
            self.abort_exhausted();
            return Err(StepError::ShoeExhausted);
        };

        let seat = self.active_seat();
        match seat {
            Seat::Player => self.player_hand.lock().add([card]),
            Seat::Dealer => self.dealer_hand.lock().add([card]),
        }
        self.set_active_seat(seat.next());

        let both_dealt =
            self.player_hand.lock().is_dealt() && self.dealer_hand.lock().is_dealt();

        if !both_dealt {
            self.schedule(Step::DealCard, self.options.deal_pace_ms);
            return Ok(());
        }

        // A dealt blackjack skips the player turn entirely.
        if self.player_hand.lock().is_blackjack() {
            self.begin_dealer_turn();
        } else {
            self.set_active_seat(Seat::Player);
            *self.state.lock() = RoundState::PlayerTurn;
        }
        Ok(())
    }
}
