use alloc::format;
use alloc::string::String;

use crate::error::StepError;
use crate::hand::Hand;
use crate::notify::NoticeKind;
use crate::payout::{payout, round_signed};
use crate::result::{Outcome, RoundResult};

use super::{RoundState, Seat, Step, Table};

/// Stand on hard 17: draw while under 17 and neither side has busted.
///
/// The dealer never draws into a decided round, so a player bust goes
/// straight to settlement.
fn dealer_should_draw(player: &Hand, dealer: &Hand) -> bool {
    !player.is_bust() && !dealer.is_bust() && dealer.value() < 17
}

impl Table {
    /// One dealer draw, or the transition into settlement.
    pub(super) fn step_dealer_draw(&self) -> Result<(), StepError> {
        let player = self.player_hand.lock().clone();
        let dealer = self.dealer_hand.lock().clone();

        if dealer_should_draw(&player, &dealer) {
            let Some(card) = self.draw() else {
                self.abort_exhausted();
                return Err(StepError::ShoeExhausted);
            };

            self.dealer_hand.lock().add([card]);
            self.schedule(Step::DealerDraw, self.options.dealer_pace_ms);
            return Ok(());
        }

        *self.state.lock() = RoundState::Settling;
        self.schedule(Step::Settle, 0);
        Ok(())
    }

    /// Computes the payout, settles the bankroll, and surfaces the outcome.
    pub(super) fn step_settle(&self) {
        let player = self.player_hand.lock().clone();
        let dealer = self.dealer_hand.lock().clone();
        let bet = self.bankroll.lock().current_bet().unwrap_or(0);

        let raw = payout(bet, &player, &dealer, self.options.blackjack_pays);
        let net = round_signed(raw, self.options.rounding_blackjack);
        self.bankroll.lock().settle(net);

        let outcome = match net {
            n if n > 0 => Outcome::Win,
            n if n < 0 => Outcome::Lose,
            _ => Outcome::Push,
        };

        self.set_last_result(RoundResult {
            outcome,
            net,
            bet,
            player_value: player.value(),
            dealer_value: dealer.value(),
            player_blackjack: player.is_blackjack(),
            dealer_blackjack: dealer.is_blackjack(),
        });

        let message = match outcome {
            Outcome::Win => format!("won +{net}"),
            Outcome::Lose => format!("lost {net}"),
            Outcome::Push => String::from("push"),
        };
        self.notify(NoticeKind::Info, &message);

        self.schedule(Step::FinishRound, self.options.settle_display_ms);
    }

    /// Discards both hands and reopens betting.
    pub(super) fn step_finish_round(&self) {
        self.discard_hands();
        self.set_active_seat(Seat::Player);
        *self.state.lock() = RoundState::Betting;
    }

    /// Aborts the round after a short draw.
    ///
    /// The pending bet is refunded, both hands are discarded, the chain is
    /// dropped, and the table parks in `Idle` until an external reshuffle
    /// and a fresh `start_round`.
    pub(super) fn abort_exhausted(&self) {
        *self.pending.lock() = None;
        self.busy.clear();

        self.bankroll.lock().refund();
        self.discard_hands();
        self.set_active_seat(Seat::Player);
        *self.state.lock() = RoundState::Idle;

        self.notify(NoticeKind::Error, "shoe exhausted, reshuffle required");
    }
}
