//! Round engine and table state.

use alloc::boxed::Box;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::bankroll::Bankroll;
use crate::card::{Card, DECK_SIZE};
use crate::error::{ReshuffleError, StartError};
use crate::hand::Hand;
use crate::notify::{NoticeKind, NotifySink, NullSink};
use crate::options::TableOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;
use crate::sync::{BusyFlag, Mutex};

mod actions;
mod bet;
mod dealer;
pub mod state;
mod steps;

pub use state::{RoundState, Seat};
pub use steps::{PendingStep, Step};

/// A single-table blackjack round engine.
///
/// The table exclusively owns the shoe, the discard pool, both hands, and
/// the bankroll for the session. Dealing and dealer play run as a chain of
/// scheduled steps the caller advances with [`Table::advance`]; while a step
/// is pending the table is busy and player-initiated calls are rejected.
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// Cards not yet dealt.
    pub shoe: Mutex<Shoe>,
    /// Dealt cards; merged back into the shoe only by an explicit reshuffle.
    pub discard: Mutex<Vec<Card>>,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// The player's hand.
    pub player_hand: Mutex<Hand>,
    /// The dealer's hand. Both cards are always present; hiding the hole
    /// card is the presentation layer's concern.
    pub dealer_hand: Mutex<Hand>,
    /// Chip total and pending bet.
    pub bankroll: Mutex<Bankroll>,
    /// The seat receiving the next card.
    active_seat: Mutex<Seat>,
    /// The scheduled step, if a chain is pending.
    pending: Mutex<Option<PendingStep>>,
    /// Raised while a step chain is pending.
    busy: BusyFlag,
    /// Summary of the last settled round.
    last_result: Mutex<Option<RoundResult>>,
    /// Outward notification channel.
    sink: Mutex<Box<dyn NotifySink>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a new table with a freshly built and shuffled shoe.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjtable::{Table, TableOptions};
    ///
    /// let options = TableOptions::default();
    /// let table = Table::new(options, 42);
    /// let _ = table;
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut shoe = Shoe::new();
        shoe.add_decks(options.decks);
        shoe.shuffle(&mut rng);

        Self {
            options,
            shoe: Mutex::new(shoe),
            discard: Mutex::new(Vec::new()),
            state: Mutex::new(RoundState::Idle),
            player_hand: Mutex::new(Hand::new()),
            dealer_hand: Mutex::new(Hand::new()),
            bankroll: Mutex::new(Bankroll::new()),
            active_seat: Mutex::new(Seat::Player),
            pending: Mutex::new(None),
            busy: BusyFlag::new(),
            last_result: Mutex::new(None),
            sink: Mutex::new(Box::new(NullSink)),
            rng: Mutex::new(rng),
        }
    }

    /// Installs the notification sink. Defaults to a no-op sink.
    pub fn set_sink(&self, sink: Box<dyn NotifySink>) {
        *self.sink.lock() = sink;
    }

    /// Adds bought-in chips to the bankroll.
    pub fn buy_in(&self, chips: usize) {
        self.bankroll.lock().deposit(chips);
    }

    /// Opens betting for a new round.
    ///
    /// Both hands are moved to the discard pool and the seat cycle resets to
    /// the player.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy or a round is already under way.
    pub fn start_round(&self) -> Result<(), StartError> {
        if self.is_busy() {
            return Err(StartError::Busy);
        }
        if *self.state.lock() != RoundState::Idle {
            return Err(StartError::InvalidState);
        }

        self.discard_hands();
        *self.active_seat.lock() = Seat::Player;
        *self.state.lock() = RoundState::Betting;
        Ok(())
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the seat receiving the next card.
    pub fn active_seat(&self) -> Seat {
        *self.active_seat.lock()
    }

    /// Returns whether a step chain is pending.
    ///
    /// While busy, every player-initiated operation is rejected; this flag
    /// is the table's sole concurrency-control mechanism.
    pub fn is_busy(&self) -> bool {
        self.busy.is_raised()
    }

    /// Returns a snapshot of the player's hand.
    pub fn get_player_hand(&self) -> Hand {
        self.player_hand.lock().clone()
    }

    /// Returns a snapshot of the dealer's hand, hole card included.
    pub fn get_dealer_hand(&self) -> Hand {
        self.dealer_hand.lock().clone()
    }

    /// Returns a snapshot of the bankroll.
    pub fn get_bankroll(&self) -> Bankroll {
        *self.bankroll.lock()
    }

    /// Returns the summary of the last settled round, if any.
    pub fn last_result(&self) -> Option<RoundResult> {
        *self.last_result.lock()
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.shoe.lock().len()
    }

    /// Returns the number of cards in the discard pool.
    pub fn discard_count(&self) -> usize {
        self.discard.lock().len()
    }

    /// Returns whether a reshuffle is advised based on penetration.
    ///
    /// Advisory only: the table never reshuffles on its own. If penetration
    /// is 0, always returns `false`.
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration == 0.0 {
            return false;
        }

        let total_cards = self.options.decks as usize * DECK_SIZE;
        let remaining = self.cards_remaining();
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (remaining as f64 / total_cards as f64);

        used_ratio >= self.options.penetration
    }

    /// Merges the discard pool back into the shoe and shuffles.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy or a round is under way
    /// (reshuffling is only possible from `Idle` or `Betting`).
    #[expect(
        clippy::significant_drop_tightening,
        reason = "locks are held for entire operation"
    )]
    pub fn reshuffle(&self) -> Result<(), ReshuffleError> {
        if self.is_busy() {
            return Err(ReshuffleError::Busy);
        }
        let state = *self.state.lock();
        if state != RoundState::Idle && state != RoundState::Betting {
            return Err(ReshuffleError::RoundInProgress);
        }

        let mut shoe = self.shoe.lock();
        let mut rng = self.rng.lock();

        shoe.add(self.discard.lock().drain(..));
        shoe.shuffle(&mut *rng);

        Ok(())
    }

    /// Checks penetration and reshuffles if advised.
    ///
    /// Returns `true` if a reshuffle was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is busy or a round is under way.
    pub fn check_and_reshuffle(&self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reshuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Draws a single card from the shoe.
    ///
    /// `None` is the shoe-exhausted signal; callers must abort the round
    /// rather than deal short.
    pub(super) fn draw(&self) -> Option<Card> {
        self.shoe.lock().remove(1).pop()
    }

    /// Moves both hands to the discard pool.
    pub(super) fn discard_hands(&self) {
        let mut discard = self.discard.lock();
        discard.extend(self.player_hand.lock().clear());
        discard.extend(self.dealer_hand.lock().clear());
    }

    /// Sets the active seat.
    pub(super) fn set_active_seat(&self, seat: Seat) {
        *self.active_seat.lock() = seat;
    }

    /// Records the last settled round.
    pub(super) fn set_last_result(&self, result: RoundResult) {
        *self.last_result.lock() = Some(result);
    }

    /// Delivers one notification through the installed sink.
    pub(super) fn notify(&self, kind: NoticeKind, message: &str) {
        self.sink.lock().notify(kind, message);
    }
}
