//! The rules engine of a single-table blackjack game, with optional `no_std`
//! support.
//!
//! The crate provides a [`Table`] type that owns the shoe, both hands, and
//! the bankroll, and runs the per-round state machine: betting, staggered
//! dealing, player actions, dealer play, and settlement. Dealing and dealer
//! play are chains of discrete steps the caller advances one at a time, so a
//! presentation layer can re-render between cards.
//!
//! # Example
//!
//! ```no_run
//! use bjtable::{Table, TableOptions};
//!
//! let options = TableOptions::default();
//! let table = Table::new(options, 42);
//! table.buy_in(150);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bankroll;
pub mod card;
pub mod engine;
pub mod error;
pub mod hand;
pub mod notify;
pub mod options;
pub mod payout;
pub mod result;
pub mod shoe;
mod sync;

// Re-export main types
pub use bankroll::Bankroll;
pub use card::{Card, DECK_SIZE, Suit};
pub use engine::{PendingStep, RoundState, Seat, Step, Table};
pub use error::{
    ActionError, BetError, DealError, ReshuffleError, StartError, StepError,
};
pub use hand::{Hand, ValueOptions};
pub use notify::{NoticeKind, NotifySink, NullSink};
pub use options::{RoundingMode, TableOptions};
pub use payout::{payout, round_signed};
pub use result::{Outcome, RoundResult};
pub use shoe::Shoe;
