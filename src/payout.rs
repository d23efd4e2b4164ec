//! Payout calculation for a settled round.

use crate::hand::Hand;
use crate::options::RoundingMode;

/// Maps two final hands and a bet to a signed payout.
///
/// Branch order matters: a player bust loses regardless of the dealer's
/// cards, and a dealer bust pays any surviving player hand. A winning
/// blackjack pays `bet * blackjack_pays` (3:2 tables pass 1.5); a blackjack
/// against a dealer blackjack of equal value is a loss only when the player
/// hand is not itself a blackjack.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "f64 has sufficient precision for chip amounts"
)]
pub fn payout(bet: usize, player: &Hand, dealer: &Hand, blackjack_pays: f64) -> f64 {
    let bet = bet as f64;

    if player.is_bust() {
        return -bet;
    }

    if dealer.is_bust() {
        return bet;
    }

    if player.value() < dealer.value() {
        return -bet;
    }

    if player.value() > dealer.value() {
        return bet * if player.is_blackjack() { blackjack_pays } else { 1.0 };
    }

    if player.is_blackjack() && !dealer.is_blackjack() {
        return bet * blackjack_pays;
    }

    if dealer.is_blackjack() {
        return -bet;
    }

    0.0
}

/// Rounds a signed payout to whole chips.
///
/// Only a blackjack payout on an odd bet can be fractional; every other
/// branch of [`payout`] is already integral.
#[must_use]
#[cfg(feature = "std")]
pub fn round_signed(amount: f64, mode: RoundingMode) -> isize {
    match mode {
        RoundingMode::Up => amount.ceil() as isize,
        RoundingMode::Down => amount.floor() as isize,
        RoundingMode::Nearest => amount.round() as isize,
    }
}

/// Rounds a signed payout to whole chips.
///
/// Only a blackjack payout on an odd bet can be fractional; every other
/// branch of [`payout`] is already integral.
#[must_use]
#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub fn round_signed(amount: f64, mode: RoundingMode) -> isize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as isize,
        RoundingMode::Down => libm::floor(amount) as isize,
        RoundingMode::Nearest => libm::round(amount) as isize,
    }
}
