//! Table configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.5)
///     .with_deal_pace_ms(250);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Blackjack payout ratio (typically 1.5, i.e. 3:2).
    pub blackjack_pays: f64,
    /// Rounding mode for fractional blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Pacing delay between dealt cards, in milliseconds.
    pub deal_pace_ms: u64,
    /// Pacing delay between dealer draws, in milliseconds.
    pub dealer_pace_ms: u64,
    /// How long the settled result stays on display before betting reopens,
    /// in milliseconds.
    pub settle_display_ms: u64,
    /// Deck penetration (fraction of the shoe played before a reshuffle is
    /// advised). 0 to disable the advisory.
    pub penetration: f64,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            deal_pace_ms: 350,
            dealer_pace_ms: 650,
            settle_display_ms: 2000,
            penetration: 0.75,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for fractional blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the pacing delay between dealt cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_deal_pace_ms(100);
    /// assert_eq!(options.deal_pace_ms, 100);
    /// ```
    #[must_use]
    pub const fn with_deal_pace_ms(mut self, pace: u64) -> Self {
        self.deal_pace_ms = pace;
        self
    }

    /// Sets the pacing delay between dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_pace_ms(500);
    /// assert_eq!(options.dealer_pace_ms, 500);
    /// ```
    #[must_use]
    pub const fn with_dealer_pace_ms(mut self, pace: u64) -> Self {
        self.dealer_pace_ms = pace;
        self
    }

    /// Sets how long the settled result stays on display.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_settle_display_ms(1000);
    /// assert_eq!(options.settle_display_ms, 1000);
    /// ```
    #[must_use]
    pub const fn with_settle_display_ms(mut self, display: u64) -> Self {
        self.settle_display_ms = display;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::TableOptions;
    ///
    /// let options = TableOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
