//! Round configuration options.

use core::time::Duration;

/// Configuration options for a blackjack round.
///
/// The defaults reproduce the fixed house rule: the dealer draws below 17
/// and stands on any 17, soft or hard.
///
/// ```
/// use bjround::RoundOptions;
/// use core::time::Duration;
///
/// let options = RoundOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_dealer_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Pause between dealer draws, handed to the scheduler.
    pub dealer_delay: Duration,
    /// Whether the deck is reshuffled at the start of every round.
    pub reshuffle_on_new_round: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            dealer_delay: Duration::from_secs(1),
            reshuffle_on_new_round: true,
        }
    }
}

impl RoundOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the pause between dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    /// use core::time::Duration;
    ///
    /// let options = RoundOptions::default().with_dealer_delay(Duration::ZERO);
    /// assert_eq!(options.dealer_delay, Duration::ZERO);
    /// ```
    #[must_use]
    pub const fn with_dealer_delay(mut self, delay: Duration) -> Self {
        self.dealer_delay = delay;
        self
    }

    /// Sets whether the deck is reshuffled when a round starts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_reshuffle_on_new_round(false);
    /// assert_eq!(options.reshuffle_on_new_round, false);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_on_new_round(mut self, reshuffle: bool) -> Self {
        self.reshuffle_on_new_round = reshuffle;
        self
    }

    /// Returns whether the dealer stands on the given hand.
    #[must_use]
    pub const fn dealer_stands(&self, value: u8, is_soft: bool) -> bool {
        if value > self.dealer_stands_on {
            return true;
        }
        value == self.dealer_stands_on && (!is_soft || self.stand_on_soft_17)
    }
}
