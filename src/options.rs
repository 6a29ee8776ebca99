//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use unors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_win_on_empty_hand(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Cards dealt to each player.
    pub hand_size: usize,
    /// Whether emptying a hand ends the game.
    ///
    /// Off by default: the engine then never finishes on its own and the
    /// front end decides when to stop.
    pub win_on_empty_hand: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 5,
            win_on_empty_hand: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets whether emptying a hand ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_win_on_empty_hand(true);
    /// assert!(options.win_on_empty_hand);
    /// ```
    #[must_use]
    pub const fn with_win_on_empty_hand(mut self, enabled: bool) -> Self {
        self.win_on_empty_hand = enabled;
        self
    }
}
