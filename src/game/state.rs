//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// Cards are dealt and players take turns.
    InProgress,
    /// A player emptied their hand, or no cards are left to draw.
    Finished,
}
