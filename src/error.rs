//! Error types for game operations.

use thiserror::Error;

/// A symbol or color code outside its enum domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCardSpec {
    /// Symbol code is not in 0..=14.
    #[error("invalid symbol code {0}")]
    Symbol(u8),
    /// Color code is not in 0..=4.
    #[error("invalid color code {0}")]
    Color(u8),
}

/// The discard pile has never been seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("discard pile is empty")]
pub struct EmptyPileError;

/// Neither the deck nor the discard pile has a card left to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deck and discard pile are exhausted")]
pub struct DeckExhaustedError;

/// A move the current player is not allowed to make.
///
/// Always recoverable: nothing is mutated when it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveError {
    /// No card at this hand index.
    #[error("hand index {0} is out of range")]
    IndexOutOfRange(usize),
    /// The card at this index does not match the discard top.
    #[error("card at index {0} cannot be played")]
    NotPlayable(usize),
    /// A colorless card was played without nominating a color.
    #[error("a color must be chosen for a wild card")]
    MissingColor,
    /// `Color::Wild` was nominated as the new color.
    #[error("chosen color must be blue, green, red or yellow")]
    InvalidColor,
}

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Players can only join before the deal.
    #[error("invalid game state for joining")]
    InvalidState,
    /// All player ids are taken.
    #[error("too many players")]
    TooManyPlayers,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have joined.
    #[error("no players have joined")]
    NoPlayers,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur while taking a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// The requested move is illegal.
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
    /// The match cannot continue because no cards are left to draw.
    #[error(transparent)]
    DeckExhausted(#[from] DeckExhaustedError),
}
