//! Turn result types.

use crate::card::{Card, Color};
use crate::game::PlayerId;

/// Side effect of the played card's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Number card, or a WILD with only a color change.
    None,
    /// The next player was passed over.
    Skip,
    /// Play order was reversed.
    Reverse,
    /// The next player drew two cards.
    DrawTwo,
    /// The next player drew four cards.
    DrawFour,
}

/// Outcome of a single play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    /// The player who played.
    pub player_id: PlayerId,
    /// The card as it was held, before any color was nominated.
    pub card: Card,
    /// The symbol's side effect.
    pub effect: Effect,
    /// The player who drew penalty cards, if any.
    pub penalized: Option<PlayerId>,
    /// Number of penalty cards drawn.
    pub penalty_cards: usize,
    /// The color nominated for a colorless card.
    pub chosen_color: Option<Color>,
    /// The player whose turn it is now. Equal to `player_id` when the game
    /// just finished.
    pub next_player: PlayerId,
    /// Set when this play emptied the hand and ended the game.
    pub winner: Option<PlayerId>,
}
