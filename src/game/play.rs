use alloc::vec::Vec;

use tracing::{debug, warn};

use crate::card::{Card, Color, Symbol};
use crate::error::{DeckExhaustedError, IllegalMoveError, TurnError};
use crate::result::{Effect, TurnResult};
use crate::turn::TurnSequencer;

use super::{Game, GameState};

/// Cards the next player draws for a played symbol.
const fn penalty(symbol: Symbol) -> usize {
    match symbol {
        Symbol::DrawTwo => 2,
        Symbol::DrawFour => 4,
        _ => 0,
    }
}

/// Validates the color nominated for `card`.
///
/// Colored cards ignore `color`; colorless cards require one of the four
/// playable colors.
fn chosen_color(card: Card, color: Option<Color>) -> Result<Option<Color>, IllegalMoveError> {
    if card.color != Color::Wild {
        return Ok(None);
    }
    match color {
        None => Err(IllegalMoveError::MissingColor),
        Some(color) if !color.is_chosen() => Err(IllegalMoveError::InvalidColor),
        Some(color) => Ok(Some(color)),
    }
}

impl Game {
    /// Draws cards into the current player's hand until one of them can be
    /// played. Returns the drawn cards, empty if a legal move already
    /// existed.
    ///
    /// An empty deck is refilled from the discard pile.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, or if the deck and
    /// discard pile run out, which finishes the game.
    pub fn draw_until_playable(&self) -> Result<Vec<Card>, TurnError> {
        let mut state = self.state.lock();
        if *state != GameState::InProgress {
            return Err(TurnError::InvalidState);
        }

        let player_id = self
            .sequencer
            .lock()
            .as_ref()
            .map(TurnSequencer::current)
            .ok_or(TurnError::InvalidState)?;

        let mut hands = self.hands.lock();
        let hand = hands.get_mut(&player_id).ok_or(TurnError::InvalidState)?;
        let mut pile = self.discard.lock();
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();

        match hand.force_draw(&mut pile, &mut deck, &mut *rng) {
            Ok(drawn) => {
                if !drawn.is_empty() {
                    debug!(player_id, count = drawn.len(), "forced draw");
                }
                Ok(drawn)
            }
            Err(err) => {
                warn!(player_id, "match ended: no cards left to draw");
                *state = GameState::Finished;
                Err(err.into())
            }
        }
    }

    /// Plays the card at `index` of the current player's hand.
    ///
    /// `color` is required when the card is colorless and ignored otherwise.
    /// The play is resolved in this order:
    /// 1. the card leaves the hand,
    /// 2. it goes onto the discard pile, recycling the pile into an empty
    ///    deck first,
    /// 3. its symbol takes effect: SKIP passes over the next player, REVERSE
    ///    flips play order, DRAW TWO and DRAW FOUR make the next player draw
    ///    (they still take their turn),
    /// 4. a nominated color replaces the top card's color,
    /// 5. the turn advances.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress or the move is
    /// illegal; nothing changes in either case. If the deck and discard pile
    /// cannot cover a DRAW TWO or DRAW FOUR penalty, the game finishes
    /// without the card being played.
    pub fn play_turn(&self, index: usize, color: Option<Color>) -> Result<TurnResult, TurnError> {
        let mut state = self.state.lock();
        if *state != GameState::InProgress {
            return Err(TurnError::InvalidState);
        }

        let mut sequencer = self.sequencer.lock();
        let sequencer = sequencer.as_mut().ok_or(TurnError::InvalidState)?;
        let player_id = sequencer.current();
        let next_id = sequencer.next();

        let mut hands = self.hands.lock();
        let mut pile = self.discard.lock();
        let mut deck = self.deck.lock();
        let mut rng = self.rng.lock();

        let top = pile.top().map_err(|_| TurnError::InvalidState)?;
        let hand = hands.get_mut(&player_id).ok_or(TurnError::InvalidState)?;
        let card = hand.check_play(index, &top)?;
        let chosen = chosen_color(card, color)?;

        // Drawable after the discard: the deck plus the pile below the new top.
        let penalty_cards = penalty(card.symbol);
        if penalty_cards > deck.len() + pile.len() {
            warn!(player_id, %card, "match ended: penalty exceeds remaining cards");
            *state = GameState::Finished;
            return Err(DeckExhaustedError.into());
        }

        let card = hand.play(index, &top)?;
        let emptied = hand.is_empty();
        pile.discard(card, &mut deck, &mut *rng);
        debug!(player_id, %card, "played");

        let mut skip = false;
        let mut penalized = None;
        let effect = match card.symbol {
            Symbol::Skip => {
                skip = true;
                Effect::Skip
            }
            Symbol::Reverse => {
                sequencer.reverse();
                Effect::Reverse
            }
            Symbol::DrawTwo => {
                let victim = hands.get_mut(&next_id).ok_or(TurnError::InvalidState)?;
                victim.apply_draw_two(&mut pile, &mut deck, &mut *rng)?;
                penalized = Some(next_id);
                Effect::DrawTwo
            }
            Symbol::DrawFour => {
                let victim = hands.get_mut(&next_id).ok_or(TurnError::InvalidState)?;
                victim.apply_draw_four(&mut pile, &mut deck, &mut *rng)?;
                penalized = Some(next_id);
                Effect::DrawFour
            }
            _ => Effect::None,
        };
        if let Some(victim) = penalized {
            debug!(player_id = victim, count = penalty_cards, "penalty draw");
        }

        if let Some(color) = chosen {
            pile.switch_top(card.symbol, color)
                .map_err(|_| TurnError::InvalidState)?;
            debug!(%color, "color chosen");
        }

        let winner = (emptied && self.options.win_on_empty_hand).then_some(player_id);
        if let Some(winner) = winner {
            debug!(player_id = winner, "hand emptied, game over");
            *self.winner.lock() = Some(winner);
            *state = GameState::Finished;
        } else {
            sequencer.advance(skip);
        }

        Ok(TurnResult {
            player_id,
            card,
            effect,
            penalized,
            penalty_cards,
            chosen_color: chosen,
            next_player: sequencer.current(),
            winner,
        })
    }
}
