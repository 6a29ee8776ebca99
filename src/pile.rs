//! The discard pile and deck recycling.

use alloc::vec::Vec;

use rand::Rng;
use tracing::{debug, trace, warn};

use crate::card::{Card, Color, Symbol};
use crate::deck::Deck;
use crate::error::{DeckExhaustedError, EmptyPileError};

/// Played cards. The last card is the top and sets the color and symbol the
/// next play has to match.
///
/// The pile does not own the [`Deck`]; operations that may have to refill it
/// borrow it for the call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates an empty, unseeded pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a pile holding `cards`, last card on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile was never seeded.
    pub fn top(&self) -> Result<Card, EmptyPileError> {
        self.cards.last().copied().ok_or(EmptyPileError)
    }

    /// Replaces the top card with `(symbol, color)`.
    ///
    /// Used when a colorless card is played and its player nominates a color.
    ///
    /// # Errors
    ///
    /// Returns an error if the pile was never seeded.
    pub fn switch_top(&mut self, symbol: Symbol, color: Color) -> Result<(), EmptyPileError> {
        let top = self.cards.last_mut().ok_or(EmptyPileError)?;
        *top = Card::new(symbol, color);
        Ok(())
    }

    /// Puts `card` on top of the pile.
    ///
    /// If `deck` is empty the pile is recycled first, so `card` stays on top
    /// and is never shuffled back into the deck.
    pub fn discard<R: Rng + ?Sized>(&mut self, card: Card, deck: &mut Deck, rng: &mut R) {
        if deck.is_empty() {
            self.recycle(deck, rng);
        }
        self.cards.push(card);
    }

    /// Draws a card from `deck`, recycling the pile into it first if it is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty and the pile holds nothing below
    /// its top card.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Card, DeckExhaustedError> {
        if deck.is_empty() {
            self.recycle(deck, rng);
        }
        let card = deck.draw().ok_or_else(|| {
            warn!("no cards left in deck or discard pile");
            DeckExhaustedError
        })?;
        trace!(%card, remaining = deck.len(), "drew card");
        Ok(card)
    }

    /// Moves every card below the top into `deck` and shuffles it.
    ///
    /// Colorless cards whose color was nominated go back as `Color::Wild`.
    /// Returns the number of recycled cards.
    pub fn recycle<R: Rng + ?Sized>(&mut self, deck: &mut Deck, rng: &mut R) -> usize {
        let Some(top) = self.cards.pop() else {
            return 0;
        };
        let recycled = core::mem::replace(&mut self.cards, alloc::vec![top]);
        let count = recycled.len();

        deck.refill(
            recycled.into_iter().map(|card| {
                if card.symbol.is_colorless() {
                    Card::new(card.symbol, Color::Wild)
                } else {
                    card
                }
            }),
            rng,
        );
        debug!(count, "recycled discard pile into deck");
        count
    }

    /// Returns the played cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
