//! Player hands.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use rand::Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckExhaustedError, IllegalMoveError};
use crate::pile::DiscardPile;

/// A player's hand.
///
/// Legal moves are derived from the discard top on every call and never
/// cached between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards that can be played on `top`, in hand order.
    #[must_use]
    pub fn legal_moves(&self, top: &Card) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.matches(top))
            .copied()
            .collect()
    }

    /// Returns whether any card can be played on `top`.
    #[must_use]
    pub fn has_legal_move(&self, top: &Card) -> bool {
        self.cards.iter().any(|card| card.matches(top))
    }

    /// Checks that the card at `index` can be played on `top` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the card does not match.
    pub fn check_play(&self, index: usize, top: &Card) -> Result<Card, IllegalMoveError> {
        let card = self
            .cards
            .get(index)
            .copied()
            .ok_or(IllegalMoveError::IndexOutOfRange(index))?;
        if !card.matches(top) {
            return Err(IllegalMoveError::NotPlayable(index));
        }
        Ok(card)
    }

    /// Removes and returns the card at `index` if it can be played on `top`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range or the card does not
    /// match; the hand is left unchanged.
    pub fn play(&mut self, index: usize, top: &Card) -> Result<Card, IllegalMoveError> {
        self.check_play(index, top)?;
        Ok(self.cards.remove(index))
    }

    /// Draws `count` cards through the discard pile so an empty deck is
    /// recycled first. Returns the drawn cards.
    ///
    /// Cards drawn before an exhaustion error stay in the hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck and discard pile run out.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        pile: &mut DiscardPile,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Vec<Card>, DeckExhaustedError> {
        let mut drawn = Vec::with_capacity(count);
        for _ in 0..count {
            let card = pile.draw(deck, rng)?;
            self.cards.push(card);
            drawn.push(card);
        }
        Ok(drawn)
    }

    /// Draws until some card can be played on the pile's top. Returns the
    /// drawn cards, empty if a legal move already existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck and discard pile run out first.
    pub fn force_draw<R: Rng + ?Sized>(
        &mut self,
        pile: &mut DiscardPile,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Vec<Card>, DeckExhaustedError> {
        let mut drawn = Vec::new();
        loop {
            // An unseeded pile has no top to match; treat it as exhausted.
            let top = pile.top().map_err(|_| DeckExhaustedError)?;
            if self.has_legal_move(&top) {
                return Ok(drawn);
            }
            let card = pile.draw(deck, rng)?;
            self.cards.push(card);
            drawn.push(card);
        }
    }

    /// Adds two penalty cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck and discard pile run out.
    pub fn apply_draw_two<R: Rng + ?Sized>(
        &mut self,
        pile: &mut DiscardPile,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Vec<Card>, DeckExhaustedError> {
        self.draw(2, pile, deck, rng)
    }

    /// Adds four penalty cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck and discard pile run out.
    pub fn apply_draw_four<R: Rng + ?Sized>(
        &mut self,
        pile: &mut DiscardPile,
        deck: &mut Deck,
        rng: &mut R,
    ) -> Result<Vec<Card>, DeckExhaustedError> {
        self.draw(4, pile, deck, rng)
    }

    /// Renders the hand as an enumerated list, one card per line, each
    /// flagged `possible` or `not possible` against `top`.
    #[must_use]
    pub fn render(&self, top: &Card) -> String {
        let mut output = String::new();
        for (index, card) in self.cards.iter().enumerate() {
            let flag = if card.matches(top) {
                "possible"
            } else {
                "not possible"
            };
            // Writing to a String cannot fail.
            let _ = writeln!(output, "{index}. {card}: {flag}");
        }
        output
    }
}
