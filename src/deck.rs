//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{COLORS, Card, Color, Symbol};

/// Number of cards in the canonical deck.
pub const DECK_SIZE: usize = 108;

/// Builds the canonical 108-card set in generation order.
///
/// One ZERO per color, two of every other colored symbol per color, then four
/// WILD and four DRAW FOUR cards. The order only matters for reproducible
/// tests; [`Deck::new`] shuffles it.
#[must_use]
pub fn build_canonical() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for color in COLORS {
        cards.push(Card::new(Symbol::Zero, color));
    }
    for &symbol in &Symbol::ALL[1..=12] {
        for color in COLORS {
            cards.push(Card::new(symbol, color));
            cards.push(Card::new(symbol, color));
        }
    }
    for _ in 0..4 {
        cards.push(Card::new(Symbol::Wild, Color::Wild));
        cards.push(Card::new(Symbol::DrawFour, Color::Wild));
    }

    cards
}

/// The draw pile. The last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates the canonical deck, shuffled with `rng`.
    #[must_use]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::from_cards(build_canonical());
        deck.shuffle(rng);
        deck
    }

    /// Creates a deck holding `cards` in the given order, without shuffling.
    ///
    /// The last card is drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Uniformly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card, or `None` if the deck is empty.
    ///
    /// Drawing never recycles the discard pile; see
    /// [`DiscardPile::draw`](crate::DiscardPile::draw) for that.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Moves `cards` into the deck and shuffles everything.
    pub(crate) fn refill<R, I>(&mut self, cards: I, rng: &mut R)
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
