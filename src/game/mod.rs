//! Game engine and state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::JoinError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::pile::DiscardPile;
use crate::turn::TurnSequencer;

mod deal;
mod play;
pub mod state;

pub use state::GameState;

/// Player identifier, assigned in join order starting at 0.
pub type PlayerId = u8;

/// An Uno-style game engine that manages the deck, discard pile, hands and
/// play order of a single match.
///
/// Every method takes `&self`, so one match can be shared between threads;
/// separate matches never share state. Use [`GameOptions`] to configure the
/// hand size and whether an empty hand ends the game.
#[derive(Debug)]
pub struct Game {
    /// The draw pile.
    pub deck: Mutex<Deck>,
    /// The discard pile.
    pub discard: Mutex<DiscardPile>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Player IDs in join order.
    pub players: Mutex<Vec<PlayerId>>,
    /// Display names (`player_id` -> name).
    names: Mutex<HashMap<PlayerId, String>>,
    /// Player hands (`player_id` -> hand).
    pub hands: Mutex<HashMap<PlayerId, Hand>>,
    /// Play order, set by the deal.
    sequencer: Mutex<Option<TurnSequencer<PlayerId>>>,
    /// Player who emptied their hand, when that ends the game.
    winner: Mutex<Option<PlayerId>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with a shuffled canonical deck.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::{DECK_SIZE, Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);
        Self::from_parts(options, deck, rng)
    }

    /// Creates a new game drawing from `deck` as given, without shuffling it.
    ///
    /// `seed` still drives the shuffles done when the discard pile is
    /// recycled.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck, seed: u64) -> Self {
        Self::from_parts(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(options: GameOptions, deck: Deck, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Mutex::new(deck),
            discard: Mutex::new(DiscardPile::new()),
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            names: Mutex::new(HashMap::new()),
            hands: Mutex::new(HashMap::new()),
            sequencer: Mutex::new(None),
            winner: Mutex::new(None),
            rng: Mutex::new(rng),
        }
    }

    /// Joins the game under `name`.
    ///
    /// Returns the assigned player ID. Deal order is join order.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt or all IDs are
    /// taken.
    pub fn join(&self, name: impl Into<String>) -> Result<PlayerId, JoinError> {
        let state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let id = self
            .next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| JoinError::TooManyPlayers)?;
        let name = name.into();
        debug!(id, %name, "player joined");

        self.players.lock().push(id);
        self.names.lock().insert(id, name);
        drop(state);
        Ok(id)
    }

    /// Returns the number of players.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns the display name of a player.
    pub fn player_name(&self, player_id: PlayerId) -> Option<String> {
        self.names.lock().get(&player_id).cloned()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns the number of cards in the discard pile.
    pub fn discard_len(&self) -> usize {
        self.discard.lock().len()
    }

    /// Returns the top of the discard pile, or `None` before the deal.
    pub fn top_card(&self) -> Option<Card> {
        self.discard.lock().top().ok()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the player whose turn it is, or `None` before the deal.
    pub fn current_player(&self) -> Option<PlayerId> {
        self.sequencer.lock().as_ref().map(TurnSequencer::current)
    }

    /// Returns the display name of the player whose turn it is.
    pub fn current_player_name(&self) -> Option<String> {
        self.current_player().and_then(|id| self.player_name(id))
    }

    /// Returns the waiting players in turn order, excluding the current one.
    pub fn turn_order(&self) -> Vec<PlayerId> {
        self.sequencer
            .lock()
            .as_ref()
            .map(TurnSequencer::waiting)
            .unwrap_or_default()
    }

    /// Returns a clone of the player's hand.
    pub fn hand(&self, player_id: PlayerId) -> Option<Hand> {
        self.hands.lock().get(&player_id).cloned()
    }

    /// Returns the current player's playable cards.
    ///
    /// Empty before the deal, or when the player has to draw.
    pub fn legal_moves(&self) -> Vec<Card> {
        let (Some(player_id), Some(top)) = (self.current_player(), self.top_card()) else {
            return Vec::new();
        };
        self.hands
            .lock()
            .get(&player_id)
            .map(|hand| hand.legal_moves(&top))
            .unwrap_or_default()
    }

    /// Renders the current player's hand with each card flagged playable or
    /// not, or `None` before the deal.
    pub fn render_current_hand(&self) -> Option<String> {
        let player_id = self.current_player()?;
        let top = self.top_card()?;
        self.hands
            .lock()
            .get(&player_id)
            .map(|hand| hand.render(&top))
    }

    /// Returns the player who won by emptying their hand.
    pub fn winner(&self) -> Option<PlayerId> {
        *self.winner.lock()
    }

    /// Clears hands, the discard pile and play order and shuffles a fresh
    /// canonical deck. Joined players stay; the game returns to the
    /// `WaitingForPlayers` state.
    pub fn reset(&self) {
        let mut state = self.state.lock();
        *self.sequencer.lock() = None;
        self.hands.lock().clear();
        *self.discard.lock() = DiscardPile::new();
        let deck = Deck::new(&mut *self.rng.lock());
        *self.deck.lock() = deck;
        *self.winner.lock() = None;
        *state = GameState::WaitingForPlayers;
        debug!("game reset");
    }
}
