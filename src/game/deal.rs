use alloc::vec::Vec;

use tracing::debug;

use crate::error::DealError;
use crate::hand::Hand;
use crate::pile::DiscardPile;
use crate::turn::TurnSequencer;

use super::{Game, GameState};

impl Game {
    /// Seeds the discard pile and deals every player their hand.
    ///
    /// One card is drawn onto the discard pile first, then each player in
    /// join order receives `hand_size` cards. The first player to join moves
    /// first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for players, nobody has
    /// joined, or the deck cannot cover every hand plus the discard seed.
    /// Nothing is dealt on error.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        let players = self.players.lock().clone();
        let sequencer = TurnSequencer::new(players.iter().copied()).ok_or(DealError::NoPlayers)?;

        let cards_needed = players
            .len()
            .checked_mul(self.options.hand_size)
            .and_then(|n| n.checked_add(1))
            .ok_or(DealError::NotEnoughCards)?;

        let mut hands = self.hands.lock();
        let mut pile = self.discard.lock();
        let mut deck = self.deck.lock();

        if deck.len() < cards_needed {
            return Err(DealError::NotEnoughCards);
        }

        let seed = deck.draw().ok_or(DealError::NotEnoughCards)?;
        *pile = DiscardPile::from_cards(alloc::vec![seed]);

        hands.clear();
        for &player_id in &players {
            let cards: Vec<_> = (0..self.options.hand_size)
                .map_while(|_| deck.draw())
                .collect();
            hands.insert(player_id, Hand::from_cards(cards));
        }
        drop(deck);
        drop(pile);
        drop(hands);

        debug!(
            players = players.len(),
            hand_size = self.options.hand_size,
            top = %seed,
            "dealt"
        );

        *self.sequencer.lock() = Some(sequencer);
        *self.winner.lock() = None;
        *state = GameState::InProgress;

        Ok(())
    }
}
