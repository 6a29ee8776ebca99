//! Play order.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Rotating play order.
///
/// Exactly one player is current; every other player waits in the queue
/// exactly once. Direction is the order of the queue itself, so a reverse
/// flips the queue in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSequencer<P> {
    current: P,
    waiting: VecDeque<P>,
}

impl<P: Copy> TurnSequencer<P> {
    /// Creates a sequencer in deal order: the first player is current.
    ///
    /// Returns `None` if `players` is empty.
    pub fn new<I: IntoIterator<Item = P>>(players: I) -> Option<Self> {
        let mut waiting: VecDeque<P> = players.into_iter().collect();
        let current = waiting.pop_front()?;
        Some(Self { current, waiting })
    }

    /// Returns the current player.
    #[must_use]
    pub const fn current(&self) -> P {
        self.current
    }

    /// Returns the player who would move after the current one, before any
    /// skip or reverse is applied.
    #[must_use]
    pub fn next(&self) -> P {
        self.waiting.front().copied().unwrap_or(self.current)
    }

    /// Returns the waiting players in turn order.
    #[must_use]
    pub fn waiting(&self) -> Vec<P> {
        self.waiting.iter().copied().collect()
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waiting.len() + 1
    }

    /// Always `false`: a sequencer holds at least the current player.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Moves the current player to the back of the queue and makes the front
    /// current. With `skip`, this happens twice so the next player is passed
    /// over.
    pub fn advance(&mut self, skip: bool) {
        self.rotate();
        if skip {
            self.rotate();
        }
    }

    /// Reverses the waiting queue. With two players this has no effect.
    pub fn reverse(&mut self) {
        self.waiting.make_contiguous().reverse();
    }

    fn rotate(&mut self) {
        self.waiting.push_back(self.current);
        if let Some(next) = self.waiting.pop_front() {
            self.current = next;
        }
    }
}
