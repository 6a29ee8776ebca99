//! An Uno-style card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns the draw [`Deck`], the
//! [`DiscardPile`], every player's [`Hand`] and the [`TurnSequencer`], and
//! applies special-card effects (skip, reverse, draw two, draw four and wild
//! color changes) atomically with each play.
//!
//! # Example
//!
//! ```no_run
//! use unors::{Game, GameOptions};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.join("Alice").unwrap();
//! game.join("Bob").unwrap();
//! game.deal().unwrap();
//! println!("{}", game.render_current_hand().unwrap());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pile;
pub mod result;
pub mod turn;
mod sync;

// Re-export main types
pub use card::{COLORS, Card, Color, Symbol};
pub use deck::{DECK_SIZE, Deck, build_canonical};
pub use error::{
    DealError, DeckExhaustedError, EmptyPileError, IllegalMoveError, InvalidCardSpec, JoinError,
    TurnError,
};
pub use game::{Game, GameState, PlayerId};
pub use hand::Hand;
pub use options::GameOptions;
pub use pile::DiscardPile;
pub use result::{Effect, TurnResult};
pub use turn::TurnSequencer;
