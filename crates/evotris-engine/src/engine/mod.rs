//! Game execution and state management.
//!
//! This module runs whole games on top of the core data structures:
//!
//! - [`GameDriver`] - Turn loop over a board, a hold slot, and a seeded
//!   tetromino draw
//! - [`GameStats`] - Running statistics of a game (pieces placed, lines
//!   cleared)
//! - [`GameSeed`] - Seed for deterministic games
//! - [`PlacementStrategy`] / [`TurnDecision`] - The decision interface the
//!   driver consults once per turn
//!
//! # Game Flow
//!
//! A game progresses as follows:
//!
//! 1. Create a [`GameDriver`], optionally with a fixed [`GameSeed`]
//! 2. Each turn the driver draws a uniformly random tetromino
//! 3. The [`PlacementStrategy`] answers with an orientation and column for
//!    the drawn or the held tetromino
//! 4. The piece drops, completed lines clear, and [`GameStats`] is updated
//! 5. The game ends when the strategy reports no valid move or the caller's
//!    turn limit is reached
//!
//! # Example
//!
//! ```
//! use evotris_engine::{Field, GameDriver, PlacementStrategy, Tetromino, TurnDecision};
//!
//! /// Drops every drawn tetromino, unrotated, into the leftmost column.
//! struct FirstColumn;
//!
//! impl PlacementStrategy for FirstColumn {
//!     fn plan_turn(
//!         &self,
//!         _field: &Field,
//!         drawn: Tetromino,
//!         _held: Option<Tetromino>,
//!     ) -> TurnDecision {
//!         TurnDecision::PlaceDrawn {
//!             tetromino: drawn,
//!             column: 0,
//!         }
//!     }
//! }
//!
//! let mut driver = GameDriver::new();
//! let stats = driver.play(&FirstColumn, 10);
//! assert_eq!(stats.pieces_placed(), 10);
//! ```

pub use self::{driver::*, game_stats::*};

mod driver;
mod game_stats;
