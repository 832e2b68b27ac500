//! Board evaluation and placement selection for the Evotris engine.
//!
//! This crate turns a vector of feature weights into a playing policy:
//!
//! 1. **Features** ([`features`]) - Measures a board as a fixed-length vector
//!    of structural properties (buried gaps, column height statistics).
//!
//! 2. **Strategy** ([`strategy`]) - Scores candidate drops as the weighted sum
//!    of the resulting board's features and picks the cheapest one, for both
//!    the drawn and the held tetromino.
//!
//! Weights are trained by the `evotris-training` crate; hand-written weights
//! work just as well for experimenting.
//!
//! # Examples
//!
//! ```
//! use evotris_engine::GameDriver;
//! use evotris_evaluator::strategy::HeuristicStrategy;
//!
//! // Penalize gaps and tall, uneven stacks.
//! let strategy = HeuristicStrategy::new([0.8, 0.5, 0.2, 0.3, 0.6]);
//! let mut driver = GameDriver::new();
//! let stats = driver.play(&strategy, 10);
//! assert_eq!(stats.pieces_placed(), 10);
//! ```

pub mod features;
pub mod strategy;
