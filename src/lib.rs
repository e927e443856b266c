//! Tictac-Rust: a perfect-play tic-tac-toe engine.
//!
//! This crate implements tic-tac-toe together with an exhaustive minimax
//! search that plays PlayerO perfectly, reimplemented in Rust from an
//! original Python program.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`state`] - Board state, moves, win detection, terminal scoring
//! - [`minimax`] - Exhaustive minimax search (no pruning, no caching)
//! - [`game`] - Turn handling and the game state machine
//! - [`playout`] - Random-opponent game simulation
//! - [`shell`] - Interactive text shell
//!
//! ## Example
//!
//! ```
//! use tictac_rust::game::{Game, Status};
//!
//! // Start a new game; the human plays X, the engine answers with O.
//! let mut game = Game::new();
//! let status = game.play(4);
//!
//! assert_eq!(status, Status::InProgress);
//! // Against a center opening, perfect play takes the first corner.
//! assert_eq!(game.last_reply(), Some(0));
//! ```

pub mod constants;
pub mod game;
pub mod minimax;
pub mod playout;
pub mod shell;
pub mod state;
