//! Chess rules engine for turn-based play.
//!
//! This crate provides:
//! - [`Board`] - 8×8 grid of optional pieces
//! - [`rules`] - pure move legality with per-piece shapes and path obstruction
//! - [`Game`] - turn alternation, king-capture win detection, resignation,
//!   and a log of player-facing messages
//! - [`EngineConfig`] - TOML-backed settings
//!
//! The engine does no rendering and reads no input devices. A shell passes in
//! coordinates, then reads back the board, the side to move, the outcome, and
//! the drained message log.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Square};
//! use chess_engine::{Game, Outcome};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! game.attempt_move(e2, e4).unwrap();
//!
//! assert_eq!(game.side_to_move(), Color::Black);
//! assert_eq!(game.outcome(), Outcome::Ongoing);
//! for message in game.read_and_clear_messages() {
//!     println!("{}", message);
//! }
//! ```

mod board;
mod config;
mod game;
mod messages;
pub mod rules;

pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use game::{Game, GameError, MoveRecord, Outcome};
pub use messages::MessageLog;
pub use rules::{is_legal, IllegalMove, LegalMove};
