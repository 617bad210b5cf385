//! Core types for chess.
//!
//! This crate provides the fundamental value types shared by the rules engine:
//! - [`Piece`], [`PieceKind`], and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Move`] for move requests
//! - [`Placement`] for reading and writing board layouts

mod color;
mod mov;
mod piece;
mod placement;
mod square;

pub use color::Color;
pub use mov::{Move, MoveParseError};
pub use piece::{Piece, PieceKind};
pub use placement::{Placement, PlacementError};
pub use square::{File, Rank, Square, SquareError};
