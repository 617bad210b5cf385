//! Move legality.
//!
//! [`is_legal`] is a pure function of a board, the side to move, and a move
//! request. It never mutates the board. Checks run in a fixed order and the
//! first failure is reported:
//!
//! 1. the origin holds a piece of the side to move
//! 2. the move leaves its square
//! 3. the destination does not hold a piece of the side to move
//! 4. the move fits the piece's shape, and sliding paths are clear

pub mod path;
mod shape;

use crate::Board;
use chess_core::{Color, Move, Piece, Square};
use thiserror::Error;

pub use path::Line;

/// Why a move request was refused.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("the square {square} does not hold a piece {side} may move")]
    NotYourPiece { square: Square, side: Color },

    #[error("you must move the piece at least one square")]
    NullMove,

    #[error("you cannot capture your own {piece}")]
    OwnPieceCapture { piece: Piece },

    #[error("the {piece} collided with the {blocker} at {square}")]
    Blocked {
        piece: Piece,
        blocker: Piece,
        square: Square,
    },

    #[error("that is not a valid move for the {piece}")]
    InvalidShape { piece: Piece },
}

/// A move the rules engine has approved, with the quantities derived while
/// checking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub mv: Move,
    /// The piece being moved.
    pub piece: Piece,
    /// The opposing piece standing on the destination, if any.
    pub captured: Option<Piece>,
}

/// Decides whether `side` may play `mv` on `board`.
pub fn is_legal(board: &Board, side: Color, mv: Move) -> Result<LegalMove, IllegalMove> {
    let piece = match board.piece_at(mv.from()) {
        Some(piece) if piece.is(side) => piece,
        _ => {
            return Err(IllegalMove::NotYourPiece {
                square: mv.from(),
                side,
            })
        }
    };

    if mv.is_null() {
        return Err(IllegalMove::NullMove);
    }

    let captured = board.piece_at(mv.to());
    if let Some(target) = captured.filter(|t| t.is(side)) {
        return Err(IllegalMove::OwnPieceCapture { piece: target });
    }

    shape::check(board, piece, mv)?;

    Ok(LegalMove {
        mv,
        piece,
        captured,
    })
}
