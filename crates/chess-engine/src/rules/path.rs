//! Path obstruction for sliding pieces.

use crate::Board;
use chess_core::{Move, Square};

/// The geometric relationship between a move's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    /// Same file or same rank.
    Straight,
    /// Equal file and rank distance.
    Diagonal,
}

impl Line {
    /// Classifies a non-null move, or returns `None` if it is neither
    /// straight nor diagonal.
    pub fn of(mv: Move) -> Option<Line> {
        let (dx, dy) = (mv.dx(), mv.dy());
        if mv.is_null() {
            None
        } else if dx == 0 || dy == 0 {
            Some(Line::Straight)
        } else if dx.abs() == dy.abs() {
            Some(Line::Diagonal)
        } else {
            None
        }
    }
}

/// Iterates over the squares strictly between the endpoints of `mv`.
///
/// # Panics
///
/// Panics if `mv` is not a straight or diagonal line. The rules engine only
/// walks a path after the piece's shape test has accepted it, so reaching the
/// panic means the engine itself is broken.
pub fn squares_between(mv: Move) -> impl Iterator<Item = Square> {
    if Line::of(mv).is_none() {
        unreachable!("move {:?} cannot be checked for collisions", mv);
    }
    let step = (mv.dx().signum(), mv.dy().signum());
    let steps = mv.dx().abs().max(mv.dy().abs());
    (1..steps).filter_map(move |i| mv.from().offset(step.0 * i, step.1 * i))
}

/// Returns the first occupied square strictly between the endpoints of `mv`,
/// walking from the origin.
pub fn first_blocker(board: &Board, mv: Move) -> Option<Square> {
    squares_between(mv).find(|&sq| !board.is_empty(sq))
}
