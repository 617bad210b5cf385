//! The 8×8 board.

use chess_core::{Color, Piece, Placement, PlacementError, Square};
use std::fmt;

/// An 8×8 grid of optional pieces.
///
/// The board performs no legality checking of its own. [`Board::set`] is the
/// raw write primitive the game uses once the rules engine has approved a move.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates a board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard 32-piece starting arrangement.
    ///
    /// White occupies ranks 1 and 2, Black ranks 7 and 8, queens on the d-file
    /// and kings on the e-file.
    pub fn initial_setup() -> Self {
        match Self::from_placement(Placement::STARTPOS) {
            Ok(board) => board,
            Err(_) => unreachable!("starting placement is well formed"),
        }
    }

    /// Builds a board from placement notation, e.g. `"8/8/8/3k4/8/8/8/R3K3"`.
    pub fn from_placement(s: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            squares: *Placement::parse(s)?.squares(),
        })
    }

    /// Returns the board in placement notation.
    pub fn to_placement(&self) -> String {
        Placement::from_squares(self.squares).to_string()
    }

    /// Returns the piece on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Overwrites `sq` unconditionally.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Iterates over every occupied square and its piece, a1 through h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Returns the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Returns the number of pieces belonging to `color`.
    pub fn count_of(&self, color: Color) -> usize {
        self.squares.iter().flatten().filter(|p| p.is(color)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial_setup()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
