//! Move representation.

use crate::Square;
use std::fmt;
use thiserror::Error;

/// Errors produced while reading a move from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("expected two squares, got \"{0}\"")]
    WrongShape(String),

    #[error("\"{0}\" is not a square on the board")]
    InvalidSquare(String),
}

/// A requested move: an origin and a destination square.
///
/// Moves are short-lived values built for a single legality check. Derived
/// quantities such as the file and rank deltas are computed on demand.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Signed file delta, `to.file - from.file`.
    #[inline]
    pub const fn dx(self) -> i8 {
        self.to.file_index() as i8 - self.from.file_index() as i8
    }

    /// Signed rank delta, `to.rank - from.rank`.
    #[inline]
    pub const fn dy(self) -> i8 {
        self.to.rank_index() as i8 - self.from.rank_index() as i8
    }

    /// Returns true if the move does not leave its square.
    #[inline]
    pub fn is_null(self) -> bool {
        self.from == self.to
    }

    /// Parses a move from text.
    ///
    /// Accepted forms:
    /// - `e2e4` and `e2 e4` (algebraic squares)
    /// - `41 43` (0-based file digit followed by rank digit, per square)
    pub fn parse(s: &str) -> Result<Self, MoveParseError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split_whitespace().collect();
        let (from, to) = match parts.as_slice() {
            [from, to] => (*from, *to),
            [joined] if joined.len() == 4 && joined.is_ascii() => (&joined[..2], &joined[2..]),
            _ => return Err(MoveParseError::WrongShape(s.to_string())),
        };
        Ok(Move::new(parse_square(from)?, parse_square(to)?))
    }
}

fn parse_square(s: &str) -> Result<Square, MoveParseError> {
    let invalid = || MoveParseError::InvalidSquare(s.to_string());
    if let Some(square) = Square::from_algebraic(s) {
        return Ok(square);
    }
    let digits: Vec<u32> = s
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<_>>()
        .ok_or_else(invalid)?;
    match digits.as_slice() {
        [file, rank] => Square::from_coords(*file as u8, *rank as u8).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

impl std::str::FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::parse(s)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from, self.to)
    }
}
