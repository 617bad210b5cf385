//! Piece placement notation (the board field of FEN).
//!
//! Ranks are listed from 8 down to 1 and separated by `/`. Within a rank,
//! letters name pieces (upper case White, lower case Black) and digits count
//! empty squares.

use crate::{Piece, Square};
use thiserror::Error;

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected 8 ranks, got {0}")]
    RankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidChar { ch: char, rank: u8 },

    #[error("rank {rank} describes {squares} squares, expected 8")]
    RankLength { rank: u8, squares: u32 },
}

/// The contents of all 64 squares, indexed by [`Square::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    squares: [Option<Piece>; 64],
}

impl Placement {
    /// The standard starting arrangement.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// Wraps an already-built array of squares.
    pub const fn from_squares(squares: [Option<Piece>; 64]) -> Self {
        Placement { squares }
    }

    /// Returns the squares, indexed by [`Square::index`].
    pub const fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Parses a placement string.
    pub fn parse(s: &str) -> Result<Self, PlacementError> {
        let ranks: Vec<&str> = s.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(PlacementError::RankCount(ranks.len()));
        }

        let mut squares = [None; 64];
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file = 0u32;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if let Some(sq) = Square::from_coords(file as u8, rank) {
                        squares[sq.index() as usize] = Some(piece);
                    }
                    file += 1;
                } else {
                    return Err(PlacementError::InvalidChar { ch, rank: rank + 1 });
                }
                if file > 8 {
                    break;
                }
            }
            if file != 8 {
                return Err(PlacementError::RankLength {
                    rank: rank + 1,
                    squares: file,
                });
            }
        }

        Ok(Placement { squares })
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.squares[(rank * 8 + file) as usize] {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.to_char())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{}", empty)?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    #[test]
    fn parse_startpos() {
        let placement = Placement::parse(Placement::STARTPOS).unwrap();
        let occupied = placement.squares().iter().flatten().count();
        assert_eq!(occupied, 32);
        assert_eq!(
            placement.squares()[Square::E1.index() as usize],
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            placement.squares()[Square::A8.index() as usize],
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
    }

    #[test]
    fn display_matches_input() {
        for s in [
            Placement::STARTPOS,
            "8/8/8/8/8/8/8/8",
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
        ] {
            assert_eq!(Placement::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn wrong_rank_count() {
        assert_eq!(
            Placement::parse("8/8/8/8/8/8/8"),
            Err(PlacementError::RankCount(7))
        );
    }

    #[test]
    fn invalid_character() {
        assert_eq!(
            Placement::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR"),
            Err(PlacementError::InvalidChar { ch: 'X', rank: 2 })
        );
        assert!(matches!(
            Placement::parse("8/8/8/8/8/8/8/07"),
            Err(PlacementError::InvalidChar { ch: '0', .. })
        ));
    }

    #[test]
    fn wrong_rank_length() {
        assert!(matches!(
            Placement::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
            Err(PlacementError::RankLength { rank: 8, .. })
        ));
        assert!(matches!(
            Placement::parse("8/8/8/8/8/8/8/7"),
            Err(PlacementError::RankLength { rank: 1, squares: 7 })
        ));
    }

    #[test]
    fn error_display() {
        let err = PlacementError::InvalidChar { ch: 'x', rank: 3 };
        assert_eq!(err.to_string(), "invalid character 'x' in rank 3");
    }
}
