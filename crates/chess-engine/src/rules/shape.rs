//! Per-piece movement shapes.

use super::path::{first_blocker, Line};
use super::IllegalMove;
use crate::Board;
use chess_core::{Move, Piece, PieceKind, Square};

/// Checks that `mv` fits the movement pattern of `piece`, including path
/// obstruction for sliders and the pawn's double advance.
///
/// Callers have already ruled out null moves and own-piece captures.
pub(super) fn check(board: &Board, piece: Piece, mv: Move) -> Result<(), IllegalMove> {
    let invalid = IllegalMove::InvalidShape { piece };
    let (dx, dy) = (mv.dx().abs(), mv.dy().abs());

    if piece.kind.is_slider() {
        let fits = matches!(
            (piece.kind, Line::of(mv)),
            (PieceKind::Bishop, Some(Line::Diagonal))
                | (PieceKind::Rook, Some(Line::Straight))
                | (PieceKind::Queen, Some(_))
        );
        if !fits {
            return Err(invalid);
        }
        return clear_path(board, piece, mv);
    }

    match piece.kind {
        PieceKind::Knight => {
            if (dx, dy) == (1, 2) || (dx, dy) == (2, 1) {
                Ok(())
            } else {
                Err(invalid)
            }
        }
        PieceKind::King => {
            if dx <= 1 && dy <= 1 {
                Ok(())
            } else {
                Err(invalid)
            }
        }
        PieceKind::Pawn => pawn(board, piece, mv),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            unreachable!("sliders are handled above")
        }
    }
}

fn pawn(board: &Board, piece: Piece, mv: Move) -> Result<(), IllegalMove> {
    let invalid = IllegalMove::InvalidShape { piece };
    let forward = piece.color.forward();
    let destination_empty = board.is_empty(mv.to());

    match (mv.dx(), mv.dy()) {
        (0, dy) if dy == forward => {
            if destination_empty {
                Ok(())
            } else {
                Err(invalid)
            }
        }
        (-1 | 1, dy) if dy == forward => {
            if destination_empty {
                Err(invalid)
            } else {
                Ok(())
            }
        }
        (0, dy) if dy == 2 * forward && mv.from().rank_index() == piece.color.pawn_rank() => {
            clear_path(board, piece, mv)?;
            if destination_empty {
                Ok(())
            } else {
                Err(invalid)
            }
        }
        _ => Err(invalid),
    }
}

fn clear_path(board: &Board, piece: Piece, mv: Move) -> Result<(), IllegalMove> {
    match first_blocker(board, mv) {
        None => Ok(()),
        Some(square) => Err(blocked(board, piece, square)),
    }
}

fn blocked(board: &Board, piece: Piece, square: Square) -> IllegalMove {
    match board.piece_at(square) {
        Some(blocker) => IllegalMove::Blocked {
            piece,
            blocker,
            square,
        },
        None => unreachable!("blocker square {} is empty", square),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_legal;
    use chess_core::Color;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    fn legal(placement: &str, side: Color, from: &str, to: &str) -> Result<(), IllegalMove> {
        let board = Board::from_placement(placement).unwrap();
        is_legal(&board, side, mv(from, to)).map(|_| ())
    }

    const LONE_ROOK: &str = "8/8/8/8/3R4/8/8/8";
    const LONE_BISHOP: &str = "8/8/8/8/3B4/8/8/8";
    const LONE_QUEEN: &str = "8/8/8/8/3Q4/8/8/8";

    #[test]
    fn rook_moves_along_files_and_ranks() {
        for to in ["d1", "d8", "a4", "h4", "d5"] {
            assert_eq!(legal(LONE_ROOK, Color::White, "d4", to), Ok(()), "d4-{}", to);
        }
        for to in ["e5", "a1", "e6"] {
            assert!(matches!(
                legal(LONE_ROOK, Color::White, "d4", to),
                Err(IllegalMove::InvalidShape { .. })
            ));
        }
    }

    #[test]
    fn bishop_moves_diagonally() {
        for to in ["a1", "g7", "a7", "g1", "e5"] {
            assert_eq!(legal(LONE_BISHOP, Color::White, "d4", to), Ok(()), "d4-{}", to);
        }
        for to in ["d5", "h4", "e6"] {
            assert!(matches!(
                legal(LONE_BISHOP, Color::White, "d4", to),
                Err(IllegalMove::InvalidShape { .. })
            ));
        }
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        for to in ["d8", "a4", "h8", "a1", "g1"] {
            assert_eq!(legal(LONE_QUEEN, Color::White, "d4", to), Ok(()), "d4-{}", to);
        }
        assert!(matches!(
            legal(LONE_QUEEN, Color::White, "d4", "e6"),
            Err(IllegalMove::InvalidShape { .. })
        ));
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let board = "8/8/5p2/8/3Q4/8/3P4/8";
        assert!(matches!(
            legal(board, Color::White, "d4", "d1"),
            Err(IllegalMove::Blocked { square, .. }) if square == sq("d2")
        ));
        assert!(matches!(
            legal(board, Color::White, "d4", "g7"),
            Err(IllegalMove::Blocked { square, .. }) if square == sq("f6")
        ));
        // Capturing the blocker itself is fine.
        assert_eq!(legal(board, Color::White, "d4", "f6"), Ok(()));
    }

    #[test]
    fn knight_jumps() {
        let board = Board::initial_setup();
        for to in ["a3", "c3"] {
            assert!(is_legal(&board, Color::White, mv("b1", to)).is_ok());
        }
        assert!(matches!(
            is_legal(&board, Color::White, mv("b1", "b3")),
            Err(IllegalMove::InvalidShape { .. })
        ));

        let centre = "8/8/8/8/3N4/8/8/8";
        let targets = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"];
        for to in targets {
            assert_eq!(legal(centre, Color::White, "d4", to), Ok(()));
        }
        for to in ["d6", "f6", "e5", "d5"] {
            assert!(legal(centre, Color::White, "d4", to).is_err());
        }
    }

    #[test]
    fn king_steps_one_square() {
        let board = "8/8/8/8/3k4/8/8/8";
        for to in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            assert_eq!(legal(board, Color::Black, "d4", to), Ok(()));
        }
        for to in ["d6", "b4", "f2"] {
            assert!(matches!(
                legal(board, Color::Black, "d4", to),
                Err(IllegalMove::InvalidShape { .. })
            ));
        }
    }

    #[test]
    fn pawn_single_and_double_advance() {
        let board = Board::initial_setup();
        assert!(is_legal(&board, Color::White, mv("e2", "e3")).is_ok());
        assert!(is_legal(&board, Color::White, mv("e2", "e4")).is_ok());
        assert!(is_legal(&board, Color::Black, mv("d7", "d6")).is_ok());
        assert!(is_legal(&board, Color::Black, mv("d7", "d5")).is_ok());
        assert!(is_legal(&board, Color::White, mv("e2", "e5")).is_err());
    }

    #[test]
    fn pawns_never_move_backwards_or_sideways() {
        let board = "8/8/8/3p4/4P3/8/8/8";
        assert!(legal(board, Color::White, "e4", "e3").is_err());
        assert!(legal(board, Color::White, "e4", "f4").is_err());
        assert!(legal(board, Color::Black, "d5", "d6").is_err());
        assert!(legal(board, Color::Black, "d5", "c5").is_err());
    }

    #[test]
    fn double_advance_only_from_home_rank() {
        let board = "8/8/8/8/8/4P3/8/8";
        assert!(legal(board, Color::White, "e3", "e5").is_err());
        let board = "8/8/4p3/8/8/8/8/8";
        assert!(legal(board, Color::Black, "e6", "e4").is_err());
    }

    #[test]
    fn double_advance_through_a_piece_is_blocked() {
        let board = "8/8/8/8/8/4n3/4P3/8";
        assert_eq!(
            legal(board, Color::White, "e2", "e4"),
            Err(IllegalMove::Blocked {
                piece: Piece::new(Color::White, PieceKind::Pawn),
                blocker: Piece::new(Color::Black, PieceKind::Knight),
                square: sq("e3"),
            })
        );
    }

    #[test]
    fn pawn_advance_needs_an_empty_destination() {
        let board = "8/8/8/8/4n3/8/4P3/8";
        assert!(matches!(
            legal(board, Color::White, "e2", "e4"),
            Err(IllegalMove::InvalidShape { .. })
        ));
        let board = "8/8/8/8/8/4n3/4P3/8";
        assert!(matches!(
            legal(board, Color::White, "e2", "e3"),
            Err(IllegalMove::InvalidShape { .. })
        ));
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let board = "8/8/8/3p1p2/4P3/3p1p2/8/8";
        assert_eq!(legal(board, Color::White, "e4", "d5"), Ok(()));
        assert_eq!(legal(board, Color::White, "e4", "f5"), Ok(()));
        assert!(legal(board, Color::White, "e4", "d3").is_err());
        assert!(legal(board, Color::White, "e4", "f3").is_err());

        // Diagonal step onto an empty square is not a capture.
        let board = "8/8/8/8/4P3/8/8/8";
        assert!(legal(board, Color::White, "e4", "d5").is_err());
    }

    #[test]
    fn black_pawn_captures_diagonally_downwards() {
        let board = "8/8/8/3p4/2P1P3/8/8/8";
        assert_eq!(legal(board, Color::Black, "d5", "c4"), Ok(()));
        assert_eq!(legal(board, Color::Black, "d5", "e4"), Ok(()));

        let board = "8/8/2P1P3/3p4/8/8/8/8";
        assert!(matches!(
            legal(board, Color::Black, "d5", "c6"),
            Err(IllegalMove::InvalidShape { .. })
        ));
        assert!(matches!(
            legal(board, Color::Black, "d5", "e6"),
            Err(IllegalMove::InvalidShape { .. })
        ));

        let board = "8/8/8/3p4/8/8/8/8";
        assert!(legal(board, Color::Black, "d5", "c4").is_err());
    }

    #[test]
    fn black_double_advance_through_a_piece_is_blocked() {
        let board = "8/3p4/3N4/8/8/8/8/8";
        assert_eq!(
            legal(board, Color::Black, "d7", "d5"),
            Err(IllegalMove::Blocked {
                piece: Piece::new(Color::Black, PieceKind::Pawn),
                blocker: Piece::new(Color::White, PieceKind::Knight),
                square: sq("d6"),
            })
        );

        let board = "8/3p4/8/3N4/8/8/8/8";
        assert!(matches!(
            legal(board, Color::Black, "d7", "d5"),
            Err(IllegalMove::InvalidShape { .. })
        ));
    }
}
