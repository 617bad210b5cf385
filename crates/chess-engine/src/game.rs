//! Turn-based game management.
//!
//! The [`Game`] struct owns the board, the side to move, the outcome, and a
//! log of human-readable feedback. Every request goes through the same steps:
//! reject if the game is over, ask the rules engine, apply the move, detect
//! the outcome, and report.
//!
//! Kings are captured like any other piece; there is no check detection.
//! Taking the opposing king wins the game.

use crate::messages::{sentence, MessageLog};
use crate::rules::{self, IllegalMove, LegalMove};
use crate::{Board, EngineConfig};
use chess_core::{Color, Move, Piece, PieceKind, Square, SquareError};
use std::fmt;
use thiserror::Error;

/// The state of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The game continues.
    Ongoing,
    /// The given side captured the opposing king.
    Won(Color),
    /// The given side gave up. Nobody wins.
    Resigned(Color),
}

impl Outcome {
    /// Returns true once the game has finished. Terminal outcomes never change.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning side, if there is one.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Won(color) => Some(color),
            Outcome::Ongoing | Outcome::Resigned(_) => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "the game is in progress"),
            Outcome::Won(color) => write!(f, "{} wins", color),
            Outcome::Resigned(color) => write!(f, "{} resigned and nobody wins", color),
        }
    }
}

/// Error type for game operations.
///
/// Every variant is recoverable: the game state is left exactly as it was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("the game is over: {0}")]
    GameOver(Outcome),
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error(transparent)]
    OutOfBounds(#[from] SquareError),
}

/// An executed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The piece taken off the board, if any.
    pub captured: Option<Piece>,
    /// The outcome after the move.
    pub outcome: Outcome,
}

/// A chess game between two players sharing one board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    outcome: Outcome,
    messages: MessageLog,
    selection: Option<Square>,
    config: EngineConfig,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Text logged by [`help`](Self::help).
    pub const HELP: &'static str =
        "Enter one of the following commands: quit, help, pass, select, move.";

    /// Creates a new game from the starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a new game from the starting position using `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self::from_board_with_config(Board::initial_setup(), Color::White, config)
    }

    /// Creates a game from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self::from_board_with_config(board, side_to_move, EngineConfig::default())
    }

    pub fn from_board_with_config(
        board: Board,
        side_to_move: Color,
        config: EngineConfig,
    ) -> Self {
        Game {
            board,
            side_to_move,
            outcome: Outcome::Ongoing,
            messages: MessageLog::with_capacity(config.message_capacity),
            selection: None,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the first square of a two-click move, if one is pending.
    pub fn pending_selection(&self) -> Option<Square> {
        self.selection
    }

    /// Checks a move against the rules without playing it.
    pub fn check_move(&self, from: Square, to: Square) -> Result<LegalMove, GameError> {
        self.ensure_ongoing()?;
        Ok(rules::is_legal(&self.board, self.side_to_move, Move::new(from, to))?)
    }

    /// Attempts to move the piece on `from` to `to`.
    ///
    /// Illegal requests are logged and returned as errors without consuming
    /// the turn. A legal move is applied, the capture (if any) is recorded,
    /// and either the game ends on a king capture or the turn passes.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, GameError> {
        let mv = Move::new(from, to);
        let side = self.side_to_move;
        tracing::debug!(%side, ?mv, "move attempt");

        if let Err(e) = self.ensure_ongoing() {
            self.report_game_over();
            return Err(e);
        }

        let legal = match rules::is_legal(&self.board, side, mv) {
            Ok(legal) => legal,
            Err(reason) => {
                tracing::debug!(%side, ?mv, %reason, "illegal move");
                self.messages.push(sentence(reason.to_string()));
                if let IllegalMove::Blocked { piece, .. } = reason {
                    let invalid = IllegalMove::InvalidShape { piece };
                    self.messages.push(sentence(invalid.to_string()));
                }
                self.messages.push("Illegal move attempted. No move was executed.");
                return Err(reason.into());
            }
        };

        if self.config.verbose_rules {
            self.messages.push(format!(
                "Rules for {} were applied to {}.",
                legal.piece.kind, legal.piece
            ));
        }

        self.board.set(to, Some(legal.piece));
        self.board.set(from, None);
        self.messages.push(format!("Move {} was executed by {}.", mv, side));
        tracing::info!(%side, ?mv, captured = ?legal.captured, "move executed");

        if let Some(captured) = legal.captured {
            self.messages.push(format!("{} captured {}.", legal.piece, captured));
            if captured.kind == PieceKind::King {
                self.finish(Outcome::Won(captured.color.opposite()));
            }
        }

        if !self.is_terminal() {
            self.side_to_move = side.opposite();
        }

        Ok(MoveRecord {
            mv,
            piece: legal.piece,
            captured: legal.captured,
            outcome: self.outcome,
        })
    }

    /// Registers one click of a two-click move.
    ///
    /// The coordinate is bounds-checked first. The first valid selection is
    /// remembered; the second submits the pair to
    /// [`attempt_move`](Self::attempt_move) and clears the selection whatever
    /// the verdict. Returns the executed move, or `None` after a first click.
    pub fn select(&mut self, file: i32, rank: i32) -> Result<Option<MoveRecord>, GameError> {
        if let Err(e) = self.ensure_ongoing() {
            self.report_game_over();
            return Err(e);
        }

        let sq = match Square::try_from_signed(file, rank) {
            Ok(sq) => sq,
            Err(e) => {
                self.messages.push(sentence(e.to_string()));
                return Err(e.into());
            }
        };

        self.messages.push(format!("{} selected {}.", self.side_to_move, sq));

        match self.selection.take() {
            None => {
                self.selection = Some(sq);
                Ok(None)
            }
            Some(from) => self.attempt_move(from, sq).map(Some),
        }
    }

    /// Ends the game with no winner: the side to move gives up.
    pub fn resign(&mut self) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        let side = self.side_to_move;
        self.messages.push(format!("{} gave up and flipped the board.", side));
        self.messages.push("Nobody wins!");
        self.selection = None;
        self.finish(Outcome::Resigned(side));
        Ok(())
    }

    /// Passes the turn to the opponent without touching the board.
    pub fn forfeit_turn(&mut self) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        let side = self.side_to_move;
        self.messages.push(format!("{} forfeit their turn.", side));
        tracing::debug!(%side, "turn forfeited");
        self.selection = None;
        self.side_to_move = side.opposite();
        Ok(())
    }

    /// Logs the list of commands a shell offers. Changes nothing else.
    pub fn help(&mut self) {
        self.messages.push(Self::HELP);
    }

    /// Removes and returns every pending message, oldest first.
    pub fn read_and_clear_messages(&mut self) -> Vec<String> {
        self.messages.drain()
    }

    /// Returns up to `n` of the latest messages without removing them.
    pub fn recent_messages(&self, n: usize) -> Vec<&str> {
        self.messages.recent(n)
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.is_terminal() {
            Err(GameError::GameOver(self.outcome))
        } else {
            Ok(())
        }
    }

    fn report_game_over(&mut self) {
        tracing::warn!(outcome = %self.outcome, "move attempted after game over");
        self.messages.push(format!("The game is over! {}.", sentence_case(self.outcome)));
    }

    fn finish(&mut self, outcome: Outcome) {
        tracing::info!(%outcome, "game over");
        self.outcome = outcome;
        if let Outcome::Won(color) = outcome {
            self.messages.push(format!("{} wins!", color));
        }
    }
}

fn sentence_case(outcome: Outcome) -> String {
    let text = sentence(outcome.to_string());
    text.trim_end_matches('.').to_string()
}
