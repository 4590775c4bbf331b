//! Game-state machine.
//!
//! `GameState` owns the board, whose turn it is, and the lifecycle status.
//! It is an ordinary value: hosts hold it, pass it to the move functions and
//! clone it freely. There is no ambient global game.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{self, MoveOutcome};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{self, evaluate_status, is_promotion_destination};
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting layout, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::standard(),
            side_to_move: Color::White,
            status: GameStatus::Active,
        }
    }

    /// A game continuing from an arbitrary `board`.
    ///
    /// Each side must have exactly one king. The status is evaluated for
    /// `side_to_move` straight away, so a position that is already mate is
    /// reported as such.
    pub fn from_board(board: Board, side_to_move: Color) -> Result<Self, ChessErrors> {
        for color in Color::ALL {
            match board.king_count(color) {
                0 => return Err(ChessErrors::KingNotFound(color)),
                1 => {}
                _ => return Err(ChessErrors::TooManyKings(color)),
            }
        }
        let mut scratch = board.clone();
        let status = evaluate_status(&mut scratch, side_to_move)?;
        Ok(GameState {
            board,
            side_to_move,
            status,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Legal moves of the piece on `from`, whichever side it belongs to.
    pub fn legal_moves(&self, from: Position) -> Result<Vec<MoveDescription>, ChessErrors> {
        let mut scratch = self.board.clone();
        legal_move_generator::legal_moves(&mut scratch, from)
    }

    /// Distinct destination squares of the piece on `from`.
    pub fn legal_destinations(&self, from: Position) -> Result<Vec<Position>, ChessErrors> {
        let mut destinations: Vec<Position> =
            self.legal_moves(from)?.into_iter().map(|mv| mv.to).collect();
        destinations.sort();
        destinations.dedup();
        Ok(destinations)
    }

    /// Whether `from` → `to` is a legal move that needs a promotion choice.
    pub fn is_promotion_move(&self, from: Position, to: Position) -> Result<bool, ChessErrors> {
        Ok(is_promotion_destination(&self.legal_moves(from)?, to))
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> Result<bool, ChessErrors> {
        is_king_in_check(&self.board, self.side_to_move)
    }

    /// See [`legal_move_apply::apply_move`].
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, ChessErrors> {
        legal_move_apply::apply_move(self, from, to, promotion)
    }
}
