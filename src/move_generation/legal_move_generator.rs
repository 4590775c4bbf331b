//! Legal move generation and terminal-status detection.
//!
//! Pseudo-legal candidates are played inside a [`BoardProbe`], the mover's
//! king is tested, and the probe restores the board before the next
//! candidate is tried.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::board_probe::BoardProbe;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, PieceSnapshot};

/// Whether playing `mv` would leave the king of `color` attacked.
pub fn leaves_king_in_check(
    board: &mut Board,
    mv: &MoveDescription,
    color: Color,
) -> Result<bool, ChessErrors> {
    let probe = BoardProbe::apply(board, mv)?;
    is_king_in_check(&probe, color)
}

/// Legal moves of the piece on `from`.
pub fn legal_moves(board: &mut Board, from: Position) -> Result<Vec<MoveDescription>, ChessErrors> {
    let piece = board.get(from).ok_or(ChessErrors::EmptySquare(from))?;
    let snapshot = PieceSnapshot {
        piece,
        position: from,
    };
    let candidates = pseudo_legal_moves(&snapshot, board, GenerationScope::WithCastling);
    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        if !leaves_king_in_check(board, &mv, piece.color)? {
            legal.push(mv);
        }
    }
    Ok(legal)
}

/// Legal moves of every piece of `color`.
pub fn legal_moves_for_color(
    board: &mut Board,
    color: Color,
) -> Result<Vec<MoveDescription>, ChessErrors> {
    let mut all = Vec::with_capacity(64);
    for (position, _) in board.pieces_of(color) {
        all.extend(legal_moves(board, position)?);
    }
    Ok(all)
}

/// Whether `color` has at least one legal move. Stops at the first one.
pub fn has_legal_move(board: &mut Board, color: Color) -> Result<bool, ChessErrors> {
    for (position, piece) in board.pieces_of(color) {
        let snapshot = PieceSnapshot { piece, position };
        for mv in pseudo_legal_moves(&snapshot, board, GenerationScope::WithCastling) {
            if !leaves_king_in_check(board, &mv, color)? {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

pub fn is_checkmate(board: &mut Board, color: Color) -> Result<bool, ChessErrors> {
    Ok(is_king_in_check(board, color)? && !has_legal_move(board, color)?)
}

pub fn is_stalemate(board: &mut Board, color: Color) -> Result<bool, ChessErrors> {
    Ok(!is_king_in_check(board, color)? && !has_legal_move(board, color)?)
}

/// Bare kings. No other insufficient-material case is recognised.
pub fn is_draw(board: &Board) -> bool {
    board.piece_count() == 2 && Color::ALL.into_iter().all(|color| board.king_count(color) == 1)
}

/// Status of the game with `color` to move: checkmate, then stalemate, then
/// draw, otherwise active.
pub fn evaluate_status(board: &mut Board, color: Color) -> Result<GameStatus, ChessErrors> {
    let in_check = is_king_in_check(board, color)?;
    if !has_legal_move(board, color)? {
        return Ok(if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        });
    }
    if is_draw(board) {
        return Ok(GameStatus::Draw);
    }
    Ok(GameStatus::Active)
}

/// Whether a move in `moves` landing on `to` is a promotion candidate.
pub fn is_promotion_destination(moves: &[MoveDescription], to: Position) -> bool {
    moves.iter().any(|mv| mv.to == to && mv.is_promotion())
}

/// The move in `moves` landing on `to`. Among promotion candidates the one
/// matching `promotion` is picked; on other moves `promotion` is ignored.
pub fn find_move(
    moves: &[MoveDescription],
    to: Position,
    promotion: Option<PieceKind>,
) -> Option<MoveDescription> {
    moves
        .iter()
        .find(|mv| mv.to == to && (!mv.is_promotion() || mv.promotion_choice() == promotion))
        .copied()
}
