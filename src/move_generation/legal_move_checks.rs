//! Attack detection and check tests.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_moves_pawn::PAWN_CAPTURE_FILES;
use crate::move_generation::move_generator::movement_rule;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, PieceSnapshot};

/// Whether the piece in `snapshot` reaches `square`.
///
/// Pieces are expanded with castling-free generation. Pawns reach their two
/// capture diagonals whether or not anything stands there; their pushes never
/// attack. `reach` is scratch space reused across calls.
fn piece_reaches(
    board: &Board,
    snapshot: &PieceSnapshot,
    square: Position,
    reach: &mut Vec<MoveDescription>,
) -> bool {
    let PieceSnapshot { piece, position } = *snapshot;
    if piece.kind == PieceKind::Pawn {
        let direction = piece.color.pawn_direction();
        return PAWN_CAPTURE_FILES
            .into_iter()
            .any(|d_file| position.moved(d_file, direction) == Ok(square));
    }
    reach.clear();
    movement_rule(piece.kind)(snapshot, board, GenerationScope::WithoutCastling, reach);
    reach.iter().any(|mv| mv.to == square)
}

/// Whether any piece of `attacker_color` reaches `square`.
pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    let mut reach = Vec::with_capacity(32);
    board
        .pieces_of(attacker_color)
        .into_iter()
        .any(|(position, piece)| {
            piece_reaches(board, &PieceSnapshot { piece, position }, square, &mut reach)
        })
}

/// Every piece of `attacker_color` that reaches `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
) -> Vec<(Position, PieceKind)> {
    let mut reach = Vec::with_capacity(32);
    board
        .pieces_of(attacker_color)
        .into_iter()
        .filter(|&(position, piece)| {
            piece_reaches(board, &PieceSnapshot { piece, position }, square, &mut reach)
        })
        .map(|(position, piece)| (position, piece.kind))
        .collect()
}

/// Whether the king of `color` is attacked by the other side.
pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king = board.king_square(color)?;
    Ok(is_square_attacked(board, king, color.opposite()))
}
