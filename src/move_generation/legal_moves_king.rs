use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    CASTLING_KING_SHIFT, KINGSIDE_ROOK_FILE, KING_START_FILE, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, MoveTypes, PieceSnapshot};

/// Adjacent squares, counter-clockwise from east.
pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn generate_king_moves(
    snapshot: &PieceSnapshot,
    board: &Board,
    scope: GenerationScope,
    out: &mut Vec<MoveDescription>,
) {
    for (d_file, d_rank) in KING_STEPS {
        push_step(snapshot, board, d_file, d_rank, out);
    }
    if scope == GenerationScope::WithCastling {
        generate_castling_moves(snapshot, board, out);
    }
}

fn generate_castling_moves(snapshot: &PieceSnapshot, board: &Board, out: &mut Vec<MoveDescription>) {
    let PieceSnapshot {
        piece: king,
        position: king_from,
    } = *snapshot;
    if king.has_moved
        || king_from.rank_index() != king.color.back_rank()
        || king_from.file_index() != KING_START_FILE
    {
        return;
    }
    // Cannot castle out of check.
    let enemy = king.color.opposite();
    if is_square_attacked(board, king_from, enemy) {
        return;
    }
    for rook_file in [KINGSIDE_ROOK_FILE, QUEENSIDE_ROOK_FILE] {
        if let Some(castle) = castling_move(board, snapshot, rook_file) {
            out.push(castle);
        }
    }
}

/// Castling towards the rook on `rook_file`, if every condition holds.
fn castling_move(board: &Board, snapshot: &PieceSnapshot, rook_file: u8) -> Option<MoveDescription> {
    let PieceSnapshot {
        piece: king,
        position: king_from,
    } = *snapshot;
    let rook_from = Position::from_file_rank(rook_file, king_from.rank_index()).ok()?;
    let rook = board.get(rook_from)?;
    if !rook.is(PieceKind::Rook, king.color) || rook.has_moved {
        return None;
    }

    let step: i8 = if rook_file > king_from.file_index() { 1 } else { -1 };
    let king_to = king_from.moved(step * CASTLING_KING_SHIFT, 0).ok()?;
    let rook_to = king_from.moved(step, 0).ok()?;

    // The rook must sit strictly beyond the king's destination.
    let rook_distance = (rook_file as i8 - king_from.file_index() as i8).abs();
    if rook_distance <= CASTLING_KING_SHIFT {
        return None;
    }

    // Squares strictly between king and rook are empty.
    for distance in 1..rook_distance {
        let between = king_from.moved(step * distance, 0).ok()?;
        if board.get(between).is_some() {
            return None;
        }
    }

    // Transit and destination squares are not attacked.
    let enemy = king.color.opposite();
    if is_square_attacked(board, rook_to, enemy) || is_square_attacked(board, king_to, enemy) {
        return None;
    }

    Some(MoveDescription::new(
        king_from,
        king_to,
        MoveTypes::Castling { rook_from, rook_to },
    ))
}
