use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, MoveTypes, PieceSnapshot};

/// File offsets of a pawn's two capture diagonals.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];

pub fn generate_pawn_moves(
    snapshot: &PieceSnapshot,
    board: &Board,
    _scope: GenerationScope,
    out: &mut Vec<MoveDescription>,
) {
    let PieceSnapshot {
        piece,
        position: from,
    } = *snapshot;
    let direction = piece.color.pawn_direction();

    // Pushes
    if let Ok(single) = from.moved(0, direction) {
        if board.get(single).is_none() {
            push_pawn_move(piece.color, from, single, MoveTypes::Regular, out);
            if !piece.has_moved {
                if let Ok(double) = from.moved(0, 2 * direction) {
                    if board.get(double).is_none() {
                        push_pawn_move(piece.color, from, double, MoveTypes::DoubleStep, out);
                    }
                }
            }
        }
    }

    // Captures
    for d_file in PAWN_CAPTURE_FILES {
        let Ok(target) = from.moved(d_file, direction) else {
            continue;
        };
        if board
            .get(target)
            .is_some_and(|victim| victim.color != piece.color)
        {
            push_pawn_move(piece.color, from, target, MoveTypes::Regular, out);
        }
    }

    // En passant
    if from.rank_index() != piece.color.en_passant_rank() {
        return;
    }
    for d_file in PAWN_CAPTURE_FILES {
        let Ok(beside) = from.moved(d_file, 0) else {
            continue;
        };
        let Some(neighbour) = board.get(beside) else {
            continue;
        };
        if neighbour.kind != PieceKind::Pawn
            || neighbour.color == piece.color
            || !neighbour.just_moved_two
        {
            continue;
        }
        if let Ok(target) = from.moved(d_file, direction) {
            if board.get(target).is_none() {
                out.push(MoveDescription::new(
                    from,
                    target,
                    MoveTypes::EnPassant { victim: beside },
                ));
            }
        }
    }
}

/// Pushes a pawn move, expanding it into one candidate per promotable kind
/// when it lands on the far rank.
fn push_pawn_move(
    color: Color,
    from: Position,
    to: Position,
    move_type: MoveTypes,
    out: &mut Vec<MoveDescription>,
) {
    if to.rank_index() == color.promotion_rank() {
        for kind in PieceKind::PROMOTION_CHOICES {
            out.push(MoveDescription::new(from, to, MoveTypes::Promote(kind)));
        }
    } else {
        out.push(MoveDescription::new(from, to, move_type));
    }
}
