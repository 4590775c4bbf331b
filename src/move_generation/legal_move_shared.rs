//! Helpers shared by the per-piece generation rules.
//!
//! All direction tables are written `(d_file, d_rank)`.

use crate::game_state::board::Board;
use crate::moves::move_descriptions::{MoveDescription, PieceSnapshot};

/// Orthogonal directions.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal directions.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Farthest a sliding piece can travel on an 8×8 board.
pub const MAX_SLIDE_DISTANCE: i8 = 7;

/// Adds the single square at `(d_file, d_rank)` unless it is off the board or
/// holds a friendly piece. Used by the knight and king.
pub fn push_step(
    snapshot: &PieceSnapshot,
    board: &Board,
    d_file: i8,
    d_rank: i8,
    out: &mut Vec<MoveDescription>,
) {
    let Ok(target) = snapshot.position.moved(d_file, d_rank) else {
        return;
    };
    match board.get(target) {
        Some(occupant) if occupant.color == snapshot.piece.color => {}
        _ => out.push(MoveDescription::regular(snapshot.position, target)),
    }
}

/// Walks each direction outward, stopping at the edge, before a friendly
/// piece, or on (and including) an enemy piece.
pub fn push_slides(
    snapshot: &PieceSnapshot,
    board: &Board,
    directions: &[(i8, i8)],
    out: &mut Vec<MoveDescription>,
) {
    for &(d_file, d_rank) in directions {
        for distance in 1..=MAX_SLIDE_DISTANCE {
            let Ok(target) = snapshot.position.moved(d_file * distance, d_rank * distance) else {
                break;
            };
            match board.get(target) {
                None => out.push(MoveDescription::regular(snapshot.position, target)),
                Some(occupant) => {
                    if occupant.color != snapshot.piece.color {
                        out.push(MoveDescription::regular(snapshot.position, target));
                    }
                    break;
                }
            }
        }
    }
}
