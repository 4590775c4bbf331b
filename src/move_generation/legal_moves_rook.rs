use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::{push_slides, ROOK_DIRECTIONS};
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, PieceSnapshot};

pub fn generate_rook_moves(
    snapshot: &PieceSnapshot,
    board: &Board,
    _scope: GenerationScope,
    out: &mut Vec<MoveDescription>,
) {
    push_slides(snapshot, board, &ROOK_DIRECTIONS, out);
}
