use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, PieceSnapshot};

/// Knight offsets, counter-clockwise from east-north-east.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn generate_knight_moves(
    snapshot: &PieceSnapshot,
    board: &Board,
    _scope: GenerationScope,
    out: &mut Vec<MoveDescription>,
) {
    for (d_file, d_rank) in KNIGHT_OFFSETS {
        push_step(snapshot, board, d_file, d_rank, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::position::Position;

    fn sq(text: &str) -> Position {
        text.parse().unwrap()
    }

    fn knight_targets(board: &Board, at: Position) -> Vec<Position> {
        let snapshot = PieceSnapshot {
            piece: board.get(at).unwrap(),
            position: at,
        };
        let mut out = Vec::new();
        generate_knight_moves(&snapshot, board, GenerationScope::WithCastling, &mut out);
        let mut targets: Vec<Position> = out.into_iter().map(|m| m.to).collect();
        targets.sort();
        targets
    }

    #[test]
    fn knight_on_b1_alone() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Knight, Color::White), sq("B1"))
            .unwrap();
        let mut expected = vec![sq("A3"), sq("C3"), sq("D2")];
        expected.sort();
        assert_eq!(knight_targets(&board, sq("B1")), expected);
    }

    #[test]
    fn knight_in_centre_has_eight_targets() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Knight, Color::Black), sq("D4"))
            .unwrap();
        assert_eq!(knight_targets(&board, sq("D4")).len(), 8);
    }

    #[test]
    fn knight_jumps_but_never_onto_friends() {
        let board = Board::standard();
        let mut expected = vec![sq("F3"), sq("H3")];
        expected.sort();
        assert_eq!(knight_targets(&board, sq("G1")), expected);
    }
}
