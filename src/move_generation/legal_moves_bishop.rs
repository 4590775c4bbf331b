use crate::game_state::board::Board;
use crate::move_generation::legal_move_shared::{push_slides, BISHOP_DIRECTIONS};
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, PieceSnapshot};

pub fn generate_bishop_moves(
    snapshot: &PieceSnapshot,
    board: &Board,
    _scope: GenerationScope,
    out: &mut Vec<MoveDescription>,
) {
    push_slides(snapshot, board, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::position::Position;

    fn sq(text: &str) -> Position {
        text.parse().unwrap()
    }

    #[test]
    fn bishop_moves_diagonally_only() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Bishop, Color::Black), sq("D4"))
            .unwrap();
        let snapshot = PieceSnapshot {
            piece: board.get(sq("D4")).unwrap(),
            position: sq("D4"),
        };
        let mut out = Vec::new();
        generate_bishop_moves(&snapshot, &board, GenerationScope::WithCastling, &mut out);
        assert_eq!(out.len(), 13);
        for mv in &out {
            let d_file = mv.to.file_index() as i8 - mv.from.file_index() as i8;
            let d_rank = mv.to.rank_index() as i8 - mv.from.rank_index() as i8;
            assert_eq!(d_file.abs(), d_rank.abs(), "{mv} is not diagonal");
        }
    }

    #[test]
    fn bishop_is_blocked_by_pieces() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::Bishop, Color::White), sq("C1"))
            .unwrap();
        board
            .place(Piece::new(PieceKind::Pawn, Color::White), sq("D2"))
            .unwrap();
        board
            .place(Piece::new(PieceKind::Pawn, Color::Black), sq("B2"))
            .unwrap();
        let snapshot = PieceSnapshot {
            piece: board.get(sq("C1")).unwrap(),
            position: sq("C1"),
        };
        let mut out = Vec::new();
        generate_bishop_moves(&snapshot, &board, GenerationScope::WithCastling, &mut out);
        assert_eq!(out, vec![MoveDescription::regular(sq("C1"), sq("B2"))]);
    }
}
