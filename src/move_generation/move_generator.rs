//! Kind-indexed dispatch over the per-piece generation rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, MovementRule, PieceSnapshot};

/// One rule per piece kind, indexed by [`PieceKind::index`].
pub const MOVEMENT_RULES: [MovementRule; 6] = [
    generate_pawn_moves,
    generate_knight_moves,
    generate_bishop_moves,
    generate_rook_moves,
    generate_queen_moves,
    generate_king_moves,
];

#[inline]
pub fn movement_rule(kind: PieceKind) -> MovementRule {
    MOVEMENT_RULES[kind.index()]
}

/// Pseudo-legal candidates for the piece in `snapshot`.
pub fn pseudo_legal_moves(
    snapshot: &PieceSnapshot,
    board: &Board,
    scope: GenerationScope,
) -> Vec<MoveDescription> {
    let mut out = Vec::with_capacity(32);
    movement_rule(snapshot.piece.kind)(snapshot, board, scope, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position::Position;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves_per_side() {
        let board = Board::standard();
        for color in crate::game_state::chess_types::Color::ALL {
            let total: usize = board
                .pieces_of(color)
                .into_iter()
                .map(|(position, piece)| {
                    pseudo_legal_moves(
                        &PieceSnapshot { piece, position },
                        &board,
                        GenerationScope::WithCastling,
                    )
                    .len()
                })
                .sum();
            assert_eq!(total, 20, "{color}");
        }
    }

    #[test]
    fn table_dispatches_on_kind() {
        let board = Board::empty();
        let d4: Position = "D4".parse().unwrap();
        let counts: Vec<usize> = PieceKind::ALL
            .into_iter()
            .map(|kind| {
                let piece = crate::game_state::chess_types::Piece::new(
                    kind,
                    crate::game_state::chess_types::Color::White,
                )
                .moved();
                pseudo_legal_moves(
                    &PieceSnapshot {
                        piece,
                        position: d4,
                    },
                    &board,
                    GenerationScope::WithCastling,
                )
                .len()
            })
            .collect();
        assert_eq!(counts, vec![1, 8, 13, 14, 27, 8]);
    }
}
