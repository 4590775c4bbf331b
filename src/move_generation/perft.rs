//! Move-path enumeration for validating the generators.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{execute_move, refresh_double_step_flags};
use crate::move_generation::legal_move_generator::{is_draw, legal_moves_for_color};

/// Number of legal move sequences of length `depth` from `game`.
///
/// A finished game has no continuations, at the root or deeper in the tree:
/// mate and stalemate yield no moves, and a bare-kings draw is cut off.
pub fn perft(game: &GameState, depth: u8) -> Result<u64, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }
    if game.is_over() {
        return Ok(0);
    }
    let mut board = game.board().clone();
    perft_recurse(&mut board, game.side_to_move(), depth)
}

fn perft_recurse(board: &mut Board, side: Color, depth: u8) -> Result<u64, ChessErrors> {
    if is_draw(board) {
        return Ok(0);
    }
    let moves = legal_moves_for_color(board, side)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for mv in moves {
        let mut child = board.clone();
        execute_move(&mut child, &mv, side)?;
        refresh_double_step_flags(&mut child, &mv);
        nodes += perft_recurse(&mut child, side.opposite(), depth - 1)?;
    }
    Ok(nodes)
}
