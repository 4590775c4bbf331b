//! Crate root module declarations for the chess rules engine.
//!
//! This file exposes the subsystems (board and game state, move descriptions,
//! move generation and legality, and terminal helpers) so the binary, tests
//! and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod board_probe;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_board;
    pub mod square_input;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{Color, GameStatus, Piece, PieceKind};
pub use game_state::game_state::GameState;
pub use game_state::position::Position;
pub use move_generation::legal_move_apply::{apply_move_to_game, MoveOutcome, RejectionReason};
pub use moves::move_descriptions::{MoveDescription, MoveTypes};
