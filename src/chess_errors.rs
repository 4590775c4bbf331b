//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the board, the move
//! generators and the game-state machine. Every variant describes caller
//! misuse or a corrupted position (acting on a finished game, placing a piece
//! on an occupied square, looking up a king that does not exist). A move that
//! is merely illegal is never reported here: it comes back as a
//! [`RejectionReason`](crate::move_generation::legal_move_apply::RejectionReason)
//! inside an `Ok` value so callers can re-prompt without unwinding.

use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::position::Position;

/// Unified error type for the rules engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A file outside `A..=H` or a rank outside `1..=8` was supplied.
    #[error("invalid chess position {file}{rank}")]
    InvalidPosition { file: char, rank: u8 },

    /// Zero-based file or rank indices outside `0..=7`.
    #[error("invalid file or rank indices ({file}, {rank})")]
    InvalidFileOrRank { file: u8, rank: u8 },

    /// Text that does not have the shape of a square such as `E2`.
    #[error("cannot read a square from {0:?}")]
    InvalidSquareString(String),

    /// Text that does not name a promotable piece.
    #[error("unknown piece token {0:?}")]
    InvalidPieceToken(String),

    /// Offsetting `from` by `(d_file, d_rank)` would leave the board.
    #[error("moving from {from} by ({d_file}, {d_rank}) leaves the board")]
    TriedToMoveOutOfBounds { from: Position, d_file: i8, d_rank: i8 },

    /// Tried to place a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Position),

    /// Tried to move or inspect a piece on an empty square.
    #[error("no piece at {0}")]
    EmptySquare(Position),

    /// The board holds no king of this color.
    #[error("no {0} king found on the board")]
    KingNotFound(Color),

    /// The board holds more than one king of this color.
    #[error("{0} has more than one king")]
    TooManyKings(Color),

    /// A move was requested after the game reached a terminal status.
    #[error("the game has ended ({0})")]
    GameOver(GameStatus),
}

/// Result alias used by the engine.
pub type ChessResult<T> = Result<T, ChessErrors>;
