//! Candidate moves as produced by the per-piece generators.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind};
use crate::game_state::position::Position;

/// A piece together with the square it stands on.
///
/// Generators receive this explicit copy rather than a reference into the
/// board, so nothing they hold can go stale while a move is being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSnapshot {
    pub piece: Piece,
    pub position: Position,
}

/// Special handling a move needs beyond relocating the mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTypes {
    /// A plain move or capture.
    Regular,
    /// A pawn's two-square advance.
    DoubleStep,
    /// En passant capture; `victim` is the square of the pawn being taken.
    EnPassant { victim: Position },
    /// Castling; the rook travels from `rook_from` to `rook_to`.
    Castling { rook_from: Position, rook_to: Position },
    /// Pawn promotion to the given kind.
    Promote(PieceKind),
}

/// One candidate half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescription {
    pub from: Position,
    pub to: Position,
    pub move_type: MoveTypes,
}

impl MoveDescription {
    pub const fn new(from: Position, to: Position, move_type: MoveTypes) -> Self {
        MoveDescription {
            from,
            to,
            move_type,
        }
    }

    pub const fn regular(from: Position, to: Position) -> Self {
        Self::new(from, to, MoveTypes::Regular)
    }

    /// The piece kind chosen, when this is a promotion.
    pub fn promotion_choice(&self) -> Option<PieceKind> {
        match self.move_type {
            MoveTypes::Promote(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self.move_type, MoveTypes::Promote(_))
    }
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.move_type {
            MoveTypes::Regular | MoveTypes::DoubleStep => write!(f, "{}-{}", self.from, self.to),
            MoveTypes::EnPassant { .. } => write!(f, "{}x{} e.p.", self.from, self.to),
            MoveTypes::Castling { rook_from, .. } => {
                let side = if rook_from.file_index() > self.from.file_index() {
                    "O-O"
                } else {
                    "O-O-O"
                };
                write!(f, "{}-{} ({side})", self.from, self.to)
            }
            MoveTypes::Promote(kind) => {
                write!(f, "{}-{}={}", self.from, self.to, kind.letter())
            }
        }
    }
}

/// Whether a king's rule includes castling candidates.
///
/// Attack detection generates without castling so that testing a castling
/// path never asks for the opponent's castling moves in turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationScope {
    WithCastling,
    WithoutCastling,
}

/// Pseudo-legal generation rule for one piece kind.
pub type MovementRule = fn(&PieceSnapshot, &Board, GenerationScope, &mut Vec<MoveDescription>);
