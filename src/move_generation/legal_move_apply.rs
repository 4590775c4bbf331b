//! Validating and playing a half-move on a [`GameState`].
//!
//! A request is checked in order: game still running, a piece on the origin,
//! the right side moving, a pseudo-legal destination, king safety, then the
//! promotion choice. The move is executed on a copy of the board and the new
//! status is computed there; the game is only updated once everything has
//! succeeded, so a precondition error never leaves a half-applied move.

use std::fmt;

use log::{debug, info, trace};

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::{evaluate_status, find_move, leaves_king_in_check};
use crate::move_generation::move_generator::pseudo_legal_moves;
use crate::moves::move_descriptions::{GenerationScope, MoveDescription, MoveTypes, PieceSnapshot};

/// Why a well-formed move request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    NoPieceAtSource,
    NotYourTurn,
    IllegalDestination,
    LeavesKingInCheck,
    PromotionChoiceRequired,
    InvalidPromotionChoice(PieceKind),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoPieceAtSource => write!(f, "there is no piece on that square"),
            RejectionReason::NotYourTurn => write!(f, "that piece belongs to the other side"),
            RejectionReason::IllegalDestination => write!(f, "that piece cannot move there"),
            RejectionReason::LeavesKingInCheck => {
                write!(f, "that move would leave your king in check")
            }
            RejectionReason::PromotionChoiceRequired => {
                write!(f, "choose a piece to promote to (Q, R, B or N)")
            }
            RejectionReason::InvalidPromotionChoice(kind) => {
                write!(f, "a pawn cannot promote to a {kind}")
            }
        }
    }
}

/// Result of a move request that did not hit a precondition error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(MoveDescription),
    Rejected(RejectionReason),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

fn reject(from: Position, to: Position, reason: RejectionReason) -> Result<MoveOutcome, ChessErrors> {
    trace!("rejected {from}-{to}: {reason}");
    Ok(MoveOutcome::Rejected(reason))
}

/// Validates and plays `from` → `to` for the side to move.
///
/// A rejected request leaves `game` untouched. `promotion` is only consulted
/// when the move lands a pawn on the far rank.
pub fn apply_move(
    game: &mut GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Result<MoveOutcome, ChessErrors> {
    if game.status.is_terminal() {
        return Err(ChessErrors::GameOver(game.status));
    }

    let Some(piece) = game.board.get(from) else {
        return reject(from, to, RejectionReason::NoPieceAtSource);
    };
    let mover = game.side_to_move;
    if piece.color != mover {
        return reject(from, to, RejectionReason::NotYourTurn);
    }

    let snapshot = PieceSnapshot {
        piece,
        position: from,
    };
    let reaching: Vec<MoveDescription> =
        pseudo_legal_moves(&snapshot, &game.board, GenerationScope::WithCastling)
            .into_iter()
            .filter(|mv| mv.to == to)
            .collect();
    let Some(&first) = reaching.first() else {
        return reject(from, to, RejectionReason::IllegalDestination);
    };

    let mut board = game.board.clone();
    // Promotion candidates share their geometry, so one probe covers them all.
    if leaves_king_in_check(&mut board, &first, mover)? {
        return reject(from, to, RejectionReason::LeavesKingInCheck);
    }

    let mv = if first.is_promotion() {
        match promotion {
            None => return reject(from, to, RejectionReason::PromotionChoiceRequired),
            Some(kind) => match find_move(&reaching, to, Some(kind)) {
                Some(mv) => mv,
                None => return reject(from, to, RejectionReason::InvalidPromotionChoice(kind)),
            },
        }
    } else {
        first
    };

    let captured = execute_move(&mut board, &mv, mover)?;
    refresh_double_step_flags(&mut board, &mv);

    let next_side = mover.opposite();
    let status = evaluate_status(&mut board, next_side)?;

    game.board = board;
    game.side_to_move = next_side;
    game.status = status;

    match captured {
        Some(victim) => debug!("{mover} played {mv}, capturing {}", victim.kind),
        None => debug!("{mover} played {mv}"),
    }
    if status.is_terminal() {
        info!("game over: {status} with {next_side} to move");
    }
    Ok(MoveOutcome::Accepted(mv))
}

/// Functional form of [`apply_move`]: plays the move on a copy of `game`.
pub fn apply_move_to_game(
    game: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Result<(GameState, MoveOutcome), ChessErrors> {
    let mut next = game.clone();
    let outcome = apply_move(&mut next, from, to, promotion)?;
    Ok((next, outcome))
}

/// Plays `mv` on `board`, returning the captured piece if any.
pub(crate) fn execute_move(
    board: &mut Board,
    mv: &MoveDescription,
    mover: Color,
) -> Result<Option<Piece>, ChessErrors> {
    let mut captured = board.relocate(mv.from, mv.to)?;
    match mv.move_type {
        MoveTypes::EnPassant { victim } => {
            captured = board.remove(victim);
        }
        MoveTypes::Castling { rook_from, rook_to } => {
            board.relocate(rook_from, rook_to)?;
            if let Some(rook) = board.edit(rook_to) {
                rook.has_moved = true;
            }
        }
        MoveTypes::Promote(kind) => {
            board.replace(mv.to, Piece::new(kind, mover));
        }
        MoveTypes::Regular | MoveTypes::DoubleStep => {}
    }
    if let Some(moved) = board.edit(mv.to) {
        moved.has_moved = true;
    }
    Ok(captured)
}

/// Flags the pawn that just double-stepped and clears every other pawn.
pub(crate) fn refresh_double_step_flags(board: &mut Board, mv: &MoveDescription) {
    let double_step = mv.move_type == MoveTypes::DoubleStep;
    for position in Position::all() {
        if let Some(piece) = board.edit(position) {
            if piece.kind == PieceKind::Pawn {
                piece.just_moved_two = double_step && position == mv.to;
            }
        }
    }
}
