//! Reversible simulated moves.
//!
//! A [`BoardProbe`] records the occupant of every square a candidate move
//! touches, plays the move on the board, and writes the recorded occupants
//! back when it is dropped. Restoration therefore happens on every exit path
//! (normal return, `?` propagation, unwinding), and one probe cannot leak into
//! the inspection of the next candidate.

use std::ops::Deref;

use arrayvec::ArrayVec;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::game_state::position::Position;
use crate::moves::move_descriptions::{MoveDescription, MoveTypes};

/// Most squares one move touches: king, king target, rook, rook target.
const MAX_TOUCHED_SQUARES: usize = 4;

pub struct BoardProbe<'a> {
    board: &'a mut Board,
    saved: ArrayVec<(Position, Option<Piece>), MAX_TOUCHED_SQUARES>,
}

impl<'a> BoardProbe<'a> {
    /// Plays `mv` on `board` until the returned probe is dropped.
    ///
    /// The move is played mechanically; promotion does not change the
    /// mover's kind, which cannot affect the safety of its own king.
    pub fn apply(board: &'a mut Board, mv: &MoveDescription) -> Result<Self, ChessErrors> {
        let mut saved = ArrayVec::new();
        saved.push((mv.from, board.get(mv.from)));
        saved.push((mv.to, board.get(mv.to)));
        match mv.move_type {
            MoveTypes::EnPassant { victim } => saved.push((victim, board.get(victim))),
            MoveTypes::Castling { rook_from, rook_to } => {
                saved.push((rook_from, board.get(rook_from)));
                saved.push((rook_to, board.get(rook_to)));
            }
            MoveTypes::Regular | MoveTypes::DoubleStep | MoveTypes::Promote(_) => {}
        }

        // Mutate only once the guard exists, so a failure part way restores.
        let mut probe = BoardProbe { board, saved };
        probe.board.relocate(mv.from, mv.to)?;
        match mv.move_type {
            MoveTypes::EnPassant { victim } => {
                probe.board.remove(victim);
            }
            MoveTypes::Castling { rook_from, rook_to } => {
                probe.board.relocate(rook_from, rook_to)?;
            }
            MoveTypes::Regular | MoveTypes::DoubleStep | MoveTypes::Promote(_) => {}
        }
        Ok(probe)
    }
}

impl Deref for BoardProbe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for BoardProbe<'_> {
    fn drop(&mut self) {
        for (position, occupant) in self.saved.iter().rev() {
            self.board.restore_square(*position, *occupant);
        }
    }
}
