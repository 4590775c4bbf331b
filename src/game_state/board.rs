//! The 64-square board register.
//!
//! `Board` is the single owner of "which piece sits where". It is a purely
//! mechanical container: it places, removes and relocates pieces but never
//! asks whether a change is legal. Every rule decision is made by the move
//! generators and the game-state machine before a mutating call is issued.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{STARTING_BACK_RANK, STARTING_PAWN_RANKS};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::utils::render_board::{render_board, GlyphSet};

/// Total mapping from the 64 squares to an optional piece, indexed
/// `[file][rank]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    buffer: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with every square empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for position in Position::all() {
            let file = position.file_index() as usize;
            let piece = match position.rank_index() {
                0 => Some(Piece::new(STARTING_BACK_RANK[file], Color::White)),
                7 => Some(Piece::new(STARTING_BACK_RANK[file], Color::Black)),
                r if r == STARTING_PAWN_RANKS[Color::White.index()] => {
                    Some(Piece::new(PieceKind::Pawn, Color::White))
                }
                r if r == STARTING_PAWN_RANKS[Color::Black.index()] => {
                    Some(Piece::new(PieceKind::Pawn, Color::Black))
                }
                _ => None,
            };
            *board.at(position) = piece;
        }
        board
    }

    #[inline]
    fn at(&mut self, x: Position) -> &mut Option<Piece> {
        &mut self.buffer[x.file_index() as usize][x.rank_index() as usize]
    }

    #[inline]
    fn view(&self, x: Position) -> &Option<Piece> {
        &self.buffer[x.file_index() as usize][x.rank_index() as usize]
    }

    /// The piece on `position`, if any.
    #[inline]
    pub fn get(&self, position: Position) -> Option<Piece> {
        *self.view(position)
    }

    /// Mutable access to the piece on `position`, used to update its flags.
    pub fn edit(&mut self, position: Position) -> Option<&mut Piece> {
        self.at(position).as_mut()
    }

    /// Puts `piece` on an empty square.
    pub fn place(&mut self, piece: Piece, position: Position) -> Result<(), ChessErrors> {
        let square = self.at(position);
        if square.is_some() {
            return Err(ChessErrors::SquareOccupied(position));
        }
        *square = Some(piece);
        Ok(())
    }

    /// Moves the occupant of `from` to `to`, returning whatever `to` held.
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<Option<Piece>, ChessErrors> {
        let moving = self.at(from).take().ok_or(ChessErrors::EmptySquare(from))?;
        Ok(self.at(to).replace(moving))
    }

    /// Empties `position`, returning its former occupant.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.at(position).take()
    }

    /// Overwrites `position` with `piece` regardless of its occupant.
    pub fn replace(&mut self, position: Position, piece: Piece) -> Option<Piece> {
        self.at(position).replace(piece)
    }

    /// Writes a previously saved occupant back, used by move probes.
    pub(crate) fn restore_square(&mut self, position: Position, occupant: Option<Piece>) {
        *self.at(position) = occupant;
    }

    /// Every occupied square, file by file.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|position| self.get(position).map(|piece| (position, piece)))
    }

    /// Every piece of `color` with its square.
    pub fn pieces_of(&self, color: Color) -> Vec<(Position, Piece)> {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .collect()
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Square of the king of `color`.
    pub fn king_square(&self, color: Color) -> Result<Position, ChessErrors> {
        self.pieces()
            .find(|(_, piece)| piece.is(PieceKind::King, color))
            .map(|(position, _)| position)
            .ok_or(ChessErrors::KingNotFound(color))
    }

    /// Number of kings of `color` on the board.
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.is(PieceKind::King, color))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self, GlyphSet::Ascii))
    }
}
