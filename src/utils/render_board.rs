//! Terminal-oriented board renderer.
//!
//! Draws rank 8 at the top with file and rank labels on every edge, either
//! with Unicode chess glyphs or with plain letters for terminals that cannot
//! show them.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::position::Position;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Character set used for pieces and empty squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphSet {
    #[default]
    Unicode,
    /// Upper case White, lower case Black, `.` for empty.
    Ascii,
}

/// Render the board to a multi-line string.
pub fn render_board(board: &Board, glyphs: GlyphSet) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (0..8u8).rev() {
        let label = char::from(b'1' + rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            let piece = Position::from_file_rank(file, rank)
                .ok()
                .and_then(|position| board.get(position));
            out.push(square_glyph(piece, glyphs));

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

fn square_glyph(piece: Option<Piece>, glyphs: GlyphSet) -> char {
    match (piece, glyphs) {
        (None, GlyphSet::Unicode) => '·',
        (None, GlyphSet::Ascii) => '.',
        (Some(piece), GlyphSet::Unicode) => piece_to_unicode(piece.color, piece.kind),
        (Some(piece), GlyphSet::Ascii) => match piece.color {
            Color::White => piece.kind.letter(),
            Color::Black => piece.kind.letter().to_ascii_lowercase(),
        },
    }
}

fn piece_to_unicode(color: Color, kind: PieceKind) -> char {
    match (color, kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
