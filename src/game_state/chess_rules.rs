//! Canonical chess-rule constants.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout of the standard starting position, file A to file H.
pub const STARTING_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Zero-based rank index of each color's pawns in the starting position.
pub const STARTING_PAWN_RANKS: [u8; 2] = [1, 6];

/// Zero-based file a king starts on and must still occupy to castle.
pub const KING_START_FILE: u8 = 4;

/// Zero-based file of the rook a king castles with on the queen side.
pub const QUEENSIDE_ROOK_FILE: u8 = 0;

/// Zero-based file of the rook a king castles with on the king side.
pub const KINGSIDE_ROOK_FILE: u8 = 7;

/// Number of files the king travels when castling.
pub const CASTLING_KING_SHIFT: i8 = 2;
