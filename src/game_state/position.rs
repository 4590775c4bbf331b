//! Validated board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;

/// A square of the 8×8 board.
///
/// Stored as zero-based file and rank indices. A `Position` can only be built
/// through the checked constructors, so every value names a real square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    file: u8,
    rank: u8,
}

impl Position {
    /// Builds a position from a file letter (`A..=H`, either case) and a rank
    /// number (`1..=8`).
    pub fn new(file: char, rank: u8) -> Result<Self, ChessErrors> {
        let upper = file.to_ascii_uppercase();
        if !('A'..='H').contains(&upper) || !(1..=8).contains(&rank) {
            return Err(ChessErrors::InvalidPosition { file, rank });
        }
        Ok(Position {
            file: upper as u8 - b'A',
            rank: rank - 1,
        })
    }

    /// Builds a position from zero-based indices.
    pub fn from_file_rank(file: u8, rank: u8) -> Result<Self, ChessErrors> {
        if file > 7 || rank > 7 {
            return Err(ChessErrors::InvalidFileOrRank { file, rank });
        }
        Ok(Position { file, rank })
    }

    /// Every square, file by file (A1, A2, .., A8, B1, ..).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..8u8).flat_map(|file| (0..8u8).map(move |rank| Position { file, rank }))
    }

    #[inline]
    pub const fn file_index(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank_index(self) -> u8 {
        self.rank
    }

    /// File letter, `'A'..='H'`.
    #[inline]
    pub const fn file(self) -> char {
        (b'A' + self.file) as char
    }

    /// Rank number, `1..=8`.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank + 1
    }

    /// The square `d_file` files and `d_rank` ranks away.
    pub fn moved(self, d_file: i8, d_rank: i8) -> Result<Position, ChessErrors> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return Err(ChessErrors::TriedToMoveOutOfBounds {
                from: self,
                d_file,
                d_rank,
            });
        }
        Ok(Position {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    /// Parses `E2` or `e2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();
        let file = chars
            .next()
            .ok_or_else(|| ChessErrors::InvalidSquareString(s.to_string()))?;
        let rank: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| ChessErrors::InvalidSquareString(s.to_string()))?;
        Position::new(file, rank)
    }
}
