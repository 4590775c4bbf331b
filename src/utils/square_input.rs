//! Parsing of user-typed squares and promotion choices.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;

/// Message shown for any input that cannot be understood.
pub const INVALID_INPUT: &str = "Invalid input, please try again.";

/// Reads a square such as `E2` or ` e2 `.
pub fn parse_square(text: &str) -> ChessResult<Position> {
    text.parse()
}

/// Reads a promotion choice: a letter `Q`/`R`/`B`/`N` or the piece name, in
/// any case.
pub fn parse_promotion_choice(text: &str) -> ChessResult<PieceKind> {
    let token = text.trim().to_ascii_lowercase();
    let kind = match token.as_str() {
        "q" | "queen" => PieceKind::Queen,
        "r" | "rook" => PieceKind::Rook,
        "b" | "bishop" => PieceKind::Bishop,
        "n" | "knight" => PieceKind::Knight,
        _ => return Err(ChessErrors::InvalidPieceToken(text.trim().to_string())),
    };
    Ok(kind)
}

/// Whether the text asks to leave the game.
pub fn is_quit(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("q")
}

/// User-facing form of a parse failure.
pub fn input_error_message(error: &ChessErrors) -> String {
    match error {
        ChessErrors::InvalidSquareString(_)
        | ChessErrors::InvalidPosition { .. }
        | ChessErrors::InvalidPieceToken(_) => INVALID_INPUT.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_in_either_case() {
        assert_eq!(parse_square("e2"), parse_square(" E2 "));
        assert_eq!(parse_square("h8").map(|p| (p.file(), p.rank())), Ok(('H', 8)));
        assert!(parse_square("i1").is_err());
        assert!(parse_square("e").is_err());
        assert!(parse_square("e22").is_err());
    }

    #[test]
    fn promotion_tokens() {
        assert_eq!(parse_promotion_choice("q"), Ok(PieceKind::Queen));
        assert_eq!(parse_promotion_choice("N"), Ok(PieceKind::Knight));
        assert_eq!(parse_promotion_choice(" Rook "), Ok(PieceKind::Rook));
        assert_eq!(parse_promotion_choice("bishop"), Ok(PieceKind::Bishop));
        assert_eq!(
            parse_promotion_choice("K"),
            Err(ChessErrors::InvalidPieceToken("K".to_string()))
        );
    }

    #[test]
    fn quit_and_messages() {
        assert!(is_quit("Q"));
        assert!(is_quit(" q\n"));
        assert!(!is_quit("QA"));
        let error = parse_square("z9").unwrap_err();
        assert_eq!(input_error_message(&error), INVALID_INPUT);
    }
}
