use chess_arbiter::{
    apply_move_to_game, Board, ChessErrors, Color, GameState, GameStatus, MoveOutcome, MoveTypes,
    Piece, PieceKind, Position, RejectionReason,
};

fn sq(text: &str) -> Position {
    text.parse().expect("test square")
}

fn play(game: &mut GameState, from: &str, to: &str) -> MoveOutcome {
    game.apply_move(sq(from), sq(to), None)
        .expect("no precondition error expected")
}

fn play_all(game: &mut GameState, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        let outcome = play(game, from, to);
        assert!(outcome.is_accepted(), "{from}-{to}: {outcome:?}");
    }
}

fn game_from(pieces: &[(&str, PieceKind, Color)], side_to_move: Color) -> GameState {
    let mut board = Board::empty();
    for &(at, kind, color) in pieces {
        board.place(Piece::new(kind, color).moved(), sq(at)).unwrap();
    }
    GameState::from_board(board, side_to_move).unwrap()
}

#[test]
fn scholars_mate() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[
            ("E2", "E4"),
            ("E7", "E5"),
            ("F1", "C4"),
            ("B8", "C6"),
            ("D1", "H5"),
            ("G8", "F6"),
            ("H5", "F7"),
        ],
    );
    assert_eq!(game.status(), GameStatus::Checkmate);
    assert_eq!(game.side_to_move(), Color::Black);
    assert!(game.is_over());
    assert_eq!(
        game.apply_move(sq("E8"), sq("F7"), None),
        Err(ChessErrors::GameOver(GameStatus::Checkmate))
    );
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[("E2", "E4"), ("A7", "A6"), ("E4", "E5"), ("D7", "D5")],
    );
    assert!(game.legal_destinations(sq("E5")).unwrap().contains(&sq("D6")));

    let outcome = play(&mut game, "E5", "D6");
    assert_eq!(
        outcome,
        MoveOutcome::Accepted(chess_arbiter::MoveDescription::new(
            sq("E5"),
            sq("D6"),
            MoveTypes::EnPassant { victim: sq("D5") }
        ))
    );
    assert_eq!(game.board().get(sq("D5")), None);
    assert!(game
        .board()
        .get(sq("D6"))
        .is_some_and(|p| p.is(PieceKind::Pawn, Color::White)));
    assert_eq!(game.board().pieces_of(Color::Black).len(), 15);
}

#[test]
fn en_passant_window_closes_after_one_turn() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[
            ("E2", "E4"),
            ("A7", "A6"),
            ("E4", "E5"),
            ("D7", "D5"),
            ("A2", "A3"),
            ("H7", "H6"),
        ],
    );
    assert_eq!(
        play(&mut game, "E5", "D6").rejection(),
        Some(RejectionReason::IllegalDestination)
    );
}

#[test]
fn kingside_castling_moves_the_rook() {
    let mut game = GameState::new();
    play_all(
        &mut game,
        &[
            ("E2", "E4"),
            ("E7", "E5"),
            ("G1", "F3"),
            ("B8", "C6"),
            ("F1", "C4"),
            ("G8", "F6"),
            ("E1", "G1"),
        ],
    );
    let board = game.board();
    assert!(board
        .get(sq("G1"))
        .is_some_and(|p| p.is(PieceKind::King, Color::White)));
    assert!(board
        .get(sq("F1"))
        .is_some_and(|p| p.is(PieceKind::Rook, Color::White)));
    assert_eq!(board.get(sq("E1")), None);
    assert_eq!(board.get(sq("H1")), None);
    assert_eq!(board.pieces_of(Color::White).len(), 16);
    assert_eq!(board.piece_count(), 32);
}

#[test]
fn castling_through_an_attacked_square_is_refused() {
    let mut board = Board::empty();
    board
        .place(Piece::new(PieceKind::King, Color::White), sq("E1"))
        .unwrap();
    board
        .place(Piece::new(PieceKind::Rook, Color::White), sq("H1"))
        .unwrap();
    board
        .place(Piece::new(PieceKind::Rook, Color::Black).moved(), sq("F8"))
        .unwrap();
    board
        .place(Piece::new(PieceKind::King, Color::Black).moved(), sq("A8"))
        .unwrap();
    let mut game = GameState::from_board(board, Color::White).unwrap();
    let before = game.clone();
    assert_eq!(
        play(&mut game, "E1", "G1").rejection(),
        Some(RejectionReason::IllegalDestination)
    );
    assert_eq!(game, before);
}

#[test]
fn moving_out_of_turn_is_rejected() {
    let mut game = GameState::new();
    let outcome = play(&mut game, "E7", "E5");
    assert!(!outcome.is_accepted());
    assert_eq!(outcome.rejection(), Some(RejectionReason::NotYourTurn));
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn promotion_requires_a_choice() {
    let mut game = game_from(
        &[
            ("A7", PieceKind::Pawn, Color::White),
            ("E1", PieceKind::King, Color::White),
            ("H1", PieceKind::King, Color::Black),
        ],
        Color::White,
    );
    assert_eq!(game.is_promotion_move(sq("A7"), sq("A8")), Ok(true));

    let before = game.clone();
    assert_eq!(
        play(&mut game, "A7", "A8").rejection(),
        Some(RejectionReason::PromotionChoiceRequired)
    );
    assert_eq!(
        game.apply_move(sq("A7"), sq("A8"), Some(PieceKind::King))
            .unwrap()
            .rejection(),
        Some(RejectionReason::InvalidPromotionChoice(PieceKind::King))
    );
    assert_eq!(game, before);

    let outcome = game
        .apply_move(sq("A7"), sq("A8"), Some(PieceKind::Queen))
        .unwrap();
    assert!(outcome.is_accepted());
    assert!(game
        .board()
        .get(sq("A8"))
        .is_some_and(|p| p.is(PieceKind::Queen, Color::White)));
    // The new queen checks along the long diagonal.
    assert_eq!(game.in_check(), Ok(true));
    assert_eq!(game.status(), GameStatus::Active);
}

#[test]
fn queen_move_stalemates() {
    let mut game = game_from(
        &[
            ("H8", PieceKind::King, Color::Black),
            ("F7", PieceKind::King, Color::White),
            ("G5", PieceKind::Queen, Color::White),
        ],
        Color::White,
    );
    assert!(play(&mut game, "G5", "G6").is_accepted());
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert_eq!(game.in_check(), Ok(false));
}

#[test]
fn queen_move_mates() {
    let mut game = game_from(
        &[
            ("H8", PieceKind::King, Color::Black),
            ("F7", PieceKind::King, Color::White),
            ("G5", PieceKind::Queen, Color::White),
        ],
        Color::White,
    );
    assert!(play(&mut game, "G5", "G7").is_accepted());
    assert_eq!(game.status(), GameStatus::Checkmate);
}

#[test]
fn capturing_the_last_piece_draws() {
    let mut game = game_from(
        &[
            ("A1", PieceKind::King, Color::White),
            ("A2", PieceKind::Rook, Color::Black),
            ("H8", PieceKind::King, Color::Black),
        ],
        Color::White,
    );
    assert_eq!(game.status(), GameStatus::Active);
    assert_eq!(game.in_check(), Ok(true));
    assert!(play(&mut game, "A1", "A2").is_accepted());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.board().piece_count(), 2);
}

#[test]
fn functional_apply_keeps_the_original() {
    let game = GameState::new();
    let (next, outcome) = apply_move_to_game(&game, sq("D2"), sq("D4"), None).unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(game.board().get(sq("D4")), None);
    assert!(next.board().get(sq("D4")).is_some());

    let (same, outcome) = apply_move_to_game(&game, sq("D2"), sq("D5"), None).unwrap();
    assert_eq!(outcome.rejection(), Some(RejectionReason::IllegalDestination));
    assert_eq!(same, game);
}
