// Two-player terminal chess

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chess_arbiter::chess_errors::ChessResult;
use chess_arbiter::game_state::chess_types::{GameStatus, PieceKind};
use chess_arbiter::game_state::game_state::GameState;
use chess_arbiter::game_state::position::Position;
use chess_arbiter::move_generation::legal_move_apply::MoveOutcome;
use chess_arbiter::move_generation::legal_move_checks::attackers_to_square;
use chess_arbiter::utils::render_board::{render_board, GlyphSet};
use chess_arbiter::utils::square_input::{
    input_error_message, is_quit, parse_promotion_choice, parse_square,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Draw pieces with ASCII letters instead of Unicode glyphs
    #[arg(long)]
    ascii: bool,

    /// Log every finished game
    #[arg(short, long)]
    verbose: bool,

    /// Log every accepted move
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug {
        "debug"
    } else if args.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    })
    .target(env_logger::Target::Stderr)
    .init();

    let glyphs = if args.ascii {
        GlyphSet::Ascii
    } else {
        GlyphSet::Unicode
    };

    if let Err(e) = run(glyphs) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

/// What the player typed at a prompt.
enum Reply<T> {
    Value(T),
    Quit,
}

/// Prompts until `parse` accepts a line. End of input always counts as
/// quitting; a typed `Q` only when `quit_allowed`.
fn prompt<T>(
    input: &mut impl BufRead,
    label: &str,
    quit_allowed: bool,
    parse: impl Fn(&str) -> ChessResult<T>,
) -> Result<Reply<T>> {
    let mut line = String::new();
    loop {
        print!("{label}: ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 || (quit_allowed && is_quit(&line)) {
            return Ok(Reply::Quit);
        }
        match parse(&line) {
            Ok(value) => return Ok(Reply::Value(value)),
            Err(e) => println!("{}", input_error_message(&e)),
        }
    }
}

fn run(glyphs: GlyphSet) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut game = GameState::new();

    println!("Enter squares such as E2, or Q to quit.");
    while !game.is_over() {
        println!();
        println!("{}", render_board(game.board(), glyphs));
        let side = game.side_to_move();
        if game.in_check()? {
            let king = game.board().king_square(side)?;
            let checkers: Vec<String> = attackers_to_square(game.board(), king, side.opposite())
                .into_iter()
                .map(|(position, kind)| format!("{kind} on {position}"))
                .collect();
            println!("{side} is in check from {}.", checkers.join(", "));
        }
        println!("{side} to move.");

        let Reply::Value(from) = prompt(&mut input, "From", true, parse_square)? else {
            return Ok(());
        };
        let Reply::Value(to) = prompt(&mut input, "To", true, parse_square)? else {
            return Ok(());
        };
        let promotion = match ask_promotion(&mut input, &game, from, to)? {
            Reply::Value(choice) => choice,
            Reply::Quit => return Ok(()),
        };

        match game.apply_move(from, to, promotion)? {
            MoveOutcome::Accepted(mv) => println!("{side} played {mv}."),
            MoveOutcome::Rejected(reason) => println!("Move refused: {reason}."),
        }
    }

    println!();
    println!("{}", render_board(game.board(), glyphs));
    match game.status() {
        GameStatus::Checkmate => println!(
            "Checkmate. {} wins.",
            game.side_to_move().opposite()
        ),
        GameStatus::Stalemate => println!("Stalemate."),
        GameStatus::Draw => println!("Draw: only the kings remain."),
        GameStatus::Active => {}
    }
    Ok(())
}

fn ask_promotion(
    input: &mut impl BufRead,
    game: &GameState,
    from: Position,
    to: Position,
) -> Result<Reply<Option<PieceKind>>> {
    // Everything else, an empty origin included, is left to apply_move.
    let own_piece = game
        .board()
        .get(from)
        .is_some_and(|piece| piece.color == game.side_to_move());
    if !own_piece || !game.is_promotion_move(from, to)? {
        return Ok(Reply::Value(None));
    }
    Ok(
        match prompt(input, "Promote to (Q, R, B, N)", false, parse_promotion_choice)? {
            Reply::Value(kind) => Reply::Value(Some(kind)),
            Reply::Quit => Reply::Quit,
        },
    )
}
