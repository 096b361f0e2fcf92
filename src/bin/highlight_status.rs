use std::env;
use std::process::ExitCode;

use chess_rules::board::{Board, Color, Coordinate};
use chess_rules::playout::play_random;

fn parse_drop(text: &str) -> Option<(Coordinate, Coordinate)> {
    let from = text.get(..2)?.parse().ok()?;
    let to = text.get(2..)?.parse().ok()?;
    Some((from, to))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: highlight_status <e2e4> <e7e5> ... | --random <plies> [seed]");
        return ExitCode::FAILURE;
    }

    let mut board = Board::new();
    if args[0] == "--random" {
        let plies = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
        let seed = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);
        let played = play_random(&mut board, plies, seed);
        println!("played: {played}");
    } else {
        for text in &args {
            let Some((from, to)) = parse_drop(text) else {
                eprintln!("cannot parse move '{text}'");
                return ExitCode::FAILURE;
            };
            let Some(id) = board.piece_at(from).map(|p| p.id()) else {
                eprintln!("no piece on {from}");
                return ExitCode::FAILURE;
            };
            if let Err(err) = board.try_move(id, to) {
                eprintln!("{text}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    print!("{board}");
    println!("side_to_move: {}", board.side_to_move());
    for color in Color::BOTH {
        if let Some(king) = board.king(color) {
            match king.threatener() {
                Some(id) => println!("{color}_check: true (threatener {id})"),
                None => println!("{color}_check: false"),
            }
        }
    }
    match board.outcome() {
        Some(outcome) => println!("checkmate: true ({} wins)", outcome.winner()),
        None => println!("checkmate: false"),
    }

    let side = board.side_to_move();
    for piece in board.pieces_of(side) {
        let highlights = board.on_drag_start(piece.id());
        if highlights.is_empty() {
            continue;
        }
        let squares: Vec<String> = highlights.iter().map(ToString::to_string).collect();
        println!("{} {}: {}", piece.label(), piece.position(), squares.join(" "));
    }
    ExitCode::SUCCESS
}
