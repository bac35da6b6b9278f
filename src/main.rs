//! # Grid Arena
//!
//! Interactive terminal front end for the game-state engine. Two players
//! share the keyboard: enter a cell index (tic-tac-toe) or a column index
//! (Connect Four) to move, jump to any past position to time-travel, and
//! export the finished game as JSON.
//!
//! ## Usage
//! Run with `cargo run --release -- --game connect4`.

use clap::Parser;
use colored::Colorize;
use engine::{GameSession, GameVariant, HistoryEntry, Player, Status};
use std::fs::File;
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Game to play: "tictactoe" (or "ttt") or "connect4" (or "c4")
    #[clap(short, long, default_value = "tictactoe")]
    game: String,

    /// Show the move list newest-first
    #[clap(long, action = clap::ArgAction::SetTrue)]
    reversed: bool,
}

/// Serialized form of a finished (or in-progress) game.
#[derive(serde::Serialize)]
struct GameRecord<'a> {
    variant: GameVariant,
    cursor: usize,
    entries: &'a [HistoryEntry],
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let variant: GameVariant = match args.game.parse() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let mut session = GameSession::new(variant);
    println!("Playing {}. Type 'help' for commands.", variant);
    render(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut parts = line.split_whitespace();
        match parts.next().unwrap() {
            "quit" | "q" | "exit" => break,
            "help" | "h" => print_help(variant),
            "new" => {
                session = GameSession::new(variant);
                log::info!("started a new {} game", variant);
                render(&session);
            }
            "list" | "l" => print_move_list(&session, args.reversed),
            "jump" | "j" => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(index) => match session.time_travel(index) {
                    Ok(()) => {
                        log::info!("jumped to history entry {}", index);
                        render(&session);
                    }
                    Err(e) => println!("{}", e.to_string().yellow()),
                },
                None => println!("{}", "usage: jump <entry number>".yellow()),
            },
            "save" => match parts.next() {
                Some(path) => match save_record(&session, path) {
                    Ok(()) => println!("saved to {}", path),
                    Err(e) => println!("{}", format!("save failed: {}", e).yellow()),
                },
                None => println!("{}", "usage: save <file>".yellow()),
            },
            token => match token.parse::<usize>() {
                Ok(input) => {
                    let player = session.current_player();
                    match session.make_move(input) {
                        Ok(()) => {
                            log::info!("{} played {}", player, input);
                            render(&session);
                        }
                        Err(e) => println!("{}", e.to_string().yellow()),
                    }
                }
                Err(_) => println!("{}", format!("unknown command: {}", token).yellow()),
            },
        }
    }

    Ok(())
}

fn print_help(variant: GameVariant) {
    let move_hint = match variant {
        GameVariant::TicTacToe => "<0-8>      claim a cell (row-major: 0 is top-left)",
        GameVariant::ConnectFour => "<0-6>      drop a piece into a column",
    };
    println!("  {}", move_hint);
    println!("  jump <n>   time-travel to history entry n (0 = empty board)");
    println!("  list       show the move list");
    println!("  save <f>   export the game record as JSON");
    println!("  new        start over");
    println!("  quit       leave");
}

/// Prints the board with pieces colored per player and the winning run
/// highlighted.
fn render(session: &GameSession) {
    let board = session.board();
    let status = session.status();
    let winning: &[usize] = match &status {
        Status::Won { winning_cells, .. } => winning_cells,
        _ => &[],
    };

    println!();
    if session.variant() == GameVariant::ConnectFour {
        for c in 0..board.cols() {
            print!("{} ", c.to_string().dimmed());
        }
        println!();
    }
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            let idx = board.index(r, c);
            let symbol = match board.cell(idx) {
                Some(Player::One) => "X".red().bold(),
                Some(Player::Two) => "O".yellow().bold(),
                None => ".".normal(),
            };
            if winning.contains(&idx) {
                print!("{} ", symbol.on_green());
            } else {
                print!("{} ", symbol);
            }
        }
        println!();
    }
    println!("[{}] {}", session.cursor(), status);
}

/// Prints the move list in ascending or reversed order, marking the cursor.
/// Ordering is purely presentational; the engine only exposes the entries.
fn print_move_list(session: &GameSession, reversed: bool) {
    let rows: Vec<(usize, &HistoryEntry)> = if reversed {
        session.entries().iter().enumerate().rev().collect()
    } else {
        session.entries().iter().enumerate().collect()
    };
    for (index, entry) in rows {
        let marker = if index == session.cursor() { "*" } else { " " };
        let describe = match (entry.position(), HistoryEntry::mover(index)) {
            (Some(pos), Some(player)) => format!("{} -> {}", player, pos),
            _ => "start".to_string(),
        };
        println!("{} {:>3}: {}", marker, index, describe);
    }
}

fn save_record(session: &GameSession, path: &str) -> io::Result<()> {
    let record = GameRecord {
        variant: session.variant(),
        cursor: session.cursor(),
        entries: session.entries(),
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &record)?;
    Ok(())
}
