//! Tictac-Rust: a perfect-play tic-tac-toe engine.
//!
//! This is a Rust reimplementation of a tic-tac-toe AI originally written
//! in Python; the graphical frontend of the original is replaced by a text
//! shell.
//!
//! ## Usage
//!
//! - `tictac-rust` - Play an interactive game
//! - `tictac-rust play` - Play an interactive game
//! - `tictac-rust demo` - Run random-opponent demo games

use anyhow::Result;
use clap::{Parser, Subcommand};

use tictac_rust::constants::DEMO_GAMES;
use tictac_rust::game::{Game, Status};
use tictac_rust::playout::random_playout;
use tictac_rust::shell::Shell;

/// Tictac-Rust: a perfect-play tic-tac-toe engine
#[derive(Parser)]
#[command(name = "tictac-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play,
    /// Run random-opponent demo games
    Demo {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value_t = DEMO_GAMES)]
        games: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { games }) => run_demo(games),
        Some(Commands::Play) | None => {
            let mut shell = Shell::new();
            shell.run()?;
        }
    }

    Ok(())
}

fn run_demo(games: usize) {
    println!("Tictac-Rust: Exhaustive Minimax Tic-Tac-Toe Engine\n");

    // Demo 1: the engine's reply to a center opening
    println!("=== Engine Reply Demo ===");
    let mut game = Game::new();
    game.play(4);
    if let Some(reply) = game.last_reply() {
        println!("X opens at the center; the engine replies at cell {reply}:");
    }
    println!("{}", game.state());

    // Demo 2: random X against the engine
    println!("=== Random Playout Demo ===");
    println!("Playing {games} games of random X against the engine...");
    let (mut wins, mut draws, mut losses) = (0, 0, 0);
    for _ in 0..games {
        let mut game = Game::new();
        match random_playout(&mut game) {
            Status::OWins => wins += 1,
            Status::Draw => draws += 1,
            Status::XWins => losses += 1,
            Status::InProgress => {}
        }
    }
    println!("Engine wins: {wins}, draws: {draws}, losses: {losses}");
}
