//! Interactive text shell for playing against the engine.
//!
//! A small line-oriented command loop over stdin/stdout, in the spirit of
//! the text protocols board-game engines speak to their frontends. Each line
//! is one command; responses to failed commands are prefixed with `?`.
//!
//! ## Supported Commands
//!
//! - `show` - Print the board
//! - `play <cell>` - Play X at a cell (0-8); the engine answers with O
//! - `hint` - Report the best move for the human's X
//! - `status` - Report whether the game is over and who won
//! - `new` - Start a new game
//! - `help` - List all supported commands
//! - `quit` - Exit the shell

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::game::{Game, Status};
use crate::minimax::{dump_candidates, min_move};
use crate::state::Mark;

/// The list of known shell commands.
const KNOWN_COMMANDS: &[&str] = &["help", "hint", "new", "play", "quit", "show", "status"];

/// Shell state: the live game being played.
pub struct Shell {
    game: Game,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    /// Run the command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        writeln!(
            stdout,
            "tictac-rust: you are X, cells are numbered 0-8. Type help for commands.\n"
        )?;

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);
            let prefix = if success { "" } else { "? " };
            writeln!(stdout, "{prefix}{message}\n")?;
            stdout.flush()?;

            if success && command == "quit" {
                break;
            }
        }

        Ok(())
    }

    /// Execute a shell command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "help" => (true, KNOWN_COMMANDS.join("\n")),

            "show" => (
                true,
                format!("{}{}", self.game.state(), self.game.status()),
            ),

            "status" => (true, self.game.status().to_string()),

            "new" => {
                self.game.reset();
                (true, "new game, X to move".to_string())
            }

            "quit" => (true, "bye".to_string()),

            "play" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let cell = match args[0].parse::<usize>() {
                    Ok(c) => c,
                    Err(_) => return (false, "invalid cell".to_string()),
                };
                if self.game.status() != Status::InProgress {
                    return (false, "game over, type new to restart".to_string());
                }
                if self.game.cells().get(cell).copied() != Some(Mark::Empty) {
                    return (false, "illegal move".to_string());
                }

                self.game.play(cell);
                let mut out = self.game.state().to_string();
                if let Some(reply) = self.game.last_reply() {
                    out.push_str(&format!("engine plays {reply}, "));
                }
                out.push_str(&self.game.status().to_string());
                (true, out)
            }

            "hint" => {
                if self.game.status() != Status::InProgress {
                    return (false, "game over".to_string());
                }
                // It is always X's turn between play commands; advise X.
                // Search a scratch copy so the live board stays untouched.
                let mut probe = self.game.state().clone();
                dump_candidates(&mut probe, Mark::X);
                let (cell, value) = min_move(&mut probe);
                (true, format!("your best move is {cell} ({value})"))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        let mut shell = Shell::new();
        let (success, response) = shell.execute("help", &[]);
        assert!(success);
        for cmd in KNOWN_COMMANDS {
            assert!(response.contains(cmd), "help should list {cmd}");
        }
    }

    #[test]
    fn test_unknown_command() {
        let mut shell = Shell::new();
        let (success, response) = shell.execute("frobnicate", &[]);
        assert!(!success);
        assert!(response.contains("unknown command"));
    }

    #[test]
    fn test_play_and_new() {
        let mut shell = Shell::new();

        let (success, response) = shell.execute("play", &["4"]);
        assert!(success);
        assert!(response.contains("engine plays"));

        // The same cell is now occupied
        let (success, response) = shell.execute("play", &["4"]);
        assert!(!success);
        assert_eq!(response, "illegal move");

        let (success, _) = shell.execute("new", &[]);
        assert!(success);
        assert_eq!(shell.game.status(), Status::InProgress);
        assert!(shell.game.cells().iter().all(|&m| m == Mark::Empty));
    }

    #[test]
    fn test_play_rejects_bad_arguments() {
        let mut shell = Shell::new();

        let (success, response) = shell.execute("play", &[]);
        assert!(!success);
        assert_eq!(response, "missing argument");

        let (success, response) = shell.execute("play", &["banana"]);
        assert!(!success);
        assert_eq!(response, "invalid cell");

        let (success, response) = shell.execute("play", &["9"]);
        assert!(!success);
        assert_eq!(response, "illegal move");
    }

    #[test]
    fn test_hint_on_fresh_game() {
        let mut shell = Shell::new();
        let (success, response) = shell.execute("hint", &[]);
        assert!(success);
        // On the empty board every reply draws; the first cell wins the tie.
        assert!(response.contains("0"), "unexpected hint: {response}");
    }
}
