//! Turn handling and the game state machine.
//!
//! [`Game`] owns the live board and the current [`Status`]. The human plays
//! X through [`Game::play`]; when that move leaves the game open, the engine
//! immediately answers with O's perfect reply. Invalid input (occupied cell,
//! out-of-range index, a move after the game has ended) is a no-op rather
//! than an error, matching what a click-driven frontend expects.

use std::fmt;

use crate::constants::CELLS;
use crate::minimax::engine_move;
use crate::state::{Mark, State, apply_move, board_full, empty_state, is_winner};

/// Phase of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    XWins,
    OWins,
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::XWins => write!(f, "X wins"),
            Status::OWins => write!(f, "O wins"),
            Status::Draw => write!(f, "draw"),
        }
    }
}

/// A live game: board state plus turn/terminal bookkeeping.
pub struct Game {
    state: State,
    status: Status,
    /// Cell of the engine's most recent reply, if the last `play` call
    /// triggered one.
    last_reply: Option<usize>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: State::new(),
            status: Status::InProgress,
            last_reply: None,
        }
    }

    /// Build a game around an existing board, deriving its status.
    pub fn from_state(state: State) -> Self {
        let status = if is_winner(&state, Mark::X) {
            Status::XWins
        } else if is_winner(&state, Mark::O) {
            Status::OWins
        } else if board_full(&state) {
            Status::Draw
        } else {
            Status::InProgress
        };
        Self {
            state,
            status,
            last_reply: None,
        }
    }

    /// The live board state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Current board contents, for frontends to render.
    pub fn cells(&self) -> &[Mark; CELLS] {
        &self.state.cells
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Cell of the engine's reply to the most recent human move, if any.
    pub fn last_reply(&self) -> Option<usize> {
        self.last_reply
    }

    /// Play the human's X at `cell`, then let the engine answer if the game
    /// is still open. Returns the status after both moves.
    ///
    /// Out-of-range cells, occupied cells, and moves after the game has
    /// ended leave the game unchanged.
    pub fn play(&mut self, cell: usize) -> Status {
        self.last_reply = None;
        if self.status != Status::InProgress {
            return self.status;
        }
        if apply_move(&mut self.state, cell, Mark::X).is_err() {
            return self.status;
        }

        if is_winner(&self.state, Mark::X) {
            self.status = Status::XWins;
        } else if board_full(&self.state) {
            self.status = Status::Draw;
        } else {
            self.last_reply = Some(engine_move(&mut self.state));
            if is_winner(&self.state, Mark::O) {
                self.status = Status::OWins;
            } else if board_full(&self.state) {
                self.status = Status::Draw;
            }
        }
        self.status
    }

    /// Start a new game: empty board, X to move. Valid from any state.
    pub fn reset(&mut self) {
        empty_state(&mut self.state);
        self.status = Status::InProgress;
        self.last_reply = None;
    }
}
