//! Board state representation and move execution.
//!
//! This module provides the core game model for tic-tac-toe:
//! - Board state as a flat array of nine [`Mark`]s
//! - Move application with occupancy and range checks
//! - Win and full-board detection
//! - Terminal scoring on the [`Score`] scale used by the search
//!
//! The search engine mutates cells directly during exploration (it only ever
//! touches empty cells by construction); everything else goes through
//! [`apply_move`].

use std::fmt;

use crate::constants::{CELLS, LINES, SIDE};

/// Contents of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

/// Outcome of a finished game, ordered from PlayerO's point of view:
/// higher is better for O, lower is better for X.
///
/// The discriminants match the original 0/1/2 utility scale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Score {
    XWins = 0,
    Draw = 1,
    OWins = 2,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::XWins => write!(f, "X wins"),
            Score::Draw => write!(f, "draw"),
            Score::OWins => write!(f, "O wins"),
        }
    }
}

/// Result of attempting to play a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Cell index is outside [0, 9)
    OutOfRange,
    /// Cell is not empty
    Occupied,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "Illegal move: cell out of range"),
            MoveError::Occupied => write!(f, "Illegal move: cell not empty"),
        }
    }
}

/// A tic-tac-toe board state: nine cells, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub cells: [Mark; CELLS],
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// The empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELLS],
        }
    }
}

/// Reset a state to the empty board.
pub fn empty_state(state: &mut State) {
    state.cells = [Mark::Empty; CELLS];
}

/// True iff no cell is empty.
pub fn board_full(state: &State) -> bool {
    state.cells.iter().all(|&c| c != Mark::Empty)
}

/// True iff any of the eight winning lines is filled with `mark`.
///
/// `Mark::Empty` never wins, even on an empty board.
pub fn is_winner(state: &State, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| state.cells[i] == mark))
}

/// Place `mark` at `idx`.
///
/// Rejects an out-of-range index or an occupied cell without touching the
/// state. On success exactly one cell changes.
pub fn apply_move(state: &mut State, idx: usize, mark: Mark) -> Result<(), MoveError> {
    if idx >= CELLS {
        return Err(MoveError::OutOfRange);
    }
    if state.cells[idx] != Mark::Empty {
        return Err(MoveError::Occupied);
    }
    state.cells[idx] = mark;
    Ok(())
}

/// True iff the game is over: a player has won or the board is full.
pub fn is_terminal(state: &State) -> bool {
    is_winner(state, Mark::X) || is_winner(state, Mark::O) || board_full(state)
}

/// Score a terminal state for PlayerO.
///
/// Winner checks take precedence over the full-board check, so X winning on
/// the ninth stone scores `XWins`, not `Draw`. Both players winning at once
/// cannot arise from legal alternating play and is not guarded against.
///
/// Precondition: the state is terminal. On a non-terminal state this returns
/// `Draw`, which the search never observes because it checks
/// [`is_terminal`] first.
pub fn terminal_value(state: &State) -> Score {
    if is_winner(state, Mark::X) {
        Score::XWins
    } else if is_winner(state, Mark::O) {
        Score::OWins
    } else {
        Score::Draw
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                let ch = match self.cells[row * SIDE + col] {
                    Mark::X => 'X',
                    Mark::O => 'O',
                    Mark::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
