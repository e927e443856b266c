//! Exhaustive minimax search for the computer player.
//!
//! Two mutually recursive functions walk the full game tree: [`max_move`]
//! chooses for PlayerO (higher [`Score`] is better), [`min_move`] for
//! PlayerX. Both operate on one shared board buffer with scoped mutation:
//! mark a cell, evaluate, and always unmark before moving to the next
//! candidate, so exploration is invisible to the caller. The only externally
//! visible effect is the single move applied by [`engine_move`].
//!
//! There is no pruning and no transposition table. The 3x3 game tree is
//! small enough to enumerate exhaustively (at most 9! move orderings, far
//! fewer in practice since terminal positions cut recursion short).

use crate::constants::CELLS;
use crate::state::{Mark, Score, State, is_terminal, terminal_value};

/// Best move and value for PlayerO in a state where it is O's turn.
///
/// Candidates are examined in ascending cell order and ties keep the first
/// candidate (strict greater-than comparison).
///
/// Panics if the board has no empty cell; callers must check terminal status
/// before invoking the search (the game state machine does).
pub fn max_move(state: &mut State) -> (usize, Score) {
    let mut best: Option<(usize, Score)> = None;

    for i in 0..CELLS {
        if state.cells[i] != Mark::Empty {
            continue;
        }
        state.cells[i] = Mark::O;
        let value = if is_terminal(state) {
            terminal_value(state)
        } else {
            min_move(state).1
        };
        state.cells[i] = Mark::Empty;

        match best {
            Some((_, v)) if value <= v => {}
            _ => best = Some((i, value)),
        }
    }

    best.expect("search invoked with no legal moves")
}

/// Best move and value for PlayerX in a state where it is X's turn.
///
/// Symmetric to [`max_move`]: tries X in each empty cell and keeps the
/// strictly smallest value, first candidate winning ties.
pub fn min_move(state: &mut State) -> (usize, Score) {
    let mut best: Option<(usize, Score)> = None;

    for i in 0..CELLS {
        if state.cells[i] != Mark::Empty {
            continue;
        }
        state.cells[i] = Mark::X;
        let value = if is_terminal(state) {
            terminal_value(state)
        } else {
            max_move(state).1
        };
        state.cells[i] = Mark::Empty;

        match best {
            Some((_, v)) if value >= v => {}
            _ => best = Some((i, value)),
        }
    }

    best.expect("search invoked with no legal moves")
}

/// Run the search and apply PlayerO's best reply to the live state.
///
/// Returns the cell that was played. The returned value of the search is
/// discarded; applying the move is the engine's only observable effect.
pub fn engine_move(state: &mut State) -> usize {
    let (cell, _) = max_move(state);
    state.cells[cell] = Mark::O;
    cell
}

/// Print each candidate cell for `mark` and its search value to stderr.
pub fn dump_candidates(state: &mut State, mark: Mark) {
    for i in 0..CELLS {
        if state.cells[i] != Mark::Empty {
            continue;
        }
        state.cells[i] = mark;
        let value = if is_terminal(state) {
            terminal_value(state)
        } else {
            match mark {
                Mark::O => min_move(state).1,
                _ => max_move(state).1,
            }
        };
        state.cells[i] = Mark::Empty;
        eprintln!("cell {i} value {value}");
    }
}
