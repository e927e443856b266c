//! Random-opponent game simulation.
//!
//! Plays X uniformly at random against the engine until the game ends.
//! Used by the demo subcommand and by tests: a perfect PlayerO never loses,
//! so every playout must end in `OWins` or `Draw`.

use crate::game::{Game, Status};
use crate::state::Mark;

/// Play one game of random X against the engine, starting from the game's
/// current position, and return the final status.
///
/// Each `play` call answers with O's reply, so the set of empty cells
/// shrinks by two per iteration until a terminal status is reached.
pub fn random_playout(game: &mut Game) -> Status {
    while game.status() == Status::InProgress {
        let empties: Vec<usize> = game
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == Mark::Empty)
            .map(|(i, _)| i)
            .collect();
        // An in-progress game always has at least one empty cell.
        let pick = empties[fastrand::usize(..empties.len())];
        game.play(pick);
    }
    game.status()
}
