//! Constants for board geometry and engine parameters.
//!
//! The board is fixed at 3x3 and stored as a flat array of nine cells,
//! indexed row by row:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length. The game is fixed at 3x3.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Demo Parameters
// =============================================================================

/// Default number of games for the random-opponent demo.
pub const DEMO_GAMES: usize = 20;
