//! Flight cost between adjacent cells.
//!
//! Climbing is charged at [`ASCENT_RATE`] per elevation level gained, while
//! level flight and descent are charged at [`DESCENT_RATE`] per level lost.
//! Every step also pays [`BASE_STEP_COST`].

use crate::terrain::Cell;

/// Cost of a single step between two cells of equal elevation.
pub const BASE_STEP_COST: f64 = 1.0;

/// Extra cost per elevation level when the next cell is strictly higher.
pub const ASCENT_RATE: f64 = 1.5;

/// Extra cost per elevation level when the next cell is lower or level.
pub const DESCENT_RATE: f64 = 0.5;

/// Cost of moving from `current` to the adjacent `neighbor`.
///
/// Returns [`f64::INFINITY`] if either cell is an obstacle.
pub fn edge_cost(current: Cell, neighbor: Cell) -> f64 {
    let (Cell::Elevation(from), Cell::Elevation(to)) = (current, neighbor) else {
        return f64::INFINITY;
    };
    let diff = from.abs_diff(to) as f64;
    if to > from {
        BASE_STEP_COST + diff * ASCENT_RATE
    } else {
        BASE_STEP_COST + diff * DESCENT_RATE
    }
}
