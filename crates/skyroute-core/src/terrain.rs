//! The [`TerrainMap`] type: an elevation grid with no-fly zones and
//! optional start and goal positions.
//!
//! Mutators never panic on bad coordinates. They return `false` and leave the
//! map untouched, so construction loops can be written best-effort.

use crate::cost;
use crate::geom::{Point, Range};

/// A single terrain cell: either an elevation level or a no-fly zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Elevation(u32),
    Obstacle,
}

impl Cell {
    /// Whether this cell is a no-fly zone.
    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    /// The elevation level, or `None` for an obstacle.
    #[inline]
    pub const fn elevation(self) -> Option<u32> {
        match self {
            Cell::Elevation(e) => Some(e),
            Cell::Obstacle => None,
        }
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Cell::Elevation(1)
    }
}

/// A rectangular elevation map anchored at (0, 0).
///
/// Invariant: `start` and `goal`, when set, are in bounds, are not obstacles,
/// and differ from each other.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMap {
    cells: Vec<Cell>,
    bounds: Range,
    start: Option<Point>,
    goal: Option<Point>,
}

impl TerrainMap {
    /// Create a map with every cell at elevation 1, no obstacles, and no
    /// start or goal. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![Cell::default(); (w as usize) * (h as usize)],
            bounds: Range::sized(w, h),
            start: None,
            goal: None,
        }
    }

    /// The bounding range of the map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// The elevation at `p`, or `None` if out of bounds or an obstacle.
    pub fn elevation(&self, p: Point) -> Option<u32> {
        self.cell(p).and_then(Cell::elevation)
    }

    /// Set the elevation of the cell at `p`, replacing any obstacle there.
    ///
    /// Elevations start at 1. Returns `false`, leaving the cell unchanged, if
    /// `p` is out of bounds or `elevation` is 0.
    pub fn set_elevation(&mut self, p: Point, elevation: u32) -> bool {
        if elevation == 0 {
            return false;
        }
        let Some(i) = self.index(p) else {
            return false;
        };
        self.cells[i] = Cell::Elevation(elevation);
        true
    }

    /// Turn the cell at `p` into a no-fly zone.
    ///
    /// Returns `false` if `p` is out of bounds. A start or goal sitting on
    /// `p` is cleared.
    pub fn mark_obstacle(&mut self, p: Point) -> bool {
        let Some(i) = self.index(p) else {
            return false;
        };
        self.cells[i] = Cell::Obstacle;
        if self.start == Some(p) {
            log::debug!("obstacle at {p} clears the start position");
            self.start = None;
        }
        if self.goal == Some(p) {
            log::debug!("obstacle at {p} clears the goal position");
            self.goal = None;
        }
        true
    }

    /// Set the start position.
    ///
    /// Fails, leaving the previous start in place, if `p` is out of bounds,
    /// an obstacle, or the current goal.
    pub fn set_start(&mut self, p: Point) -> bool {
        if !self.is_passable(p) || self.goal == Some(p) {
            return false;
        }
        self.start = Some(p);
        true
    }

    /// Set the goal position.
    ///
    /// Fails, leaving the previous goal in place, if `p` is out of bounds,
    /// an obstacle, or the current start.
    pub fn set_goal(&mut self, p: Point) -> bool {
        if !self.is_passable(p) || self.start == Some(p) {
            return false;
        }
        self.goal = Some(p);
        true
    }

    /// Unset both start and goal.
    pub fn clear_endpoints(&mut self) {
        self.start = None;
        self.goal = None;
    }

    /// The start position, if set.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The goal position, if set.
    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Whether `p` is in bounds and not a no-fly zone.
    pub fn is_passable(&self, p: Point) -> bool {
        matches!(self.cell(p), Some(Cell::Elevation(_)))
    }

    /// Number of cells that are not obstacles.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_obstacle()).count()
    }

    /// Cost of flying from `from` to the adjacent `to`.
    ///
    /// Out-of-bounds endpoints count as obstacles.
    pub fn edge_cost(&self, from: Point, to: Point) -> f64 {
        match (self.cell(from), self.cell(to)) {
            (Some(a), Some(b)) => cost::edge_cost(a, b),
            _ => f64::INFINITY,
        }
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}
