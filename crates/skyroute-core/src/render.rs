//! Plain-text rendering of a [`TerrainMap`] with an optional overlay.

use std::collections::HashSet;
use std::fmt;

use crate::geom::Point;
use crate::terrain::{Cell, TerrainMap};

pub const START_GLYPH: char = 'S';
pub const GOAL_GLYPH: char = 'G';
pub const PATH_GLYPH: char = '*';
pub const VISITED_GLYPH: char = '+';
pub const OBSTACLE_GLYPH: char = '#';

/// A borrowed, displayable view of a terrain map.
///
/// Each row is written on its own line with cells separated by one space.
/// Glyph precedence is start, goal, path, visited, obstacle, and finally
/// the elevation number.
pub struct TerrainView<'a> {
    terrain: &'a TerrainMap,
    path: Option<HashSet<Point>>,
    visited: Option<&'a HashSet<Point>>,
}

impl<'a> TerrainView<'a> {
    pub fn new(terrain: &'a TerrainMap) -> Self {
        Self {
            terrain,
            path: None,
            visited: None,
        }
    }

    /// Overlay a path (builder).
    pub fn with_path(mut self, path: &[Point]) -> Self {
        self.path = Some(path.iter().copied().collect());
        self
    }

    /// Overlay a set of visited positions (builder).
    pub fn with_visited(mut self, visited: &'a HashSet<Point>) -> Self {
        self.visited = Some(visited);
        self
    }

    fn on_path(&self, p: Point) -> bool {
        self.path.as_ref().is_some_and(|s| s.contains(&p))
    }

    fn was_visited(&self, p: Point) -> bool {
        self.visited.is_some_and(|s| s.contains(&p))
    }

    fn write_cell(&self, f: &mut fmt::Formatter<'_>, p: Point, cell: Cell) -> fmt::Result {
        if Some(p) == self.terrain.start() {
            write!(f, "{START_GLYPH}")
        } else if Some(p) == self.terrain.goal() {
            write!(f, "{GOAL_GLYPH}")
        } else if self.on_path(p) {
            write!(f, "{PATH_GLYPH}")
        } else if self.was_visited(p) {
            write!(f, "{VISITED_GLYPH}")
        } else {
            match cell {
                Cell::Obstacle => write!(f, "{OBSTACLE_GLYPH}"),
                Cell::Elevation(e) => write!(f, "{e}"),
            }
        }
    }
}

impl fmt::Display for TerrainView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.terrain.width();
        for (p, cell) in self.terrain.iter() {
            if p.x > 0 {
                write!(f, " ")?;
            }
            self.write_cell(f, p, cell)?;
            if p.x == width - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
