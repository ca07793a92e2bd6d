//! Search entry points over a [`TerrainMap`].

use std::fmt;
use std::str::FromStr;

use skyroute_core::{Point, TerrainMap};

use crate::astar::astar_search;
use crate::distance::manhattan;
use crate::greedy::greedy_search;
use crate::report::SearchReport;
use crate::traits::{HeuristicPather, Pather, WeightedPather};

impl Pather for TerrainMap {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

impl WeightedPather for TerrainMap {
    fn cost(&self, from: Point, to: Point) -> f64 {
        self.edge_cost(from, to)
    }
}

impl HeuristicPather for TerrainMap {
    /// Manhattan distance. It ignores elevation, so it may both under- and
    /// overestimate the real flight cost.
    fn estimate(&self, from: Point, to: Point) -> f64 {
        manhattan(from, to) as f64
    }
}

/// Run A* from the map's start to its goal.
///
/// Returns an empty report without searching if either endpoint is unset.
pub fn a_star(terrain: &TerrainMap) -> SearchReport {
    let (Some(start), Some(goal)) = (terrain.start(), terrain.goal()) else {
        log::debug!("astar: start or goal not set");
        return SearchReport::default();
    };
    astar_search(terrain, terrain.bounds(), start, goal)
}

/// Run greedy best-first search from the map's start to its goal.
///
/// Returns an empty report without searching if either endpoint is unset.
pub fn greedy_best_first(terrain: &TerrainMap) -> SearchReport {
    let (Some(start), Some(goal)) = (terrain.start(), terrain.goal()) else {
        log::debug!("greedy: start or goal not set");
        return SearchReport::default();
    };
    greedy_search(terrain, terrain.bounds(), start, goal)
}

/// A search strategy selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "&'static str", try_from = "String"))]
pub enum Strategy {
    AStar,
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::AStar, Strategy::Greedy];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::AStar => "A*",
            Strategy::Greedy => "Greedy Best-First",
        }
    }

    /// Short identifier used on the command line and in serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Strategy::AStar => "astar",
            Strategy::Greedy => "greedy",
        }
    }

    /// Run this strategy on `terrain`.
    pub fn run(self, terrain: &TerrainMap) -> SearchReport {
        match self {
            Strategy::AStar => a_star(terrain),
            Strategy::Greedy => greedy_best_first(terrain),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some(found) = Strategy::ALL.into_iter().find(|st| st.key() == lower) {
            return Ok(found);
        }
        match lower.as_str() {
            "a*" | "a-star" => Ok(Strategy::AStar),
            "gbfs" | "greedy-best-first" => Ok(Strategy::Greedy),
            _ => {
                let keys: Vec<&str> = Strategy::ALL.iter().map(|st| st.key()).collect();
                Err(format!(
                    "unknown strategy `{s}` (expected one of: {})",
                    keys.join(", ")
                ))
            }
        }
    }
}

impl From<Strategy> for &'static str {
    fn from(s: Strategy) -> Self {
        s.key()
    }
}

impl TryFrom<String> for Strategy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reach::reachable_from;
    use std::collections::HashSet;

    fn line(elevations: &[u32]) -> TerrainMap {
        let mut m = TerrainMap::new(elevations.len() as i32, 1);
        for (x, &e) in elevations.iter().enumerate() {
            m.set_elevation(Point::new(x as i32, 0), e);
        }
        m.set_start(Point::new(0, 0));
        m.set_goal(Point::new(elevations.len() as i32 - 1, 0));
        m
    }

    fn open_grid(w: i32, h: i32, start: Point, goal: Point) -> TerrainMap {
        let mut m = TerrainMap::new(w, h);
        m.set_start(start);
        m.set_goal(goal);
        m
    }

    /// A 9×7 map with varied elevations and a few no-fly zones.
    fn rugged() -> TerrainMap {
        let mut m = TerrainMap::new(9, 7);
        for p in m.bounds() {
            m.set_elevation(p, ((p.x * 7 + p.y * 3) % 9 + 1) as u32);
        }
        for (x, y) in [(2, 0), (2, 1), (2, 2), (2, 3), (5, 6), (5, 5), (5, 4), (5, 3), (6, 2)] {
            m.mark_obstacle(Point::new(x, y));
        }
        m.set_start(Point::new(0, 0));
        m.set_goal(Point::new(8, 6));
        m
    }

    fn assert_valid_path(m: &TerrainMap, path: &[Point]) {
        assert_eq!(path.first().copied(), m.start());
        assert_eq!(path.last().copied(), m.goal());
        for w in path.windows(2) {
            assert!(manhattan(w[0], w[1]) == 1, "{} -> {} not adjacent", w[0], w[1]);
        }
        for &p in path {
            assert!(m.is_passable(p), "{p} is not passable");
        }
        let unique: HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "path revisits a position");
    }

    #[test]
    fn flat_line() {
        let m = line(&[1, 1, 1]);
        let r = a_star(&m);
        assert_eq!(
            r.path,
            Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
        );
        assert_eq!(r.path_cost(&m), Some(2.0));
    }

    #[test]
    fn ridge_is_the_only_route() {
        let m = line(&[1, 9, 1]);
        let r = a_star(&m);
        assert_eq!(
            r.path,
            Some(vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)])
        );
        assert_eq!(r.path_cost(&m), Some(18.0));
        assert_eq!(r.visited, 3);
    }

    #[test]
    fn astar_breaks_ties_by_position() {
        let m = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
        let r = a_star(&m);
        assert_eq!(
            r.path,
            Some(vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ])
        );
        assert_eq!(r.visited, 9);
        assert_eq!(r.closed.len(), 8);
        assert!(!r.closed.contains(&Point::new(2, 2)));
    }

    #[test]
    fn greedy_breaks_ties_by_position() {
        let m = open_grid(3, 3, Point::new(0, 0), Point::new(2, 2));
        let r = greedy_best_first(&m);
        assert_eq!(
            r.path,
            Some(vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 2),
                Point::new(2, 2),
            ])
        );
        assert_eq!(r.visited, 5);
    }

    #[test]
    fn astar_prefers_cheap_detour_over_climb() {
        // Climbing the 9 costs 13 + 5; going around it on level ground costs 4.
        let mut m = open_grid(3, 2, Point::new(0, 0), Point::new(2, 0));
        m.set_elevation(Point::new(1, 0), 9);
        let r = a_star(&m);
        let path = r.path.as_deref().unwrap();
        assert_valid_path(&m, path);
        assert!(!path.contains(&Point::new(1, 0)));
        assert_eq!(r.path_cost(&m), Some(4.0));
    }

    #[test]
    fn rugged_paths_are_valid() {
        let m = rugged();
        for strategy in Strategy::ALL {
            let r = strategy.run(&m);
            let path = r.path.as_deref().unwrap();
            assert_valid_path(&m, path);
            assert!(r.visited <= m.passable_count());
            assert!(r.closed.iter().all(|&p| m.is_passable(p)));
        }
    }

    #[test]
    fn wall_blocks_both_strategies() {
        let mut m = open_grid(5, 5, Point::new(0, 0), Point::new(4, 4));
        for y in 0..5 {
            m.mark_obstacle(Point::new(2, y));
        }
        let left: HashSet<Point> = reachable_from(&m, m.bounds(), Point::new(0, 0))
            .into_iter()
            .collect();
        assert_eq!(left.len(), 10);

        for strategy in Strategy::ALL {
            let r = strategy.run(&m);
            assert_eq!(r.path, None, "{strategy}");
            assert!(r.visited > 0);
            assert_eq!(r.closed, left, "{strategy}");
        }
        assert_eq!(greedy_best_first(&m).visited, 10);
    }

    #[test]
    fn greedy_escapes_dead_end() {
        // A cup opening towards the start sits between start and goal.
        let mut m = open_grid(7, 5, Point::new(0, 2), Point::new(6, 2));
        for (x, y) in [(1, 1), (2, 1), (3, 1), (3, 2), (3, 3), (2, 3), (1, 3)] {
            m.mark_obstacle(Point::new(x, y));
        }
        let greedy = greedy_best_first(&m);
        let path = greedy.path.as_deref().unwrap();
        assert_valid_path(&m, path);
        assert!(greedy.closed.contains(&Point::new(2, 2)));

        let astar = a_star(&m);
        assert!(path.len() >= astar.path_len());
    }

    #[test]
    fn greedy_dead_end_without_exit() {
        let mut m = open_grid(4, 3, Point::new(0, 1), Point::new(3, 1));
        for y in 0..3 {
            m.mark_obstacle(Point::new(2, y));
        }
        let r = greedy_best_first(&m);
        assert_eq!(r.path, None);
        assert_eq!(r.visited, 6);
        assert_eq!(r.closed.len(), 6);
    }

    #[test]
    fn unset_endpoints_skip_search() {
        let mut m = TerrainMap::new(4, 4);
        m.set_start(Point::new(0, 0));
        for strategy in Strategy::ALL {
            let r = strategy.run(&m);
            assert_eq!(r, SearchReport::default());
            assert_eq!(r.elapsed_ms(), 0.0);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let m = rugged();
        for strategy in Strategy::ALL {
            let a = strategy.run(&m);
            let b = strategy.run(&m);
            assert_eq!(a.path, b.path);
            assert_eq!(a.visited, b.visited);
            assert_eq!(a.closed, b.closed);
        }
    }

    #[test]
    fn strategies_do_not_interfere() {
        let m = rugged();
        let astar_alone = a_star(&m);
        let _ = greedy_best_first(&m);
        let astar_again = a_star(&m);
        assert_eq!(astar_alone.path, astar_again.path);
        assert_eq!(astar_alone.visited, astar_again.visited);
    }

    #[test]
    fn into_parts_shape() {
        let m = line(&[1, 2]);
        let (path, visited, ms, closed) = a_star(&m).into_parts();
        assert_eq!(path.map(|p| p.len()), Some(2));
        assert_eq!(visited, 2);
        assert!(ms >= 0.0);
        assert_eq!(closed, HashSet::from([Point::new(0, 0)]));
    }

    #[test]
    fn strategy_parsing() {
        assert_eq!("astar".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("A*".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!("GBFS".parse::<Strategy>(), Ok(Strategy::Greedy));
        assert!("dijkstra".parse::<Strategy>().is_err());
        for s in Strategy::ALL {
            assert_eq!(s.key().parse::<Strategy>(), Ok(s));
        }
        assert_eq!(
            "bfs".parse::<Strategy>(),
            Err("unknown strategy `bfs` (expected one of: astar, greedy)".to_string())
        );
    }
}
