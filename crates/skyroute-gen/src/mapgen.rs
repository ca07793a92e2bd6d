//! Random terrain generation.
//!
//! Elevations are drawn uniformly, no-fly zones are dropped at uniform
//! positions, and start and goal are picked by rejection sampling among the
//! remaining passable cells.

use rand::{Rng, RngExt};
use skyroute_core::{Point, TerrainMap};

/// Parameters for [`TerrainGen::generate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TerrainParams {
    /// Highest elevation level; levels are drawn from `1..=max_elevation`.
    pub max_elevation: u32,
    /// Number of no-fly zone drops. Drops may land on the same cell twice.
    pub no_fly_zones: usize,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            max_elevation: 9,
            no_fly_zones: 10,
        }
    }
}

/// Terrain generator owning its random source and the map it writes to.
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    pub terrain: TerrainMap,
}

impl<R: Rng> TerrainGen<R> {
    /// Create a generator over a fresh `width × height` map.
    pub fn new(width: i32, height: i32, rng: R) -> Self {
        Self::with_terrain(TerrainMap::new(width, height), rng)
    }

    /// Create a generator writing into an existing map.
    pub fn with_terrain(terrain: TerrainMap, rng: R) -> Self {
        Self { rng, terrain }
    }

    /// Consume the generator and return the map.
    pub fn into_terrain(self) -> TerrainMap {
        self.terrain
    }

    /// Give every cell a uniform elevation in `1..=max_elevation`.
    ///
    /// Any existing no-fly zones are overwritten. A `max_elevation` of 0 is
    /// treated as 1.
    pub fn randomize_elevations(&mut self, max_elevation: u32) {
        let max = max_elevation.max(1);
        for p in self.terrain.bounds() {
            let e = self.rng.random_range(1..=max);
            self.terrain.set_elevation(p, e);
        }
    }

    /// Drop `count` no-fly zones at uniform positions.
    ///
    /// Returns how many distinct cells became obstacles.
    pub fn scatter_obstacles(&mut self, count: usize) -> usize {
        let bounds = self.terrain.bounds();
        if bounds.is_empty() {
            return 0;
        }
        let mut marked = 0;
        for _ in 0..count {
            let p = self.random_point();
            if self.terrain.is_passable(p) {
                marked += 1;
            }
            self.terrain.mark_obstacle(p);
        }
        marked
    }

    /// Pick a passable start and a different passable goal.
    ///
    /// Returns `None`, leaving both unset, when fewer than two passable cells
    /// exist.
    pub fn place_endpoints(&mut self) -> Option<(Point, Point)> {
        self.terrain.clear_endpoints();
        if self.terrain.passable_count() < 2 {
            log::warn!(
                "cannot place start and goal: only {} passable cells",
                self.terrain.passable_count()
            );
            return None;
        }

        let start = loop {
            let p = self.random_point();
            if self.terrain.set_start(p) {
                break p;
            }
        };
        let goal = loop {
            let p = self.random_point();
            if self.terrain.set_goal(p) {
                break p;
            }
        };
        Some((start, goal))
    }

    /// Generate a complete map: elevations, no-fly zones, then endpoints.
    pub fn generate(&mut self, params: &TerrainParams) -> Option<(Point, Point)> {
        self.randomize_elevations(params.max_elevation);
        let marked = self.scatter_obstacles(params.no_fly_zones);
        let endpoints = self.place_endpoints();
        log::debug!(
            "generated {}x{} terrain, {marked} no-fly zones, endpoints {endpoints:?}",
            self.terrain.width(),
            self.terrain.height()
        );
        endpoints
    }

    fn random_point(&mut self) -> Point {
        let bounds = self.terrain.bounds();
        Point::new(
            self.rng.random_range(bounds.min.x..bounds.max.x),
            self.rng.random_range(bounds.min.y..bounds.max.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use skyroute_core::Cell;

    #[test]
    fn endpoints_are_distinct_and_passable() {
        for seed in 0..50 {
            let mut tg = TerrainGen::new(10, 10, StdRng::seed_from_u64(seed));
            let (start, goal) = tg.generate(&TerrainParams::default()).unwrap();
            assert_ne!(start, goal);
            assert!(tg.terrain.is_passable(start));
            assert!(tg.terrain.is_passable(goal));
            assert_eq!(tg.terrain.start(), Some(start));
            assert_eq!(tg.terrain.goal(), Some(goal));
        }
    }

    #[test]
    fn elevations_within_range() {
        let mut tg = TerrainGen::new(12, 8, StdRng::seed_from_u64(7));
        tg.generate(&TerrainParams {
            max_elevation: 4,
            no_fly_zones: 5,
        });
        for (_, cell) in tg.terrain.iter() {
            if let Cell::Elevation(e) = cell {
                assert!((1..=4).contains(&e));
            }
        }
    }

    #[test]
    fn obstacle_drops_may_overlap() {
        let mut tg = TerrainGen::new(3, 3, StdRng::seed_from_u64(1));
        tg.randomize_elevations(9);
        let marked = tg.scatter_obstacles(20);
        assert!(marked <= 9);
        assert_eq!(tg.terrain.passable_count(), 9 - marked);
    }

    #[test]
    fn same_seed_same_terrain() {
        let params = TerrainParams::default();
        let mut a = TerrainGen::new(10, 10, StdRng::seed_from_u64(42));
        let mut b = TerrainGen::new(10, 10, StdRng::seed_from_u64(42));
        assert_eq!(a.generate(&params), b.generate(&params));
        assert_eq!(a.into_terrain(), b.into_terrain());
    }

    #[test]
    fn no_room_for_endpoints() {
        let mut tg = TerrainGen::new(1, 1, StdRng::seed_from_u64(3));
        assert_eq!(tg.generate(&TerrainParams::default()), None);
        assert_eq!(tg.terrain.start(), None);
        assert_eq!(tg.terrain.goal(), None);

        let mut tg = TerrainGen::new(0, 0, StdRng::seed_from_u64(3));
        assert_eq!(tg.generate(&TerrainParams::default()), None);
    }

    #[test]
    fn regenerate_replaces_endpoints() {
        let mut tg = TerrainGen::new(6, 6, rand::rng());
        let params = TerrainParams {
            max_elevation: 9,
            no_fly_zones: 0,
        };
        assert!(tg.generate(&params).is_some());
        assert!(tg.generate(&params).is_some());
        assert_ne!(tg.terrain.start(), tg.terrain.goal());
    }
}
