use skyroute_core::Point;

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append passable neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Pather with a distance estimate towards a target.
///
/// The estimate is not required to be admissible; searches ordered by it are
/// only optimal when it never overestimates.
pub trait HeuristicPather: Pather {
    /// Heuristic estimate of the remaining distance from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> f64;
}

/// Full A* pather: weighted edges plus a heuristic.
pub trait AstarPather: WeightedPather + HeuristicPather {}

impl<T: WeightedPather + HeuristicPather + ?Sized> AstarPather for T {}
