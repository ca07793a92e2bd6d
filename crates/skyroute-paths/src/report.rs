use std::collections::HashSet;
use std::time::Duration;

use skyroute_core::Point;

use crate::traits::WeightedPather;

/// Outcome and diagnostics of a single search.
///
/// An unreachable goal is a normal outcome: `path` is `None` and the other
/// fields still describe the work done.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchReport {
    /// Start-to-goal path including both endpoints.
    pub path: Option<Vec<Point>>,
    /// Number of frontier pops that expanded or reached a position. Stale
    /// entries for already-closed positions are not counted.
    pub visited: usize,
    /// Wall-clock time spent inside the search.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "elapsed_ms", serialize_with = "ser::millis")
    )]
    pub elapsed: Duration,
    /// Positions that were expanded.
    #[cfg_attr(feature = "serde", serde(serialize_with = "ser::sorted"))]
    pub closed: HashSet<Point>,
}

/// Serialized form: elapsed time as fractional milliseconds and the closed
/// set in point order, so equal searches produce equal JSON.
#[cfg(feature = "serde")]
mod ser {
    use std::collections::HashSet;
    use std::time::Duration;

    use serde::Serializer;
    use skyroute_core::Point;

    pub(super) fn millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64() * 1000.0)
    }

    pub(super) fn sorted<S: Serializer>(set: &HashSet<Point>, s: S) -> Result<S::Ok, S::Error> {
        let mut points: Vec<Point> = set.iter().copied().collect();
        points.sort_unstable();
        s.collect_seq(points)
    }
}

impl SearchReport {
    /// Whether a path to the goal was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of cells on the path (0 if no path).
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }

    /// Elapsed time in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Total traversal cost of the path under `pather`'s cost model.
    pub fn path_cost<P: WeightedPather + ?Sized>(&self, pather: &P) -> Option<f64> {
        let path = self.path.as_ref()?;
        Some(path.windows(2).map(|w| pather.cost(w[0], w[1])).sum())
    }

    /// Split into `(path, visited, elapsed_ms, closed)`.
    pub fn into_parts(self) -> (Option<Vec<Point>>, usize, f64, HashSet<Point>) {
        let ms = self.elapsed_ms();
        (self.path, self.visited, ms, self.closed)
    }
}
