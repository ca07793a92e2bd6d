//! Reachability flood fill.

use skyroute_core::{Point, Range};

use crate::traits::Pather;

/// Flood-fill from `p` and return every position connected to it through
/// `pather`'s neighbors, `p` included.
///
/// Returns an empty vector if `p` lies outside `rng`.
pub fn reachable_from<P: Pather + ?Sized>(pather: &P, rng: Range, p: Point) -> Vec<Point> {
    let mut result = Vec::new();
    if !rng.contains(p) {
        return result;
    }

    let width = rng.width() as usize;
    let idx = |q: Point| ((q.y - rng.min.y) as usize) * width + (q.x - rng.min.x) as usize;

    let mut seen = vec![false; rng.len()];
    let mut stack = vec![p];
    let mut nbuf = Vec::with_capacity(4);
    seen[idx(p)] = true;
    result.push(p);

    // Iterative DFS.
    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            if !rng.contains(np) {
                continue;
            }
            let ni = idx(np);
            if !seen[ni] {
                seen[ni] = true;
                stack.push(np);
                result.push(np);
            }
        }
    }

    result
}
