use std::collections::{BinaryHeap, HashSet};
use std::time::Instant;

use skyroute_core::{Point, Range};

use crate::report::SearchReport;
use crate::space::{NO_PARENT, NodeRef, SearchSpace};
use crate::traits::AstarPather;

/// Compute a cheapest path from `from` to `to` using A*.
///
/// Frontier entries are ordered by `g + estimate`, ties broken by position.
/// Improved entries are pushed alongside older ones rather than updated in
/// place; a popped entry whose position is already closed is skipped. Closed
/// positions are never reopened, so with an inadmissible estimate the
/// returned path may cost more than the optimum.
pub fn astar_search<P: AstarPather + ?Sized>(
    pather: &P,
    rng: Range,
    from: Point,
    to: Point,
) -> SearchReport {
    let started = Instant::now();
    let mut space = SearchSpace::new(rng);

    let (Some(start_idx), Some(goal_idx)) = (space.idx(from), space.idx(to)) else {
        log::debug!("astar: endpoint {from} or {to} outside {rng}");
        return SearchReport {
            elapsed: started.elapsed(),
            ..SearchReport::default()
        };
    };

    {
        let node = &mut space.nodes[start_idx];
        node.g = 0.0;
        node.parent = NO_PARENT;
        node.discovered = true;
    }

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef::new(pather.estimate(from, to), from, start_idx));

    let mut visited = 0usize;
    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if space.nodes[ci].closed {
            continue;
        }
        visited += 1;

        if ci == goal_idx {
            let path = space.path_to(ci);
            log::debug!(
                "astar: reached {to} in {} steps after {visited} pops",
                path.len()
            );
            return SearchReport {
                path: Some(path),
                visited,
                elapsed: started.elapsed(),
                closed: space.closed_set(),
            };
        }

        space.nodes[ci].closed = true;

        let current_g = space.nodes[ci].g;
        let cp = current.pos;
        log::trace!("astar: expand {cp} g={current_g} f={}", current.score);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            let n = &mut space.nodes[ni];
            if n.closed {
                continue;
            }
            let tentative_g = current_g + pather.cost(cp, np);
            if n.discovered && tentative_g >= n.g {
                continue;
            }

            n.discovered = true;
            n.g = tentative_g;
            n.parent = ci;

            open.push(NodeRef::new(tentative_g + pather.estimate(np, to), np, ni));
        }
    }

    let closed: HashSet<Point> = space.closed_set();
    log::debug!(
        "astar: {to} unreachable from {from}, {visited} pops, {} closed",
        closed.len()
    );
    SearchReport {
        path: None,
        visited,
        elapsed: started.elapsed(),
        closed,
    }
}
