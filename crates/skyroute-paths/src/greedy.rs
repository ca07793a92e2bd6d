//! Greedy best-first search.
//!
//! Orders the frontier by the heuristic alone and keeps no path costs. Each
//! position is bound to the first parent that discovers it and is pushed at
//! most once, so the search always terminates but the path it returns is
//! usually not the cheapest one.

use std::collections::BinaryHeap;
use std::time::Instant;

use skyroute_core::{Point, Range};

use crate::report::SearchReport;
use crate::space::{NO_PARENT, NodeRef, SearchSpace};
use crate::traits::HeuristicPather;

/// Compute a path from `from` to `to` by always expanding the frontier
/// position with the lowest estimate.
pub fn greedy_search<P: HeuristicPather + ?Sized>(
    pather: &P,
    rng: Range,
    from: Point,
    to: Point,
) -> SearchReport {
    let started = Instant::now();
    let mut space = SearchSpace::new(rng);

    let (Some(start_idx), Some(goal_idx)) = (space.idx(from), space.idx(to)) else {
        log::debug!("greedy: endpoint {from} or {to} outside {rng}");
        return SearchReport {
            elapsed: started.elapsed(),
            ..SearchReport::default()
        };
    };

    space.nodes[start_idx].parent = NO_PARENT;
    space.nodes[start_idx].discovered = true;

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
                "greedy: reached {to} in {} steps after {visited} pops",
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

        let cp = current.pos;
        log::trace!("greedy: expand {cp} h={}", current.score);

        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = space.idx(np) else {
                continue;
            };
            let n = &mut space.nodes[ni];
            // First discovery wins; the parent is never revised.
            if n.closed || n.discovered {
                continue;
            }
            n.discovered = true;
            n.parent = ci;
            open.push(NodeRef::new(pather.estimate(np, to), np, ni));
        }
    }

    let closed = space.closed_set();
    log::debug!(
        "greedy: {to} unreachable from {from}, {visited} pops, {} closed",
        closed.len()
    );
    SearchReport {
        path: None,
        visited,
        elapsed: started.elapsed(),
        closed,
    }
}
