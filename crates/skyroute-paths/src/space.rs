use std::collections::HashSet;

use ordered_float::OrderedFloat;
use skyroute_core::{Point, Range};

/// Parent sentinel for the search root.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal node for priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) discovered: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: NO_PARENT,
            discovered: false,
            closed: false,
        }
    }
}

/// Frontier entry ordered by `(score, pos)` for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) score: OrderedFloat<f64>,
    pub(crate) pos: Point,
    pub(crate) idx: usize,
}

impl NodeRef {
    #[inline]
    pub(crate) fn new(score: f64, pos: Point, idx: usize) -> Self {
        Self {
            score: OrderedFloat(score),
            pos,
            idx,
        }
    }
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest score first,
        // and the smallest position among equal scores.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Per-invocation bookkeeping for one search over a grid rectangle.
///
/// Holds one [`Node`] per cell, so g-scores, parent links and the closed
/// flag are plain indexed lookups. A new space is built for every search and
/// dropped when it returns.
pub(crate) struct SearchSpace {
    rng: Range,
    width: usize,
    pub(crate) nodes: Vec<Node>,
}

impl SearchSpace {
    pub(crate) fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
        }
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Follow parent links from `idx` back to the root, returning the path
    /// in root-to-`idx` order.
    pub(crate) fn path_to(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    /// Every position expanded so far.
    pub(crate) fn closed_set(&self) -> HashSet<Point> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.closed)
            .map(|(i, _)| self.point(i))
            .collect()
    }
}
