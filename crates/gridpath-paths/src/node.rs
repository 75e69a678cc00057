use gridpath_core::{Point, Range};

use crate::distance::step_cost;
use crate::error::{Result, SearchError};
use crate::traits::Passable;

/// Sentinel cost for cells no search has reached yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel `came_from` for the start node and never-reached nodes.
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// Per-cell search state.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) pos: Point,
    g: i32,
    h: i32,
    f: i32,
    pub(crate) came_from: usize,
    pub(crate) walkable: bool,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Node {
    fn new(pos: Point, target: Point, walkable: bool) -> Self {
        let h = step_cost(pos, target);
        Self {
            pos,
            g: UNREACHABLE,
            h,
            f: UNREACHABLE,
            came_from: NO_PREDECESSOR,
            walkable,
            open: false,
            closed: false,
        }
    }

    #[inline]
    pub(crate) fn g(&self) -> i32 {
        self.g
    }

    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.f
    }

    /// The only way to change `g`; keeps `f = g + h`.
    #[inline]
    pub(crate) fn set_g(&mut self, g: i32) {
        self.g = g;
        self.f = g.saturating_add(self.h);
    }
}

/// Reference into the node array, ordered for a min-`f` `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap. Lower index wins ties.
        other.f.cmp(&self.f).then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// NodeGrid
// ---------------------------------------------------------------------------

/// Row-major index of `p` relative to `bounds`, or `None` outside them.
#[inline]
pub(crate) fn flat_index(bounds: Range, p: Point) -> Option<usize> {
    if !bounds.contains(p) {
        return None;
    }
    let x = (p.x - bounds.min.x) as usize;
    let y = (p.y - bounds.min.y) as usize;
    Some(x + y * bounds.width() as usize)
}

/// Flat, row-major node storage for one search, indexed by `x + y * width`
/// relative to the grid bounds. Allocated per search and dropped with it.
pub(crate) struct NodeGrid {
    bounds: Range,
    nodes: Vec<Node>,
}

impl NodeGrid {
    /// Allocate and initialise a node for every cell of `grid`.
    pub(crate) fn build<G: Passable + ?Sized>(grid: &G, target: Point) -> Result<Self> {
        let bounds = grid.bounds();
        let len = bounds.len();
        let mut nodes = Vec::new();
        nodes
            .try_reserve_exact(len)
            .map_err(|_| SearchError::ScratchExhausted { cells: len })?;
        nodes.extend(
            bounds
                .iter()
                .map(|p| Node::new(p, target, grid.is_walkable(p))),
        );
        Ok(Self { bounds, nodes })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        flat_index(self.bounds, p)
    }

    #[inline]
    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl std::ops::Index<usize> for NodeGrid {
    type Output = Node;

    #[inline]
    fn index(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }
}

impl std::ops::IndexMut<usize> for NodeGrid {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::WalkMask;
    use std::collections::BinaryHeap;

    #[test]
    fn build_initialises_every_cell() {
        let mut mask = WalkMask::new(4, 3).unwrap();
        mask.set_walkable(Point::new(1, 2), false);
        let target = Point::new(3, 2);
        let grid = NodeGrid::build(&mask, target).unwrap();
        assert_eq!(grid.len(), 12);
        for (i, node) in grid.nodes().iter().enumerate() {
            assert_eq!(grid.idx(node.pos), Some(i));
            assert_eq!(node.g(), UNREACHABLE);
            assert_eq!(node.f(), UNREACHABLE);
            assert_eq!(node.came_from, NO_PREDECESSOR);
            assert!(!node.open && !node.closed);
        }
        let i = grid.idx(Point::new(1, 2)).unwrap();
        assert!(!grid[i].walkable);
        assert_eq!(grid[0].h, step_cost(Point::ZERO, target));
    }

    #[test]
    fn set_g_recomputes_f() {
        let mut node = Node::new(Point::ZERO, Point::new(5, 1), true);
        node.set_g(3);
        assert_eq!(node.f(), 3 + 5);
        node.set_g(0);
        assert_eq!(node.f(), 5);
    }

    #[test]
    fn idx_rejects_outside() {
        let mask = WalkMask::new(3, 3).unwrap();
        let grid = NodeGrid::build(&mask, Point::ZERO).unwrap();
        assert_eq!(grid.idx(Point::new(2, 2)), Some(8));
        assert_eq!(grid.idx(Point::new(3, 0)), None);
        assert_eq!(grid.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn node_ref_heap_pops_lowest_f_then_lowest_idx() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 4, f: 7 });
        heap.push(NodeRef { idx: 9, f: 2 });
        heap.push(NodeRef { idx: 1, f: 2 });
        assert_eq!(heap.pop(), Some(NodeRef { idx: 1, f: 2 }));
        assert_eq!(heap.pop(), Some(NodeRef { idx: 9, f: 2 }));
        assert_eq!(heap.pop(), Some(NodeRef { idx: 4, f: 7 }));
    }
}
