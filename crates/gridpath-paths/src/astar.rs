//! The A* search loop.

use log::{debug, trace};

use gridpath_core::Point;

use crate::distance::step_cost;
use crate::error::{InvalidRequest, Result};
use crate::frontier::{Frontier, FrontierKind};
use crate::neighbors::NeighborTemplate;
use crate::node::{NO_PREDECESSOR, NodeGrid, flat_index};
use crate::path::{Path, SearchOutcome};
use crate::traits::Passable;

/// Check that both endpoints are inside the grid and walkable.
pub fn validate<G: Passable + ?Sized>(grid: &G, start: Point, target: Point) -> Result<()> {
    endpoint_indices(grid, start, target).map(|_| ())
}

/// [`validate`], returning the endpoints' [`NodeGrid`] indices.
fn endpoint_indices<G: Passable + ?Sized>(
    grid: &G,
    start: Point,
    target: Point,
) -> Result<(usize, usize)> {
    let bounds = grid.bounds();
    let Some(start_idx) = flat_index(bounds, start) else {
        return Err(InvalidRequest::StartOutside(start).into());
    };
    let Some(target_idx) = flat_index(bounds, target) else {
        return Err(InvalidRequest::TargetOutside(target).into());
    };
    if !grid.is_walkable(start) {
        return Err(InvalidRequest::StartBlocked(start).into());
    }
    if !grid.is_walkable(target) {
        return Err(InvalidRequest::TargetBlocked(target).into());
    }
    Ok((start_idx, target_idx))
}

/// Find a least-cost path from `start` to `target`.
///
/// Moves are the offsets of `template`, each costing [`step_cost`] between its
/// endpoints. All node state is allocated here and dropped on return, so
/// concurrent calls on a shared grid never interact.
///
/// Returns `Ok(SearchOutcome::NoPath)` when the target is unreachable and an
/// error when the request is malformed or scratch memory cannot be reserved.
pub fn astar<G: Passable + ?Sized>(
    grid: &G,
    start: Point,
    target: Point,
    template: &NeighborTemplate,
    frontier: FrontierKind,
) -> Result<SearchOutcome> {
    let (start_idx, target_idx) = endpoint_indices(grid, start, target)?;

    let mut nodes = NodeGrid::build(grid, target)?;

    nodes[start_idx].set_g(0);
    nodes[start_idx].open = true;

    let mut open = Frontier::new(frontier);
    open.offer(start_idx, nodes[start_idx].f(), false);

    let mut expanded = 0usize;
    let found = loop {
        let Some(ci) = open.pop_min(nodes.nodes()) else {
            break false;
        };
        if ci == target_idx {
            break true;
        }

        let current = &mut nodes[ci];
        current.open = false;
        current.closed = true;
        let (cp, cg) = (current.pos, current.g());
        expanded += 1;

        for np in template.neighbors(cp) {
            let Some(ni) = nodes.idx(np) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.closed || !n.walkable {
                continue;
            }
            let tentative_g = cg.saturating_add(step_cost(cp, np));
            if tentative_g < n.g() {
                let already_open = n.open;
                n.came_from = ci;
                n.set_g(tentative_g);
                n.open = true;
                open.offer(ni, n.f(), already_open);
            }
        }
    };

    if !found {
        debug!(
            "no path {start} -> {target} ({expanded} of {} cells expanded)",
            nodes.len()
        );
        return Ok(SearchOutcome::NoPath);
    }

    let mut points = Vec::new();
    let mut ci = target_idx;
    loop {
        points.push(nodes[ci].pos);
        let prev = nodes[ci].came_from;
        if prev == NO_PREDECESSOR {
            break;
        }
        ci = prev;
    }
    points.reverse();

    let cost = nodes[target_idx].g();
    trace!(
        "path {start} -> {target}: {} cells, cost {cost}, {expanded} expanded",
        points.len()
    );
    Ok(SearchOutcome::Found(Path::new(points, cost)))
}
