use std::sync::Arc;

use gridpath_core::{Point, WalkMask};

use crate::astar::astar;
use crate::error::Result;
use crate::frontier::FrontierKind;
use crate::neighbors::NeighborTemplate;
use crate::path::SearchOutcome;

/// One self-contained search job.
///
/// The grid is shared read-only through an `Arc`; everything the search
/// mutates is allocated inside [`run`](Self::run). Requests are `Send + Sync`
/// and can be executed from any thread.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub grid: Arc<WalkMask>,
    pub start: Point,
    pub target: Point,
    pub template: NeighborTemplate,
    pub frontier: FrontierKind,
}

impl SearchRequest {
    /// A request using the default [`FrontierKind::Scan`] strategy.
    pub fn new(
        grid: Arc<WalkMask>,
        start: Point,
        target: Point,
        template: NeighborTemplate,
    ) -> Self {
        Self {
            grid,
            start,
            target,
            template,
            frontier: FrontierKind::default(),
        }
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Execute the search.
    pub fn run(&self) -> Result<SearchOutcome> {
        find_path(self)
    }
}

/// Execute `req` against its own grid.
pub fn find_path(req: &SearchRequest) -> Result<SearchOutcome> {
    astar(
        req.grid.as_ref(),
        req.start,
        req.target,
        &req.template,
        req.frontier,
    )
}
