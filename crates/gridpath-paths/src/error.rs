//! Error types for the search engine.

use gridpath_core::Point;
use thiserror::Error;

/// Why a request was rejected before any search ran.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("start {0} is outside the grid")]
    StartOutside(Point),

    #[error("target {0} is outside the grid")]
    TargetOutside(Point),

    #[error("start {0} is not walkable")]
    StartBlocked(Point),

    #[error("target {0} is not walkable")]
    TargetBlocked(Point),
}

/// A search that could not produce an outcome.
///
/// An unreachable target is not an error; see
/// [`SearchOutcome::NoPath`](crate::SearchOutcome::NoPath).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    #[error("cannot allocate search scratch for {cells} cells")]
    ScratchExhausted { cells: usize },

    #[error("invalid neighbor template: {0}")]
    InvalidTemplate(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
