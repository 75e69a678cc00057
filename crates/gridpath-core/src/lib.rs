//! **gridpath-core** — geometry and walkability types for grid pathfinding.
//!
//! This crate provides the foundational types shared by the search engine and
//! the batch scheduler: integer [`Point`]s and half-open [`Range`]s, and the
//! [`WalkMask`] grid model that describes which cells an agent may enter.

pub mod error;
pub mod geom;
pub mod mask;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use mask::WalkMask;
