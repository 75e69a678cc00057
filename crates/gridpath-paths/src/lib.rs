//! Single-shot A* search over static walkability grids.
//!
//! A search takes a grid, a start, a target and a [`NeighborTemplate`] and
//! returns either a least-cost [`Path`] or [`SearchOutcome::NoPath`].
//! Malformed requests fail with [`SearchError::InvalidRequest`] before any
//! node storage is allocated.
//!
//! Every search allocates its own flat node array sized to the grid and drops
//! it on return. Nothing is cached between searches, so any number of
//! searches may run in parallel over one shared grid.
//!
//! ```
//! use gridpath_core::{Point, WalkMask};
//! use gridpath_paths::{astar, FrontierKind, NeighborTemplate, SearchOutcome};
//!
//! let grid = WalkMask::from_rows(&[
//!     "....",
//!     "###.",
//!     "....",
//! ]).unwrap();
//! let outcome = astar(
//!     &grid,
//!     Point::new(0, 0),
//!     Point::new(0, 2),
//!     &NeighborTemplate::octile(),
//!     FrontierKind::Scan,
//! ).unwrap();
//! let SearchOutcome::Found(path) = outcome else { panic!("no path") };
//! assert_eq!(path.start(), Point::new(0, 0));
//! assert_eq!(path.target(), Point::new(0, 2));
//! ```

mod astar;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod node;
mod path;
mod search;
mod traits;

pub use astar::{astar, validate};
pub use distance::{chebyshev, manhattan, step_cost};
pub use error::{InvalidRequest, Result, SearchError};
pub use frontier::FrontierKind;
pub use neighbors::{NeighborTemplate, TemplateKind};
pub use node::UNREACHABLE;
pub use path::{Path, SearchOutcome};
pub use search::{SearchRequest, find_path};
pub use traits::Passable;
