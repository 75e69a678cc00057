//! Periodic, parallel batches of grid searches.
//!
//! A [`BatchScheduler`] owns a shared read-only grid and, once started,
//! fires a batch of independent searches every configured interval. Each
//! batch fans out across a rayon pool, waits for every search, and logs the
//! wall time in milliseconds.
//!
//! Successive batches never overlap: the [`Ticker`] runs each batch on its
//! control thread and only schedules the next one after it returns.

pub mod config;
pub mod error;
pub mod runner;
pub mod scheduler;
pub mod ticker;

pub use config::BatchConfig;
pub use error::{BatchError, Result};
pub use runner::{BatchReport, BatchRunner};
pub use scheduler::{BatchScheduler, SchedulerHandle};
pub use ticker::Ticker;
