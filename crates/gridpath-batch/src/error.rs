//! Error types for the batch scheduler.

use gridpath_core::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("ticker thread panicked")]
    TickerPanicked,
}

pub type Result<T> = std::result::Result<T, BatchError>;
