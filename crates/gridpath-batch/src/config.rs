//! Batch scheduler configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! interval_secs = 0.5
//! batch_size = 8
//! neighbors = "cardinal"
//! target = { x = 9, y = 9 }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use gridpath_core::{Point, WalkMask};
use gridpath_paths::{FrontierKind, NeighborTemplate, TemplateKind};

use crate::error::{BatchError, Result};

/// Longest accepted `interval_secs`: one week.
pub const MAX_INTERVAL_SECS: f64 = 7.0 * 24.0 * 60.0 * 60.0;

/// Settings for the periodic search batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    /// Seconds between batch triggers.
    pub interval_secs: f64,
    /// Searches issued per batch.
    pub batch_size: usize,
    pub start: Point,
    pub target: Point,
    /// Size of the all-walkable grid built by [`blank_grid`](Self::blank_grid).
    pub grid_width: i32,
    pub grid_height: i32,
    pub neighbors: TemplateKind,
    pub frontier: FrontierKind,
    /// Dedicated worker thread count. `None` shares rayon's global pool.
    pub threads: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            interval_secs: 1.0,
            batch_size: 5,
            start: Point::new(0, 0),
            target: Point::new(19, 19),
            grid_width: 20,
            grid_height: 20,
            neighbors: TemplateKind::Octile,
            frontier: FrontierKind::Scan,
            threads: None,
        }
    }
}

impl BatchConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.interval()?;
        if self.batch_size == 0 {
            return Err(BatchError::Config("batch_size must be at least 1".into()));
        }
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(BatchError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if self.threads == Some(0) {
            return Err(BatchError::Config("threads must be at least 1".into()));
        }
        Ok(())
    }

    /// `interval_secs` as a `Duration`, if it is in `(0, MAX_INTERVAL_SECS]`.
    pub fn interval(&self) -> Result<Duration> {
        let secs = self.interval_secs;
        if !(secs > 0.0 && secs <= MAX_INTERVAL_SECS) {
            return Err(BatchError::Config(format!(
                "interval_secs must be in (0, {MAX_INTERVAL_SECS}], got {secs}"
            )));
        }
        Duration::try_from_secs_f64(secs)
            .map_err(|e| BatchError::Config(format!("interval_secs {secs}: {e}")))
    }

    #[inline]
    pub fn template(&self) -> NeighborTemplate {
        self.neighbors.template()
    }

    /// A fully walkable `grid_width × grid_height` grid.
    pub fn blank_grid(&self) -> Result<WalkMask> {
        Ok(WalkMask::new(self.grid_width, self.grid_height)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_reference_batch() {
        let c = BatchConfig::default();
        assert_eq!(c.interval().unwrap(), Duration::from_secs(1));
        assert_eq!(c.batch_size, 5);
        assert_eq!((c.start, c.target), (Point::new(0, 0), Point::new(19, 19)));
        assert_eq!(c.blank_grid().unwrap().len(), 400);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = BatchConfig::from_toml_str(
            r#"
            interval_secs = 0.25
            neighbors = "hex"
            frontier = "heap"
            target = { x = 4, y = 7 }
            threads = 2
            "#,
        )
        .unwrap();
        assert_eq!(c.interval().unwrap(), Duration::from_millis(250));
        assert_eq!(c.template(), NeighborTemplate::hex());
        assert_eq!(c.frontier, FrontierKind::Heap);
        assert_eq!(c.target, Point::new(4, 7));
        assert_eq!(c.threads, Some(2));
        assert_eq!(c.batch_size, 5);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(BatchConfig::from_toml_str("").unwrap(), BatchConfig::default());
    }

    #[test]
    fn rejects_bad_values() {
        for doc in [
            "batch_size = 0",
            "interval_secs = 0.0",
            "interval_secs = -1.0",
            "interval_secs = 1e30",
            "interval_secs = nan",
            "interval_secs = inf",
            "grid_width = 0",
            "threads = 0",
        ] {
            assert!(
                matches!(BatchConfig::from_toml_str(doc), Err(BatchError::Config(_))),
                "{doc} should be rejected"
            );
        }
    }

    #[test]
    fn interval_on_unvalidated_config_is_an_error() {
        let c = BatchConfig {
            interval_secs: 1e30,
            ..BatchConfig::default()
        };
        assert!(matches!(c.interval(), Err(BatchError::Config(_))));
        let week = BatchConfig {
            interval_secs: MAX_INTERVAL_SECS,
            ..BatchConfig::default()
        };
        assert_eq!(week.interval().unwrap(), Duration::from_secs(604_800));
    }

    #[test]
    fn rejects_unknown_keys_and_kinds() {
        assert!(matches!(
            BatchConfig::from_toml_str("batchsize = 3"),
            Err(BatchError::Parse(_))
        ));
        assert!(matches!(
            BatchConfig::from_toml_str(r#"neighbors = "diagonal""#),
            Err(BatchError::Parse(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            BatchConfig::load("/nonexistent/gridpath.toml"),
            Err(BatchError::Io(_))
        ));
    }
}
