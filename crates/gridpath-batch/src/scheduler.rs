//! Periodic batches: a [`Ticker`] that fans out a [`BatchRunner`] batch per tick.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};

use log::{info, trace};

use gridpath_core::WalkMask;
use gridpath_paths::{NeighborTemplate, SearchRequest};

use crate::config::BatchConfig;
use crate::error::Result;
use crate::runner::{BatchReport, BatchRunner};
use crate::ticker::Ticker;

/// Issues `batch_size` identical searches over a shared grid.
#[derive(Debug)]
pub struct BatchScheduler {
    config: BatchConfig,
    grid: Arc<WalkMask>,
    template: NeighborTemplate,
    runner: BatchRunner,
}

impl BatchScheduler {
    /// Validate `config` and prepare the worker pool.
    ///
    /// A start or target that does not fit `grid` is not a configuration
    /// error: each request of every batch reports it as an invalid request.
    pub fn new(config: BatchConfig, grid: impl Into<Arc<WalkMask>>) -> Result<Self> {
        config.validate()?;
        let runner = BatchRunner::new(config.threads)?;
        Ok(Self {
            template: config.template(),
            grid: grid.into(),
            runner,
            config,
        })
    }

    /// Scheduler over the all-walkable grid described by `config`.
    pub fn from_config(config: BatchConfig) -> Result<Self> {
        let grid = config.blank_grid()?;
        Self::new(config, grid)
    }

    #[inline]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Arc<WalkMask> {
        &self.grid
    }

    /// The requests of one batch.
    pub fn requests(&self) -> Vec<SearchRequest> {
        (0..self.config.batch_size)
            .map(|_| {
                SearchRequest::new(
                    Arc::clone(&self.grid),
                    self.config.start,
                    self.config.target,
                    self.template.clone(),
                )
                .with_frontier(self.config.frontier)
            })
            .collect()
    }

    /// Run one batch now and wait for it.
    pub fn tick(&self) -> BatchReport {
        self.runner.run(&self.requests())
    }

    /// Start firing a batch every `interval_secs`. Reports arrive on
    /// [`SchedulerHandle::reports`].
    pub fn start(self) -> Result<SchedulerHandle> {
        let interval = self.config.interval()?;
        info!(
            "scheduling {} searches {} -> {} every {interval:?} on {} threads",
            self.config.batch_size,
            self.config.start,
            self.config.target,
            self.runner.threads()
        );
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::start(interval, move |n| {
            let report = self.tick();
            if tx.send(report).is_err() {
                trace!("batch {n} report dropped, no receiver");
            }
        })?;
        Ok(SchedulerHandle {
            ticker,
            reports: rx,
        })
    }
}

/// A running scheduler.
pub struct SchedulerHandle {
    ticker: Ticker,
    reports: Receiver<BatchReport>,
}

impl SchedulerHandle {
    /// One report per finished batch, in order.
    #[inline]
    pub fn reports(&self) -> &Receiver<BatchReport> {
        &self.reports
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Stop scheduling new batches. A batch already running completes first.
    /// Returns the number of batches that ran.
    pub fn stop(self) -> Result<u64> {
        self.ticker.stop()
    }
}
