//! Parallel execution of one batch with a completion barrier.

use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;

use gridpath_paths::{SearchError, SearchOutcome, SearchRequest};

use crate::error::Result;

/// Per-request outcomes of one batch, in request order, plus wall time.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<std::result::Result<SearchOutcome, SearchError>>,
    /// From fan-out until the last search finished.
    pub elapsed: Duration,
}

impl BatchReport {
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Requests that returned a path.
    pub fn found(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Ok(SearchOutcome::Found(_))))
            .count()
    }

    /// Requests whose target was unreachable.
    pub fn no_path(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Ok(SearchOutcome::NoPath)))
            .count()
    }

    /// Requests rejected or aborted with an error.
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_err()).count()
    }
}

/// Runs batches of independent searches on a rayon pool.
#[derive(Debug)]
pub struct BatchRunner {
    pool: Option<rayon::ThreadPool>,
}

impl BatchRunner {
    /// `None` runs on rayon's global pool; `Some(n)` builds a dedicated pool
    /// of `n` workers.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let pool = match threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .thread_name(|i| format!("gridpath-worker-{i}"))
                    .build()?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    /// Worker threads available to a batch.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// Run every request in parallel and wait for all of them.
    ///
    /// One request's error never affects the others; each outcome is reported
    /// in its own slot.
    pub fn run(&self, requests: &[SearchRequest]) -> BatchReport {
        let started = Instant::now();
        let search_all = || -> Vec<_> { requests.par_iter().map(SearchRequest::run).collect() };
        let outcomes = match &self.pool {
            Some(pool) => pool.install(search_all),
            None => search_all(),
        };
        let report = BatchReport {
            outcomes,
            elapsed: started.elapsed(),
        };

        for (i, outcome) in report.outcomes.iter().enumerate() {
            if let Err(e) = outcome {
                warn!("batch request {i} failed: {e}");
            }
        }
        info!(
            "Took: {:.3} ms ({} searches: {} found, {} no path, {} failed)",
            report.elapsed_ms(),
            report.len(),
            report.found(),
            report.no_path(),
            report.failed()
        );
        report
    }
}
