//! Periodic search batch benchmark.
//!
//! Usage: `tick-bench [CONFIG.toml] [--batches N]`
//!
//! Without a config file the reference batch runs: five searches from (0, 0)
//! to (19, 19) on an open 20x20 grid every second. Each batch logs its wall
//! time; set `RUST_LOG=debug` for per-search detail.

use std::time::Duration;

use log::{info, warn};

use gridpath_batch::{BatchConfig, BatchScheduler};

const DEFAULT_BATCHES: u64 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match args.first().filter(|a| !a.starts_with("--")) {
        Some(path) => {
            info!("loading configuration from {path}");
            BatchConfig::load(path)?
        }
        None => {
            info!("using reference configuration");
            BatchConfig::default()
        }
    };

    let batches = match args.iter().position(|a| a == "--batches") {
        Some(i) => args
            .get(i + 1)
            .ok_or("--batches needs a value")?
            .parse::<u64>()?,
        None => DEFAULT_BATCHES,
    };

    // Allow for one slow batch on top of the interval before giving up.
    let patience = config.interval()?.saturating_mul(2) + Duration::from_secs(5);
    let handle = BatchScheduler::from_config(config)?.start()?;

    let mut total_ms = 0.0;
    let mut received = 0u64;
    while received < batches {
        match handle.reports().recv_timeout(patience) {
            Ok(report) => {
                total_ms += report.elapsed_ms();
                received += 1;
            }
            Err(e) => {
                warn!("no batch report within {patience:?}: {e}");
                break;
            }
        }
    }

    let ran = handle.stop()?;
    if received > 0 {
        info!(
            "{received} batches reported ({ran} ran), mean {:.3} ms per batch",
            total_ms / received as f64
        );
    }
    Ok(())
}
