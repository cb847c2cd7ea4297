use crate::core::union_find::WeightedQuickUnion;
use crate::engine::config::EstimationConfig;
use crate::engine::error::EngineError;
use crate::engine::estimator::PercolationStats;
use crate::engine::progress::ProgressReporter;
use crate::engine::utils::sampling::rng_from_seed;
use std::io::Write;
use tracing::{info, instrument};

/// Runs the percolation experiment described by `config`.
#[instrument(
    skip_all,
    name = "estimate_workflow",
    fields(grid_size = config.grid_size, trials = config.trials)
)]
pub fn run(
    config: &EstimationConfig,
    reporter: &ProgressReporter,
) -> Result<PercolationStats, EngineError> {
    info!("Starting percolation threshold estimation.");
    let mut rng = rng_from_seed(config.seed);

    let stats = PercolationStats::simulate::<WeightedQuickUnion, _>(
        config.grid_size,
        config.trials,
        &mut rng,
        reporter,
    )?;

    info!(
        "Estimation complete: mean = {:.6}, stddev = {:.6}.",
        stats.mean(),
        stats.stddev()
    );
    Ok(stats)
}

/// Writes one CSV row per trial: `trial,opened_sites,fraction`.
pub fn write_trials_csv<W: Write>(stats: &PercolationStats, writer: W) -> Result<(), EngineError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in stats.trials() {
        csv_writer.serialize(outcome)?;
    }
    csv_writer.flush()?;
    Ok(())
}
