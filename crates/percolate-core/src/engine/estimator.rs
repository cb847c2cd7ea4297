use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use super::stats;
use super::trial::{TrialOutcome, run_trial};
use crate::core::grid::{GridError, MAX_GRID_SIZE};
use crate::core::union_find::{DisjointSet, WeightedQuickUnion};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

/// Monte-Carlo estimate of the percolation threshold.
///
/// Each of the `trials` runs opens random sites of a fresh grid until it
/// percolates and records the fraction of sites opened. The summary
/// statistics are computed once, when the simulation finishes.
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    outcomes: Vec<TrialOutcome>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Runs `trials` experiments on a `grid_size` x `grid_size` grid using an
    /// entropy-seeded generator.
    pub fn new(grid_size: usize, trials: usize) -> Result<Self, EngineError> {
        Self::with_rng(grid_size, trials, &mut StdRng::from_entropy())
    }

    /// Runs the experiments drawing sites from `rng`.
    pub fn with_rng<R: Rng>(
        grid_size: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        Self::simulate::<WeightedQuickUnion, R>(grid_size, trials, rng, &ProgressReporter::new())
    }

    /// Runs the experiments on grids backed by `U`, reporting each finished
    /// trial to `reporter`.
    ///
    /// Both arguments are validated before anything is reported. The summary
    /// [`Progress::Message`] is sent before [`Progress::EstimationFinish`], so
    /// it always reaches a live progress display.
    pub fn simulate<U, R>(
        grid_size: usize,
        trials: usize,
        rng: &mut R,
        reporter: &ProgressReporter,
    ) -> Result<Self, EngineError>
    where
        U: DisjointSet,
        R: Rng,
    {
        if grid_size == 0 {
            return Err(GridError::InvalidSize(grid_size).into());
        }
        if grid_size > MAX_GRID_SIZE {
            return Err(GridError::TooLarge(grid_size).into());
        }
        if trials == 0 {
            return Err(EngineError::InvalidTrialCount(trials));
        }

        reporter.report(Progress::EstimationStart { grid_size, trials });

        let mut outcomes = Vec::with_capacity(trials);
        for trial in 0..trials {
            let outcome = run_trial::<U, R>(grid_size, trial, rng)?;
            reporter.report(Progress::TrialComplete {
                trial,
                fraction: outcome.fraction,
            });
            outcomes.push(outcome);
        }

        let fractions: Vec<f64> = outcomes.iter().map(|o| o.fraction).collect();
        let mean = stats::mean(&fractions);
        let stddev = stats::stddev(&fractions);
        debug!(grid_size, trials, mean, stddev, "Estimation finished");

        reporter.report(Progress::Message(format!(
            "Estimated threshold {:.4} over {} trial(s)",
            mean, trials
        )));
        reporter.report(Progress::EstimationFinish);

        Ok(Self {
            grid_size,
            outcomes,
            mean,
            stddev,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trial_count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn trials(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the percolation threshold.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        stats::confidence_interval(self.mean, self.stddev, self.trial_count()).0
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        stats::confidence_interval(self.mean, self.stddev, self.trial_count()).1
    }
}
