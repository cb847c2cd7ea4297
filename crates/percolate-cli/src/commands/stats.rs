use crate::cli::StatsArgs;
use crate::config::build_stats_config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use percolate::engine::estimator::PercolationStats;
use percolate::engine::progress::ProgressReporter;
use percolate::workflows;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::info;

pub fn run(args: StatsArgs) -> Result<()> {
    info!("Resolving configuration...");
    let config = build_stats_config(&args)?;

    let progress_handler = if config.show_progress {
        CliProgressHandler::new()
    } else {
        CliProgressHandler::hidden()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the estimation workflow...");
    let stats = workflows::estimate::run(&config.core_config, &reporter)?;

    if let Some(path) = &config.trials_csv {
        info!("Writing {} trial outcome(s) to {:?}", stats.trial_count(), path);
        let writer = BufWriter::new(File::create(path)?);
        workflows::estimate::write_trials_csv(&stats, writer)?;
    }

    let stdout = io::stdout();
    write_summary(&stats, &mut stdout.lock())?;
    Ok(())
}

/// Writes the three-line summary: mean, standard deviation and the 95%
/// confidence interval.
pub fn write_summary<W: Write>(stats: &PercolationStats, out: &mut W) -> io::Result<()> {
    writeln!(out, "mean = {}", stats.mean())?;
    writeln!(out, "stddev = {}", stats.stddev())?;
    writeln!(
        out,
        "95% confidence interval = {}, {}",
        stats.confidence_lo(),
        stats.confidence_hi()
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn summary_has_exactly_three_labelled_lines() {
        let stats = PercolationStats::with_rng(10, 5, &mut StdRng::seed_from_u64(3)).unwrap();
        let mut out = Vec::new();
        write_summary(&stats, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("mean = {}", stats.mean()));
        assert_eq!(lines[1], format!("stddev = {}", stats.stddev()));
        assert!(lines[2].starts_with("95% confidence interval = "));

        let bounds: Vec<f64> = lines[2]["95% confidence interval = ".len()..]
            .split(", ")
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(bounds, vec![stats.confidence_lo(), stats.confidence_hi()]);
    }

    #[test]
    fn single_site_grid_prints_degenerate_interval() {
        let stats = PercolationStats::with_rng(1, 3, &mut StdRng::seed_from_u64(0)).unwrap();
        let mut out = Vec::new();
        write_summary(&stats, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "mean = 1\nstddev = 0\n95% confidence interval = 1, 1\n"
        );
    }

    #[test]
    fn run_writes_trials_csv_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("trials.csv");
        let cli = Cli::parse_from([
            "percolate",
            "stats",
            "6",
            "4",
            "--seed",
            "12",
            "--no-progress",
            "--trials-out",
            csv_path.to_str().unwrap(),
        ]);
        let Commands::Stats(args) = cli.command else {
            panic!("Expected 'stats' subcommand");
        };

        run(args).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("trial,opened_sites,fraction"));
        assert_eq!(lines.count(), 4);
    }
}
