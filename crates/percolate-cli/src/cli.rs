use crate::utils::parser::parse_positive;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "percolate - Monte-Carlo estimation of the percolation threshold and uniform subset sampling.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the percolation threshold of an N-by-N grid over T trials.
    Stats(StatsArgs),
    /// Print K tokens chosen uniformly at random from standard input.
    Subset(SubsetArgs),
}

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Grid size; the simulation runs on an N-by-N grid.
    #[arg(value_name = "N", value_parser = parse_positive, allow_negative_numbers = true)]
    pub grid_size: usize,

    /// Number of independent trials.
    #[arg(value_name = "T", value_parser = parse_positive, allow_negative_numbers = true)]
    pub trials: usize,

    /// Seed for the random generator, for reproducible estimates.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write every trial's opened-site count and fraction to a CSV file.
    #[arg(long, value_name = "PATH")]
    pub trials_out: Option<PathBuf>,

    /// Do not draw a progress bar on stderr.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S random.seed=42
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `subset` subcommand.
#[derive(Args, Debug)]
pub struct SubsetArgs {
    /// Number of tokens to print; must not exceed the number of tokens read.
    #[arg(value_name = "K")]
    pub count: usize,

    /// Read tokens from a file instead of standard input.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Seed for the random generator, for reproducible samples.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S random.seed=42
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_takes_grid_size_and_trials_positionally() {
        let cli = Cli::try_parse_from(["percolate", "stats", "200", "100"]).unwrap();
        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.grid_size, 200);
                assert_eq!(args.trials, 100);
                assert!(args.seed.is_none());
                assert!(!args.no_progress);
            }
            _ => panic!("Expected 'stats' subcommand"),
        }
    }

    #[test]
    fn stats_rejects_non_positive_or_non_numeric_arguments() {
        for bad in [["0", "10"], ["10", "0"], ["-3", "10"], ["ten", "10"], ["10", "2.5"]] {
            let result = Cli::try_parse_from(["percolate", "stats", bad[0], bad[1]]);
            assert!(result.is_err(), "accepted {:?}", bad);
        }
        assert!(Cli::try_parse_from(["percolate", "stats", "10"]).is_err());
    }

    #[test]
    fn subset_accepts_zero_and_global_flags() {
        let cli =
            Cli::try_parse_from(["percolate", "subset", "0", "--seed", "9", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Subset(args) => {
                assert_eq!(args.count, 0);
                assert_eq!(args.seed, Some(9));
                assert!(args.input.is_none());
            }
            _ => panic!("Expected 'subset' subcommand"),
        }
    }

    #[test]
    fn subset_rejects_negative_count() {
        assert!(Cli::try_parse_from(["percolate", "subset", "-1"]).is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["percolate", "-q", "-v", "subset", "1"]).is_err());
    }
}
