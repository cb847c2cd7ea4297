use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileEstimationConfig, FileRandomConfig, FileSubsetConfig};
use super::models::{StatsAppConfig, SubsetAppConfig};
use crate::cli::{StatsArgs, SubsetArgs};
use crate::error::{CliError, Result};
use percolate::engine::config as core_config;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the `stats` settings. Command-line flags win over `--set`
/// values, which win over the config file, which wins over the defaults.
pub fn build_stats_config(args: &StatsArgs) -> Result<StatsAppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(load_file_config(args.config.as_deref())?, &args.set_values)?;

    let seed = args.seed.or(file_config.seed()).or(defaults.seed);
    let show_progress = if args.no_progress {
        false
    } else {
        file_config.progress().unwrap_or(defaults.show_progress)
    };
    let trials_csv = args
        .trials_out
        .clone()
        .or_else(|| file_config.trials_csv().map(Path::to_path_buf))
        .or(defaults.trials_csv);

    let core_config = core_config::EstimationConfigBuilder::new()
        .grid_size(args.grid_size)
        .trials(args.trials)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, show_progress, ?trials_csv, "Resolved stats configuration");
    Ok(StatsAppConfig {
        core_config,
        trials_csv,
        show_progress,
    })
}

/// Resolves the `subset` settings with the same precedence as
/// [`build_stats_config`].
pub fn build_subset_config(args: &SubsetArgs) -> Result<SubsetAppConfig> {
    let defaults = DefaultsConfig::default();
    let file_config = apply_set_values(load_file_config(args.config.as_deref())?, &args.set_values)?;

    let seed = args.seed.or(file_config.seed()).or(defaults.seed);
    let input = args
        .input
        .clone()
        .or_else(|| file_config.subset_input().map(Path::to_path_buf))
        .or(defaults.subset_input);

    let core_config = core_config::SubsetConfigBuilder::new()
        .count(args.count)
        .seed(seed)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    debug!(?core_config, ?input, "Resolved subset configuration");
    Ok(SubsetAppConfig { core_config, input })
}

fn load_file_config(path: Option<&Path>) -> Result<FileConfig> {
    match path {
        Some(path) => FileConfig::from_file(path),
        None => Ok(FileConfig::default()),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;

        match key.trim() {
            "random.seed" => {
                config
                    .random
                    .get_or_insert_with(FileRandomConfig::default)
                    .seed = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "estimation.trials-csv" => {
                config
                    .estimation
                    .get_or_insert_with(FileEstimationConfig::default)
                    .trials_csv = Some(PathBuf::from(value_str.trim()));
            }
            "estimation.progress" => {
                config
                    .estimation
                    .get_or_insert_with(FileEstimationConfig::default)
                    .progress = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!("Invalid boolean value for {}: {}", key, value_str))
                })?);
            }
            "subset.input" => {
                config
                    .subset
                    .get_or_insert_with(FileSubsetConfig::default)
                    .input = Some(PathBuf::from(value_str.trim()));
            }
            other => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    other
                )));
            }
        }
    }
    Ok(config)
}
