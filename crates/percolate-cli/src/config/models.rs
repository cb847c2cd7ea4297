use percolate::engine::config as core_config;
use std::path::PathBuf;

pub struct StatsAppConfig {
    pub core_config: core_config::EstimationConfig,
    pub trials_csv: Option<PathBuf>,
    pub show_progress: bool,
}

pub struct SubsetAppConfig {
    pub core_config: core_config::SubsetConfig,
    pub input: Option<PathBuf>,
}
