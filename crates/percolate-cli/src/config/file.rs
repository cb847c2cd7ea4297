use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The optional TOML configuration file. Every field may be omitted.
///
/// ```toml
/// [random]
/// seed = 42
///
/// [estimation]
/// trials-csv = "trials.csv"
/// progress = false
///
/// [subset]
/// input = "tokens.txt"
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub random: Option<FileRandomConfig>,
    pub estimation: Option<FileEstimationConfig>,
    pub subset: Option<FileSubsetConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileRandomConfig {
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileEstimationConfig {
    pub trials_csv: Option<PathBuf>,
    pub progress: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSubsetConfig {
    pub input: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }

    pub fn trials_csv(&self) -> Option<&Path> {
        self.estimation
            .as_ref()
            .and_then(|e| e.trials_csv.as_deref())
    }

    pub fn progress(&self) -> Option<bool> {
        self.estimation.as_ref().and_then(|e| e.progress)
    }

    pub fn subset_input(&self) -> Option<&Path> {
        self.subset.as_ref().and_then(|s| s.input.as_deref())
    }
}
