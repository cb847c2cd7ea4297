use super::config::ConfigError;
use crate::collections::CollectionError;
use crate::core::grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid trial count {0}: at least one trial is required")]
    InvalidTrialCount(usize),

    #[error("Grid operation failed: {source}")]
    Grid {
        #[from]
        source: GridError,
    },

    #[error("Container operation failed: {source}")]
    Collection {
        #[from]
        source: CollectionError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Requested {requested} item(s) but only {available} were provided")]
    InsufficientItems { requested: usize, available: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write trial data: {0}")]
    Csv(#[from] csv::Error),
}
