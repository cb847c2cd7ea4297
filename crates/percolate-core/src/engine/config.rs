use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimationConfig {
    pub grid_size: usize,
    pub trials: usize,
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct EstimationConfigBuilder {
    grid_size: Option<usize>,
    trials: Option<usize>,
    seed: Option<u64>,
}

impl EstimationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<EstimationConfig, ConfigError> {
        let grid_size = self
            .grid_size
            .ok_or(ConfigError::MissingParameter("grid_size"))?;
        let trials = self.trials.ok_or(ConfigError::MissingParameter("trials"))?;

        if grid_size == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "grid_size",
                reason: "the grid must have at least one row".to_string(),
            });
        }
        if trials == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "trials",
                reason: "at least one trial is required".to_string(),
            });
        }

        Ok(EstimationConfig {
            grid_size,
            trials,
            seed: self.seed,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetConfig {
    pub count: usize,
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct SubsetConfigBuilder {
    count: Option<usize>,
    seed: Option<u64>,
}

impl SubsetConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<SubsetConfig, ConfigError> {
        Ok(SubsetConfig {
            count: self.count.ok_or(ConfigError::MissingParameter("count"))?,
            seed: self.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimation_builder_produces_config() {
        let config = EstimationConfigBuilder::new()
            .grid_size(200)
            .trials(100)
            .seed(Some(7))
            .build()
            .unwrap();
        assert_eq!(
            config,
            EstimationConfig {
                grid_size: 200,
                trials: 100,
                seed: Some(7),
            }
        );
    }

    #[test]
    fn estimation_builder_requires_grid_size_and_trials() {
        assert_eq!(
            EstimationConfigBuilder::new().trials(3).build(),
            Err(ConfigError::MissingParameter("grid_size"))
        );
        assert_eq!(
            EstimationConfigBuilder::new().grid_size(3).build(),
            Err(ConfigError::MissingParameter("trials"))
        );
    }

    #[test]
    fn estimation_builder_rejects_zero_values() {
        let err = EstimationConfigBuilder::new()
            .grid_size(0)
            .trials(5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                name: "grid_size",
                ..
            }
        ));

        let err = EstimationConfigBuilder::new()
            .grid_size(5)
            .trials(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidParameter { name: "trials", .. }));
    }

    #[test]
    fn subset_builder_allows_zero_count() {
        let config = SubsetConfigBuilder::new().count(0).build().unwrap();
        assert_eq!(config.count, 0);
        assert_eq!(config.seed, None);
        assert_eq!(
            SubsetConfigBuilder::new().build(),
            Err(ConfigError::MissingParameter("count"))
        );
    }
}
