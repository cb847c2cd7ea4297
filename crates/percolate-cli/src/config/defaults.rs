use std::path::PathBuf;

pub struct DefaultsConfig {
    pub seed: Option<u64>,
    pub show_progress: bool,
    pub trials_csv: Option<PathBuf>,
    pub subset_input: Option<PathBuf>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_progress: true,
            trials_csv: None,
            subset_input: None,
        }
    }
}
