mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_stats_config, build_subset_config};
