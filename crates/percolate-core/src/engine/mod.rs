//! # Engine Module
//!
//! Stateful machinery behind the workflows: configuration, error handling,
//! progress reporting, descriptive statistics, and the Monte-Carlo simulation
//! itself.
//!
//! - **Configuration** ([`config`]) - Validated run parameters and their builders
//! - **Simulation** ([`trial`], [`estimator`]) - Single percolation trials and the
//!   [`PercolationStats`](estimator::PercolationStats) estimator built from them
//! - **Statistics** ([`stats`]) - Mean, sample standard deviation, and confidence intervals
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - The [`EngineError`](error::EngineError) type

pub mod config;
pub mod error;
pub mod estimator;
pub mod progress;
pub mod stats;
pub mod trial;
pub(crate) mod utils;
