//! # Workflows Module
//!
//! Top-level entry points tying the engine and the containers together.
//!
//! - **Threshold Estimation** ([`estimate`]) - Runs the Monte-Carlo percolation
//!   experiment described by an [`EstimationConfig`](crate::engine::config::EstimationConfig)
//!   and exports per-trial samples.
//! - **Subset Sampling** ([`subset`]) - Emits `k` distinct tokens drawn uniformly
//!   at random from a token stream.

pub mod estimate;
pub mod subset;
