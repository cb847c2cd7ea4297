//! # percolate
//!
//! Monte-Carlo estimation of the site-percolation threshold, together with the
//! containers used to sample from token streams.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** The [`DisjointSet`](core::union_find::DisjointSet)
//!   capability and the [`PercolationGrid`](core::grid::PercolationGrid) built on it.
//!
//! - **[`collections`]: Containers.** A linked [`Deque`](collections::Deque) and a
//!   uniformly sampling [`RandomizedQueue`](collections::RandomizedQueue).
//!
//! - **[`engine`]: The Logic Core.** Configuration, trial simulation, statistics,
//!   progress reporting and errors.
//!
//! - **[`workflows`]: The Public API.** Threshold estimation and subset sampling
//!   driven by validated configurations.
//!
//! ```
//! use percolate::engine::estimator::PercolationStats;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let stats = PercolationStats::with_rng(10, 5, &mut StdRng::seed_from_u64(1))?;
//! assert!(stats.mean() > 0.0 && stats.mean() <= 1.0);
//! # Ok::<(), percolate::engine::error::EngineError>(())
//! ```

pub mod collections;
pub mod core;
pub mod engine;
pub mod workflows;
