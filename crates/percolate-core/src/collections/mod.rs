//! # Collections Module
//!
//! Generic linear containers.
//!
//! - [`deque`] - [`Deque`](deque::Deque), a doubly-linked double-ended queue with
//!   constant-time insertion and removal at both ends.
//! - [`randomized_queue`] - [`RandomizedQueue`](randomized_queue::RandomizedQueue),
//!   a resizable-array queue whose removals and samples pick uniformly at random.
//!
//! Removing from an empty container fails with [`CollectionError::Empty`].

pub mod deque;
mod error;
pub mod randomized_queue;

pub use deque::Deque;
pub use error::CollectionError;
pub use randomized_queue::RandomizedQueue;
