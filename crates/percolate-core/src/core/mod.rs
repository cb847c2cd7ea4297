//! # Core Module
//!
//! Foundation layer: the disjoint-set capability and the percolation grid
//! built on top of it.
//!
//! - [`union_find`] - The [`DisjointSet`](union_find::DisjointSet) trait with a
//!   weighted quick-union implementation and an eager quick-find reference.
//! - [`grid`] - [`PercolationGrid`](grid::PercolationGrid), an N-by-N site grid
//!   with virtual top and bottom nodes answering open/full/percolates queries.
//!
//! ```
//! use percolate::core::grid::PercolationGrid;
//!
//! let mut grid = PercolationGrid::new(2)?;
//! grid.open(1, 1)?;
//! grid.open(2, 1)?;
//! assert!(grid.percolates());
//! # Ok::<(), percolate::core::grid::GridError>(())
//! ```

pub mod grid;
pub mod union_find;
