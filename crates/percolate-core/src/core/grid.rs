use super::union_find::{DisjointSet, WeightedQuickUnion};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Invalid grid size {0}: the grid must have at least one row")]
    InvalidSize(usize),

    #[error("Grid size {0} exceeds the largest supported size {max}", max = MAX_GRID_SIZE)]
    TooLarge(usize),

    #[error("Site ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// Largest supported side length. Each site costs about 33 bytes across the
/// open flags and both disjoint sets, so this caps a grid near 2.2 GB.
pub const MAX_GRID_SIZE: usize = 8192;

const VIRTUAL_TOP: usize = 0;

/// An N-by-N grid of sites, each either open or blocked.
///
/// Sites are addressed with 1-indexed `(row, col)` pairs. Connectivity is
/// tracked in two disjoint-set structures: `connectivity` includes a virtual
/// bottom node and answers [`percolates`](Self::percolates), while `fullness`
/// never sees the bottom node, so [`is_full`](Self::is_full) cannot report
/// sites that are only reachable through it.
#[derive(Debug, Clone)]
pub struct PercolationGrid<U = WeightedQuickUnion> {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    virtual_bottom: usize,
    connectivity: U,
    fullness: U,
}

impl PercolationGrid<WeightedQuickUnion> {
    /// Creates an N-by-N grid with every site blocked.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Self::with_disjoint_set(size)
    }
}

impl<U: DisjointSet> PercolationGrid<U> {
    /// Creates an N-by-N grid backed by the given [`DisjointSet`] implementation.
    pub fn with_disjoint_set(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        if size > MAX_GRID_SIZE {
            return Err(GridError::TooLarge(size));
        }
        let sites = size * size;

        let virtual_bottom = sites + 1;
        Ok(Self {
            size,
            open: vec![false; sites],
            open_count: 0,
            virtual_bottom,
            connectivity: U::with_len(sites + 2),
            fullness: U::with_len(sites + 1),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens the site at `(row, col)` and joins it to its open neighbours.
    ///
    /// Opening an already open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let site = self.site_index(row, col)?;
        if self.open[site - 1] {
            return Ok(());
        }
        self.open[site - 1] = true;
        self.open_count += 1;

        if row == 1 {
            self.connectivity.union(site, VIRTUAL_TOP);
            self.fullness.union(site, VIRTUAL_TOP);
        }
        if row == self.size {
            self.connectivity.union(site, self.virtual_bottom);
        }

        let neighbours = [
            (row > 1).then(|| (row - 1, col)),
            (row < self.size).then(|| (row + 1, col)),
            (col > 1).then(|| (row, col - 1)),
            (col < self.size).then(|| (row, col + 1)),
        ];
        for (n_row, n_col) in neighbours.into_iter().flatten() {
            let neighbour = self.linear_index(n_row, n_col);
            if self.open[neighbour - 1] {
                self.connectivity.union(site, neighbour);
                self.fullness.union(site, neighbour);
            }
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let site = self.site_index(row, col)?;
        Ok(self.open[site - 1])
    }

    /// Whether the site is connected to the top row through open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let site = self.site_index(row, col)?;
        Ok(self.fullness.connected(site, VIRTUAL_TOP))
    }

    /// Whether an open path joins the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.connectivity.connected(VIRTUAL_TOP, self.virtual_bottom)
    }

    fn site_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row == 0 || row > self.size || col == 0 || col > self.size {
            return Err(GridError::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.linear_index(row, col))
    }

    #[inline]
    fn linear_index(&self, row: usize, col: usize) -> usize {
        self.size * (row - 1) + col
    }
}
