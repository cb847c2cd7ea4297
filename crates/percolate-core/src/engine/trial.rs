use super::utils::sampling::draw_site;
use crate::core::grid::{GridError, PercolationGrid};
use crate::core::union_find::DisjointSet;
use rand::Rng;
use serde::Serialize;
use tracing::trace;

/// The result of one percolation trial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialOutcome {
    pub trial: usize,
    pub opened_sites: usize,
    pub fraction: f64,
}

/// Opens random sites of a fresh `size` x `size` grid until it percolates.
///
/// Draws that land on an already open site are rejected and redrawn, so every
/// counted draw opens a new site. The loop ends after at most `size²` opens.
pub fn run_trial<U, R>(size: usize, trial: usize, rng: &mut R) -> Result<TrialOutcome, GridError>
where
    U: DisjointSet,
    R: Rng,
{
    let mut grid = PercolationGrid::<U>::with_disjoint_set(size)?;
    let mut opened_sites = 0;
    let mut rejected_draws = 0usize;

    while !grid.percolates() {
        let (row, col) = draw_site(rng, size);
        if grid.is_open(row, col)? {
            rejected_draws += 1;
            continue;
        }
        grid.open(row, col)?;
        opened_sites += 1;
    }

    let fraction = opened_sites as f64 / (size * size) as f64;
    trace!(
        trial,
        opened_sites,
        rejected_draws,
        fraction,
        "Trial percolated"
    );
    Ok(TrialOutcome {
        trial,
        opened_sites,
        fraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::union_find::{QuickFind, WeightedQuickUnion};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_site_trial_opens_everything() {
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = run_trial::<WeightedQuickUnion, _>(1, 0, &mut rng).unwrap();
        assert_eq!(outcome.opened_sites, 1);
        assert_eq!(outcome.fraction, 1.0);
    }

    #[test]
    fn two_by_two_trial_needs_two_or_three_sites() {
        let mut rng = StdRng::seed_from_u64(12);
        for trial in 0..50 {
            let outcome = run_trial::<WeightedQuickUnion, _>(2, trial, &mut rng).unwrap();
            assert!((2..=3).contains(&outcome.opened_sites));
            assert_eq!(outcome.fraction, outcome.opened_sites as f64 / 4.0);
            assert_eq!(outcome.trial, trial);
        }
    }

    #[test]
    fn trial_is_reproducible_and_independent_of_disjoint_set() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        let weighted = run_trial::<WeightedQuickUnion, _>(10, 0, &mut a).unwrap();
        let reference = run_trial::<QuickFind, _>(10, 0, &mut b).unwrap();
        assert_eq!(weighted, reference);
        assert!(weighted.fraction > 0.0 && weighted.fraction <= 1.0);
    }

    #[test]
    fn zero_size_trial_fails() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            run_trial::<WeightedQuickUnion, _>(0, 0, &mut rng),
            Err(GridError::InvalidSize(0))
        );
    }
}
