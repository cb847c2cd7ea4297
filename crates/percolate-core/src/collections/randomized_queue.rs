use super::error::CollectionError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::iter::FusedIterator;

const INITIAL_CAPACITY: usize = 1;

/// A queue whose removals pick an item uniformly at random.
///
/// Items occupy a dense prefix of a growable array. Removal swaps the chosen
/// slot with the last occupied one, so the order of the survivors carries no
/// meaning. Capacity doubles when the array is full and halves once occupancy
/// drops to a quarter, which keeps both operations amortized O(1) without
/// thrashing at the boundary.
///
/// The random generator is owned by the queue; use [`with_rng`](Self::with_rng)
/// or [`seeded`](RandomizedQueue::seeded) for reproducible draws.
#[derive(Debug, Clone)]
pub struct RandomizedQueue<T, R = StdRng> {
    items: Vec<T>,
    rng: R,
}

impl<T> RandomizedQueue<T, StdRng> {
    /// Creates an empty queue drawing from an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for RandomizedQueue<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Adds `item`, doubling the backing storage first if it is full.
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            let additional = self.items.capacity().max(INITIAL_CAPACITY);
            self.items.reserve_exact(additional);
        }
        self.items.push(item);
    }

    /// Removes and returns a uniformly random item.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.items.is_empty() {
            return Err(CollectionError::Empty {
                operation: "dequeue",
            });
        }
        let pos = self.rng.gen_range(0..self.items.len());
        let item = self.items.swap_remove(pos);

        let len = self.items.len();
        let capacity = self.items.capacity();
        if len > 0 && len == capacity / 4 {
            self.items.shrink_to(capacity / 2);
        }
        Ok(item)
    }

    /// Returns a uniformly random item without removing it.
    pub fn sample(&mut self) -> Result<&T, CollectionError> {
        if self.items.is_empty() {
            return Err(CollectionError::Empty {
                operation: "sample",
            });
        }
        let pos = self.rng.gen_range(0..self.items.len());
        Ok(&self.items[pos])
    }

    /// Returns an iterator over a shuffled snapshot of the current items.
    ///
    /// The snapshot is taken immediately; later changes to the queue do not
    /// affect it, and every call produces an independent order.
    pub fn iter(&mut self) -> Shuffled<T>
    where
        T: Clone,
    {
        let mut snapshot = self.items.clone();
        snapshot.shuffle(&mut self.rng);
        Shuffled { items: snapshot }
    }
}

impl<T, R: Rng + SeedableRng> RandomizedQueue<T, R> {
    /// Replaces the generator with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = R::seed_from_u64(seed);
    }
}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = Shuffled<T>;

    /// Consumes the queue, yielding its items in a uniformly random order.
    fn into_iter(mut self) -> Self::IntoIter {
        self.items.shuffle(&mut self.rng);
        Shuffled { items: self.items }
    }
}

/// Items of a [`RandomizedQueue`] in a fixed, uniformly shuffled order.
#[derive(Debug, Clone)]
pub struct Shuffled<T> {
    items: Vec<T>,
}

impl<T> Iterator for Shuffled<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for Shuffled<T> {}
impl<T> FusedIterator for Shuffled<T> {}
