//! Bounded containers the searches collect results into.

use std::collections::BinaryHeap;

use crate::kdtree::Coordinate;
use crate::r#type::IndexScalar;

/// A single query hit.
///
/// `distance_sq` is the squared distance in the projected metric space, not a
/// surface distance; callers that need meters recompute them from the stored
/// item's geographic position.
#[derive(Debug)]
pub struct Neighbor<'a, N: IndexScalar, T> {
    /// The projected coordinate of the matched point.
    pub point: &'a Coordinate<N>,
    /// The item stored alongside the coordinate.
    pub item: &'a T,
    /// Squared metric distance from the query center.
    pub distance_sq: N,
}

impl<N: IndexScalar, T> Clone for Neighbor<'_, N, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: IndexScalar, T> Copy for Neighbor<'_, N, T> {}

/// Traversal-order bucket for radial hits, capped at a fixed budget.
///
/// Carries no ordering: when more points qualify than the budget allows, the
/// kept subset is whichever the traversal reached first.
pub(crate) struct RadialBucket<'a, N: IndexScalar, T> {
    hits: Vec<Neighbor<'a, N, T>>,
    budget: usize,
}

impl<'a, N: IndexScalar, T> RadialBucket<'a, N, T> {
    pub(crate) fn new(budget: usize) -> Self {
        Self {
            hits: Vec::new(),
            budget,
        }
    }

    pub(crate) fn push(&mut self, hit: Neighbor<'a, N, T>) {
        debug_assert!(!self.is_full());
        self.hits.push(hit);
    }

    pub(crate) fn is_full(&self) -> bool {
        self.hits.len() >= self.budget
    }

    pub(crate) fn into_vec(self) -> Vec<Neighbor<'a, N, T>> {
        self.hits
    }
}

/// A wrapper around a hit for use in the priority queue, ordered by distance.
struct HeapEntry<'a, N: IndexScalar, T>(Neighbor<'a, N, T>);

impl<N: IndexScalar, T> PartialEq for HeapEntry<'_, N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.distance_sq == other.0.distance_sq
    }
}

impl<N: IndexScalar, T> Eq for HeapEntry<'_, N, T> {}

impl<N: IndexScalar, T> Ord for HeapEntry<'_, N, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // We don't allow NaN. This should only panic on NaN
        self.0.distance_sq.partial_cmp(&other.0.distance_sq).unwrap()
    }
}

impl<N: IndexScalar, T> PartialOrd for HeapEntry<'_, N, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Worst-first bounded set of the best `capacity` candidates seen so far.
pub(crate) struct NearestSet<'a, N: IndexScalar, T> {
    heap: BinaryHeap<HeapEntry<'a, N, T>>,
    capacity: usize,
    cutoff_sq: N,
}

impl<'a, N: IndexScalar, T> NearestSet<'a, N, T> {
    pub(crate) fn new(capacity: usize, cutoff_sq: N) -> Self {
        debug_assert!(capacity >= 1);
        Self {
            heap: BinaryHeap::new(),
            capacity,
            cutoff_sq,
        }
    }

    /// Retain `hit` if it beats the current worst candidate (or the set is
    /// not yet full), evicting the worst as needed.
    pub(crate) fn consider(&mut self, hit: Neighbor<'a, N, T>) {
        if hit.distance_sq > self.cutoff_sq {
            return;
        }
        if self.heap.len() < self.capacity {
            self.heap.push(HeapEntry(hit));
        } else if self
            .heap
            .peek()
            .is_some_and(|worst| hit.distance_sq < worst.0.distance_sq)
        {
            self.heap.pop();
            self.heap.push(HeapEntry(hit));
        }
    }

    /// Whether a point or subtree at this squared distance could still
    /// contribute a result.
    pub(crate) fn admits(&self, distance_sq: N) -> bool {
        distance_sq <= self.cutoff_sq
            && (self.heap.len() < self.capacity
                || self
                    .heap
                    .peek()
                    .is_some_and(|worst| distance_sq <= worst.0.distance_sq))
    }

    /// Consume the set, yielding candidates ascending by distance.
    pub(crate) fn into_sorted_vec(self) -> Vec<Neighbor<'a, N, T>> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|entry| entry.0)
            .collect()
    }
}
