//! Half-open index ranges over the training permutation.
use serde::{Serialize, Deserialize};


/// An immutable half-open index range `[from, to)`.
/// One `Interval` is the unit of work for one tree node:
/// it addresses a sub-range of the run's shared index permutation
/// (or of a feature-sorted work buffer during split search).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    from: usize,
    to: usize,
}


impl Interval {
    /// Construct the range `[from, to)`.
    ///
    /// # Panics
    ///
    /// Panics unless `from < to`; intervals are never empty.
    #[inline]
    pub fn new(from: usize, to: usize) -> Self {
        assert!(from < to, "Invalid interval [{from}, {to})");
        Self { from, to }
    }


    /// The inclusive lower bound.
    #[inline]
    pub fn from_inclusive(&self) -> usize {
        self.from
    }


    /// The exclusive upper bound.
    #[inline]
    pub fn to_exclusive(&self) -> usize {
        self.to
    }


    /// The number of indices this interval covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.to - self.from
    }
}
