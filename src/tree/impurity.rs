//! Incremental impurity bookkeeping for split search.
//!
//! A calculator maintains weighted statistics over one interval,
//! partitioned into "left of the sweep cursor" and "right of the
//! sweep cursor". Advancing the cursor moves statistics from the
//! right partition to the left one in time proportional to the
//! step, which is what makes a full split sweep linear in the
//! interval size instead of quadratic.

mod classification;
mod regression;

pub use classification::ClassificationImpurityCalculator;
pub use regression::RegressionImpurityCalculator;

use super::interval::Interval;


/// Left/right impurities at the current sweep position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildImpurities {
    /// Impurity of the left partition.
    pub left: f64,
    /// Impurity of the right partition.
    pub right: f64,
}


/// Weighted split statistics over an interval, updated incrementally
/// as the split cursor sweeps left-to-right over a feature-sorted order.
///
/// The `targets` and `weights` slices given to [`create`] and re-supplied
/// to [`update`] must be the same data, arranged in sweep order; positions
/// are indices into those slices, restricted to the interval fixed at
/// construction. An empty `weights` slice means unit weights and is
/// handled without materializing an all-ones array.
///
/// At any cursor position, the left and right partition totals sum to
/// the whole-interval totals.
///
/// [`create`]: ImpurityCalculator::create
/// [`update`]: ImpurityCalculator::update
pub trait ImpurityCalculator: Sized {
    /// Impurity metric configuration injected at learner construction.
    type Metric: Clone + Sync;

    /// Statistics payload handed to the leaf factory.
    type Leaf;

    /// Compute fresh whole-interval statistics, then [`reset`] the sweep.
    ///
    /// # Panics
    ///
    /// Panics if `interval` exceeds `targets`, or if a non-empty
    /// `weights` slice disagrees with `targets` in length.
    ///
    /// [`reset`]: ImpurityCalculator::reset
    fn create(
        metric: &Self::Metric,
        targets: &[f64],
        weights: &[f64],
        interval: Interval,
    ) -> Self;

    /// Rewind the sweep cursor to the interval start:
    /// the right partition holds the full-interval totals
    /// and the left partition is empty.
    fn reset(&mut self);

    /// Advance the cursor to `new_position`, moving the statistics of
    /// positions `[cursor, new_position)` from the right partition to
    /// the left one. Calling with the current position is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `new_position` is behind the cursor
    /// (the sweep is monotonic) or beyond the interval end.
    fn update(&mut self, targets: &[f64], weights: &[f64], new_position: usize);

    /// Impurity of the whole interval.
    fn node_impurity(&self) -> f64;

    /// Impurities of the two partitions at the current cursor.
    fn child_impurities(&self) -> ChildImpurities;

    /// Score of the split at the current cursor, used to rank candidate
    /// splits. The classification calculator returns the weighted
    /// impurity reduction against `parent_impurity`; the regression
    /// calculator returns Friedman's between-group variance and ignores
    /// the argument, which is kept for interface symmetry.
    fn impurity_improvement(&self, parent_impurity: f64) -> f64;

    /// Statistics payload for a leaf covering the whole interval.
    fn leaf_value(&self) -> Self::Leaf;
}
