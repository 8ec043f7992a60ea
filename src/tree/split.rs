//! Split rules and the per-node best-split search.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::sample::Sample;

use super::impurity::ImpurityCalculator;
use super::interval::Interval;
use super::types::{Gain, Threshold};


/// The output of [`Splitter::split`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The observation goes to the left subtree.
    Left,
    /// The observation goes to the right subtree.
    Right,
}


/// A split rule `(feature, threshold)`.
///
/// Observations with `value <= threshold` go left, the rest go right.
/// Thresholds are midpoints between the two distinct feature values
/// straddling the split position found during training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) feature: usize,
    pub(crate) threshold: Threshold,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, threshold: Threshold) -> Self {
        Self { feature, threshold }
    }


    /// Index of the feature column this rule tests.
    #[inline]
    pub fn feature(&self) -> usize {
        self.feature
    }


    /// The threshold the feature value is compared against.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold.0
    }


    /// Route one observation, given as a feature vector.
    #[inline]
    pub fn split(&self, x: &[f64]) -> LR {
        if x[self.feature] <= self.threshold.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}


/// The best split found for one node; consumed by the learner.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SplitCandidate {
    pub(crate) feature: usize,
    pub(crate) threshold: Threshold,
    pub(crate) gain: Gain,
    /// Number of observations routed left of the split
    /// in the feature-sorted order.
    pub(crate) position: usize,
}


/// Search every candidate feature for the improvement-maximizing threshold
/// over the node's observations `node_indices`.
///
/// Each candidate feature sorts its own copy of the index slice, so the
/// features are searched in parallel without touching the shared
/// permutation. Ties across features resolve to the earliest candidate in
/// iteration order; the merge is deterministic.
///
/// Returns `None` when no feature admits a valid boundary
/// (e.g., every candidate is constant over the node).
pub(crate) fn best_split<C>(
    metric: &C::Metric,
    sample: &Sample,
    targets: &[f64],
    weights: &[f64],
    node_indices: &[usize],
    candidates: &[usize],
    parent_impurity: f64,
) -> Option<SplitCandidate>
where
    C: ImpurityCalculator,
{
    candidates.par_iter()
        .enumerate()
        .filter_map(|(order, &feature)| {
            search_feature::<C>(
                metric, sample, targets, weights,
                node_indices, feature, parent_impurity,
            )
            .map(|candidate| (order, candidate))
        })
        .max_by(|(order_x, x), (order_y, y)| {
            x.gain.partial_cmp(&y.gain)
                .unwrap()
                .then_with(|| order_y.cmp(order_x))
        })
        .map(|(_, candidate)| candidate)
}


/// Sweep one feature: sort the node's indices by the feature value,
/// then advance the calculator through every position where the value
/// changes, keeping the best boundary.
fn search_feature<C>(
    metric: &C::Metric,
    sample: &Sample,
    targets: &[f64],
    weights: &[f64],
    node_indices: &[usize],
    feature: usize,
    parent_impurity: f64,
) -> Option<SplitCandidate>
where
    C: ImpurityCalculator,
{
    let column = &sample[feature];

    let mut order = node_indices.to_vec();
    // Stable, so equal feature values keep their permutation order.
    order.sort_by(|&i, &j| column[i].partial_cmp(&column[j]).unwrap());

    let n = order.len();
    let weights_present = !weights.is_empty();

    // Work buffers in sweep order; sweep positions are local to [0, n).
    let values = order.iter()
        .map(|&i| column[i])
        .collect::<Vec<_>>();
    let work_targets = order.iter()
        .map(|&i| targets[i])
        .collect::<Vec<_>>();
    let work_weights = if weights_present {
        order.iter()
            .map(|&i| weights[i])
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    let mut calculator = C::create(
        metric, &work_targets, &work_weights, Interval::new(0, n),
    );

    let mut best: Option<SplitCandidate> = None;
    for position in 1..n {
        // Equal adjacent values cannot be separated.
        if values[position - 1] == values[position] {
            continue;
        }

        calculator.update(&work_targets, &work_weights, position);

        let improvement = calculator.impurity_improvement(parent_impurity);
        if !improvement.is_finite() {
            continue;
        }

        // Strict comparison keeps the leftmost boundary on ties.
        if best.map_or(true, |b| Gain(improvement) > b.gain) {
            let threshold = midpoint(values[position - 1], values[position]);
            best = Some(SplitCandidate {
                feature,
                threshold: threshold.into(),
                gain: improvement.into(),
                position,
            });
        }
    }

    best
}


/// Midpoint of the two distinct values straddling a split position.
#[inline]
fn midpoint(lower: f64, upper: f64) -> f64 {
    (lower + upper) / 2.0
}
