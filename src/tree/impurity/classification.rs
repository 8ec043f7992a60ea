//! Per-class weighted counts for classification targets.
use crate::tree::criterion::Criterion;
use crate::tree::interval::Interval;

use super::{ChildImpurities, ImpurityCalculator};


/// Classification impurity calculator over per-class weighted counts.
///
/// Targets are class indices encoded as `f64` (`0.0`, `1.0`, ...).
/// The count vectors are sized by the largest class index observed in
/// the interval; the leaf factory pads probability vectors to the
/// globally configured class count.
#[derive(Debug, Clone)]
pub struct ClassificationImpurityCalculator {
    criterion: Criterion,
    interval: Interval,
    current_position: usize,

    weighted_total: f64,
    weighted_left: f64,
    weighted_right: f64,

    class_weights_total: Vec<f64>,
    class_weights_left: Vec<f64>,
    class_weights_right: Vec<f64>,
}


impl ClassificationImpurityCalculator {
    /// Total weight of the whole interval.
    #[inline]
    pub fn weighted_total(&self) -> f64 {
        self.weighted_total
    }


    /// Total weight left of the sweep cursor.
    #[inline]
    pub fn weighted_left(&self) -> f64 {
        self.weighted_left
    }


    /// Total weight right of the sweep cursor.
    #[inline]
    pub fn weighted_right(&self) -> f64 {
        self.weighted_right
    }


    /// Per-class weighted counts of the whole interval.
    #[inline]
    pub fn class_weights(&self) -> &[f64] {
        &self.class_weights_total
    }
}


impl ImpurityCalculator for ClassificationImpurityCalculator {
    type Metric = Criterion;
    type Leaf = Vec<f64>;


    fn create(
        metric: &Criterion,
        targets: &[f64],
        weights: &[f64],
        interval: Interval,
    ) -> Self
    {
        assert!(
            interval.to_exclusive() <= targets.len(),
            "Interval [{from}, {to}) exceeds the target array",
            from = interval.from_inclusive(),
            to = interval.to_exclusive(),
        );
        assert!(
            weights.is_empty() || weights.len() == targets.len(),
            "Non-empty weights must have one entry per target",
        );

        let weights_present = !weights.is_empty();

        let range = interval.from_inclusive()..interval.to_exclusive();
        let n_classes = targets[range.clone()]
            .iter()
            .map(|&t| class_index(t))
            .max()
            .map(|c| c + 1)
            .unwrap_or(0);

        let mut class_weights_total = vec![0.0; n_classes];
        let mut weighted_total = 0.0;

        let mut w = 1.0;
        for i in range {
            if weights_present {
                w = weights[i];
            }

            class_weights_total[class_index(targets[i])] += w;
            weighted_total += w;
        }

        let mut calculator = Self {
            criterion: *metric,
            interval,
            current_position: interval.from_inclusive(),

            weighted_total,
            weighted_left: 0.0,
            weighted_right: 0.0,

            class_weights_total,
            class_weights_left: vec![0.0; n_classes],
            class_weights_right: vec![0.0; n_classes],
        };
        calculator.reset();

        calculator
    }


    fn reset(&mut self) {
        self.current_position = self.interval.from_inclusive();

        self.weighted_left = 0.0;
        self.weighted_right = self.weighted_total;

        self.class_weights_left.iter_mut().for_each(|w| *w = 0.0);
        self.class_weights_right.copy_from_slice(&self.class_weights_total);
    }


    fn update(&mut self, targets: &[f64], weights: &[f64], new_position: usize) {
        assert!(
            self.current_position <= new_position,
            "New position {new_position} must not be behind current {current}",
            current = self.current_position,
        );
        assert!(
            new_position <= self.interval.to_exclusive(),
            "New position {new_position} exceeds the interval end {to}",
            to = self.interval.to_exclusive(),
        );

        if new_position == self.current_position {
            return;
        }

        let weights_present = !weights.is_empty();
        let mut w = 1.0;
        let mut w_diff = 0.0;

        for i in self.current_position..new_position {
            if weights_present {
                w = weights[i];
            }

            let class = class_index(targets[i]);
            self.class_weights_left[class] += w;
            self.class_weights_right[class] -= w;

            w_diff += w;
        }

        self.weighted_left += w_diff;
        self.weighted_right -= w_diff;

        self.current_position = new_position;
    }


    fn node_impurity(&self) -> f64 {
        self.criterion.impurity(&self.class_weights_total)
    }


    fn child_impurities(&self) -> ChildImpurities {
        ChildImpurities {
            left: self.criterion.impurity(&self.class_weights_left),
            right: self.criterion.impurity(&self.class_weights_right),
        }
    }


    /// Weighted impurity reduction against the parent impurity.
    fn impurity_improvement(&self, parent_impurity: f64) -> f64 {
        let children = self.child_impurities();
        let lp = self.weighted_left / self.weighted_total;
        let rp = self.weighted_right / self.weighted_total;

        parent_impurity - lp * children.left - rp * children.right
    }


    /// Class-count vector normalized by the total weight.
    fn leaf_value(&self) -> Vec<f64> {
        self.class_weights_total.iter()
            .map(|w| w / self.weighted_total)
            .collect()
    }
}


/// Map a class target to its index.
#[inline(always)]
fn class_index(target: f64) -> usize {
    debug_assert!(
        target >= 0.0 && target.fract() == 0.0,
        "Class targets must be non-negative integers, got {target}",
    );
    target as usize
}
