//! Variance-based impurity statistics for regression targets.
use crate::tree::criterion::Variance;
use crate::tree::interval::Interval;

use super::{ChildImpurities, ImpurityCalculator};


/// Regression impurity calculator using population variance,
/// with Friedman's formulation for the impurity improvement.
///
/// Keeps weighted sums and sums-of-squares for the whole interval
/// and for the left/right partitions of the sweep.
#[derive(Debug, Clone)]
pub struct RegressionImpurityCalculator {
    interval: Interval,
    current_position: usize,

    weighted_total: f64,
    weighted_left: f64,
    weighted_right: f64,

    sum_total: f64,
    sum_left: f64,
    sum_right: f64,

    sq_sum_total: f64,
    sq_sum_left: f64,
    sq_sum_right: f64,

    mean_total: f64,
}


impl RegressionImpurityCalculator {
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
}


impl ImpurityCalculator for RegressionImpurityCalculator {
    type Metric = Variance;
    type Leaf = f64;


    fn create(
        _metric: &Variance,
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

        let mut sum_total = 0.0;
        let mut sq_sum_total = 0.0;
        let mut weighted_total = 0.0;

        let mut w = 1.0;
        for i in interval.from_inclusive()..interval.to_exclusive() {
            if weights_present {
                w = weights[i];
            }

            let target = targets[i];
            let w_target = w * target;
            sum_total += w_target;
            sq_sum_total += w_target * target;

            weighted_total += w;
        }

        let mean_total = sum_total / weighted_total;

        let mut calculator = Self {
            interval,
            current_position: interval.from_inclusive(),

            weighted_total,
            weighted_left: 0.0,
            weighted_right: 0.0,

            sum_total,
            sum_left: 0.0,
            sum_right: 0.0,

            sq_sum_total,
            sq_sum_left: 0.0,
            sq_sum_right: 0.0,

            mean_total,
        };
        calculator.reset();

        calculator
    }


    fn reset(&mut self) {
        self.current_position = self.interval.from_inclusive();

        self.weighted_left = 0.0;
        self.weighted_right = self.weighted_total;

        self.sum_left = 0.0;
        self.sum_right = self.sum_total;

        self.sq_sum_left = 0.0;
        self.sq_sum_right = self.sq_sum_total;
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

            let target = targets[i];
            let w_target = w * target;

            self.sum_left += w_target;
            self.sum_right -= w_target;

            let w_target_sq = w_target * target;

            self.sq_sum_left += w_target_sq;
            self.sq_sum_right -= w_target_sq;

            w_diff += w;
        }

        self.weighted_left += w_diff;
        self.weighted_right -= w_diff;

        self.current_position = new_position;
    }


    fn node_impurity(&self) -> f64 {
        self.sq_sum_total / self.weighted_total - self.mean_total.powi(2)
    }


    fn child_impurities(&self) -> ChildImpurities {
        let left = self.sq_sum_left / self.weighted_left
            - (self.sum_left / self.weighted_left).powi(2);

        let right = self.sq_sum_right / self.weighted_right
            - (self.sum_right / self.weighted_right).powi(2);

        ChildImpurities { left, right }
    }


    /// Friedman's between-group variance,
    /// `wL·wR/(wL+wR) · (meanL − meanR)²`.
    /// The parent impurity is intentionally unused here;
    /// downstream split ranking depends on this exact scaling.
    fn impurity_improvement(&self, _parent_impurity: f64) -> f64 {
        let diff = self.sum_left / self.weighted_left
            - self.sum_right / self.weighted_right;

        self.weighted_left * self.weighted_right * diff.powi(2)
            / (self.weighted_left + self.weighted_right)
    }


    fn leaf_value(&self) -> f64 {
        self.mean_total
    }
}
