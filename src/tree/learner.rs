//! The CART learner: work-list-driven node expansion.
use crate::error::CartError;
use crate::sample::Sample;

use super::impurity::{
    ClassificationImpurityCalculator,
    ImpurityCalculator,
    RegressionImpurityCalculator,
};
use super::interval::Interval;
use super::leaf::{ClassificationLeafFactory, LeafFactory, RegressionLeafFactory};
use super::node::{BranchNode, DecisionTree, LeafNode, Node};
use super::selector::FeatureCandidateSelector;
use super::split::{best_split, Splitter};
use super::types::Gain;


/// A CART learner wired for classification:
/// Gini/entropy impurity and class-probability leaves.
pub type ClassificationCartLearner<S> = CartLearner<
    ClassificationImpurityCalculator,
    S,
    ClassificationLeafFactory,
>;


/// A CART learner wired for regression:
/// variance impurity and weighted-mean leaves.
pub type RegressionCartLearner<S> = CartLearner<
    RegressionImpurityCalculator,
    S,
    RegressionLeafFactory,
>;


/// Grows a binary [`DecisionTree`] by recursively splitting the
/// observation index space at the impurity-minimizing
/// `(feature, threshold)` pair.
///
/// A node becomes a leaf when its interval is smaller than the minimum
/// split size, when the node budget cannot fit two more nodes, or when
/// no candidate feature reaches the minimum information gain.
///
/// # Example
///
/// ```
/// use minitrees::prelude::*;
///
/// let sample = Sample::from_columns(vec![
///     ("x", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]),
/// ]);
/// let targets = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0];
///
/// let mut learner = RegressionCartLearner::new(
///     1, 15, 1e-7,
///     Variance,
///     AllFeatureCandidateSelector,
///     RegressionLeafFactory,
/// ).unwrap();
///
/// let tree = learner.fit(&sample, &targets, &[]).unwrap();
/// assert_eq!(*tree.predict(&[2.0]), 1.0);
/// assert_eq!(*tree.predict(&[7.0]), 5.0);
/// ```
pub struct CartLearner<C, S, F>
where
    C: ImpurityCalculator,
{
    minimum_split_size: usize,
    maximum_tree_size: usize,
    minimum_information_gain: f64,

    metric: C::Metric,
    selector: S,
    leaf_factory: F,
}


impl<C, S, F> CartLearner<C, S, F>
where
    C: ImpurityCalculator,
    S: FeatureCandidateSelector,
    F: LeafFactory<C>,
{
    /// Construct a learner from its hyperparameters and strategies.
    ///
    /// Each hyperparameter is validated:
    /// `minimum_split_size >= 1`, `maximum_tree_size >= 1` and
    /// `minimum_information_gain > 0` (NaN is rejected).
    pub fn new(
        minimum_split_size: usize,
        maximum_tree_size: usize,
        minimum_information_gain: f64,
        metric: C::Metric,
        selector: S,
        leaf_factory: F,
    ) -> Result<Self, CartError>
    {
        if minimum_split_size < 1 {
            return Err(CartError::InvalidMinimumSplitSize {
                got: minimum_split_size,
            });
        }
        if maximum_tree_size < 1 {
            return Err(CartError::InvalidMaximumTreeSize {
                got: maximum_tree_size,
            });
        }
        if !(minimum_information_gain > 0.0) {
            return Err(CartError::InvalidMinimumInformationGain {
                got: minimum_information_gain,
            });
        }

        Ok(Self {
            minimum_split_size,
            maximum_tree_size,
            minimum_information_gain,
            metric,
            selector,
            leaf_factory,
        })
    }


    /// Train a tree on `sample` with one target per observation.
    ///
    /// An empty `weights` slice means unit weights; a non-empty slice
    /// must have one entry per observation. Takes `&mut self` because
    /// the candidate selector may hold generator state.
    pub fn fit(
        &mut self,
        sample: &Sample,
        targets: &[f64],
        weights: &[f64],
    ) -> Result<DecisionTree<F::Payload>, CartError>
    {
        let (n_sample, n_feature) = sample.shape();

        if n_sample == 0 {
            return Err(CartError::EmptyDataset);
        }
        if n_feature == 0 {
            return Err(CartError::ZeroFeatures);
        }
        if targets.len() != n_sample {
            return Err(CartError::TargetLengthMismatch {
                expected: n_sample,
                got: targets.len(),
            });
        }
        if !weights.is_empty() && weights.len() != n_sample {
            return Err(CartError::WeightLengthMismatch {
                expected: n_sample,
                got: weights.len(),
            });
        }

        let weights_present = !weights.is_empty();

        // One mutable index buffer for the whole run; every node works
        // on a disjoint sub-range of it. The work arrays mirror the
        // permutation so node statistics read contiguous slices.
        let mut permutation = (0..n_sample).collect::<Vec<usize>>();
        let mut work_targets = targets.to_vec();
        let mut work_weights = weights.to_vec();

        let mut arena = vec![Slot::Pending];
        let mut node_count = 1_usize;

        let mut work = vec![WorkItem {
            interval: Interval::new(0, n_sample),
            slot: 0,
        }];
        let mut candidates = Vec::with_capacity(n_feature);

        let minimum_gain = Gain(self.minimum_information_gain);

        while let Some(item) = work.pop() {
            let calculator = C::create(
                &self.metric, &work_targets, &work_weights, item.interval,
            );

            let split = if item.interval.len() < self.minimum_split_size
                || node_count + 2 > self.maximum_tree_size
            {
                None
            } else {
                self.selector.select(n_feature, &mut candidates);

                let from = item.interval.from_inclusive();
                let to = item.interval.to_exclusive();

                best_split::<C>(
                    &self.metric,
                    sample,
                    targets,
                    weights,
                    &permutation[from..to],
                    &candidates,
                    calculator.node_impurity(),
                )
                .filter(|candidate| candidate.gain >= minimum_gain)
            };

            match split {
                Some(candidate) => {
                    let from = item.interval.from_inclusive();
                    let to = item.interval.to_exclusive();

                    // Re-sort the interval's slice in the same stable
                    // order the winning feature was searched in, then
                    // cut at the recorded position.
                    let column = &sample[candidate.feature];
                    permutation[from..to].sort_by(|&i, &j| {
                        column[i].partial_cmp(&column[j]).unwrap()
                    });
                    for p in from..to {
                        let i = permutation[p];
                        work_targets[p] = targets[i];
                        if weights_present {
                            work_weights[p] = weights[i];
                        }
                    }

                    let cut = from + candidate.position;

                    let left = arena.len();
                    arena.push(Slot::Pending);
                    let right = arena.len();
                    arena.push(Slot::Pending);
                    node_count += 2;

                    arena[item.slot] = Slot::Branch {
                        splitter: Splitter::new(
                            candidate.feature, candidate.threshold,
                        ),
                        left,
                        right,
                    };

                    // Right first, so the left child is processed first.
                    work.push(WorkItem {
                        interval: Interval::new(cut, to),
                        slot: right,
                    });
                    work.push(WorkItem {
                        interval: Interval::new(from, cut),
                        slot: left,
                    });
                },
                None => {
                    arena[item.slot] = Slot::Leaf(
                        self.leaf_factory.leaf_value(&calculator),
                    );
                },
            }
        }

        Ok(DecisionTree::new(assemble(&mut arena, 0)))
    }
}


/// A node slot filled in by the work list.
enum Slot<L> {
    Pending,
    Branch {
        splitter: Splitter,
        left: usize,
        right: usize,
    },
    Leaf(L),
}


/// A pending node: the interval it covers and the arena slot
/// its finished form is written to.
struct WorkItem {
    interval: Interval,
    slot: usize,
}


/// Fold the arena into the owned tree, consuming slots as it goes.
fn assemble<L>(arena: &mut Vec<Slot<L>>, index: usize) -> Node<L> {
    match std::mem::replace(&mut arena[index], Slot::Pending) {
        Slot::Branch { splitter, left, right } => {
            let left = Box::new(assemble(arena, left));
            let right = Box::new(assemble(arena, right));

            Node::Branch(BranchNode { splitter, left, right })
        },
        Slot::Leaf(value) => Node::Leaf(LeafNode { value }),
        Slot::Pending => unreachable!("The work list left an unfilled node slot"),
    }
}
