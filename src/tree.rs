//! CART tree induction: intervals, impurity calculators,
//! split search, and the learner.

mod interval;
mod types;
mod criterion;
mod impurity;
mod selector;
mod leaf;
mod split;
mod node;
mod learner;

pub use interval::Interval;
pub use types::Threshold;
pub use criterion::{Criterion, Variance};
pub use impurity::{
    ChildImpurities,
    ClassificationImpurityCalculator,
    ImpurityCalculator,
    RegressionImpurityCalculator,
};
pub use selector::{
    AllFeatureCandidateSelector,
    FeatureCandidateSelector,
    RandomFeatureCandidateSelector,
};
pub use leaf::{
    ClassificationLeafFactory,
    LeafFactory,
    RegressionLeafFactory,
};
pub use split::{Splitter, LR};
pub use node::{BranchNode, DecisionTree, LeafNode, Node};
pub use learner::{
    CartLearner,
    ClassificationCartLearner,
    RegressionCartLearner,
};
