//! Exports the learner, its strategies, and the tree types.
//!
pub use crate::tree::{
    // Learner ----------------------------------
    CartLearner,
    ClassificationCartLearner,
    RegressionCartLearner,


    // Impurity bookkeeping ---------------------
    ImpurityCalculator,
    ClassificationImpurityCalculator,
    RegressionImpurityCalculator,
    ChildImpurities,
    Criterion,
    Variance,


    // Injected strategies ----------------------
    FeatureCandidateSelector,
    AllFeatureCandidateSelector,
    RandomFeatureCandidateSelector,
    LeafFactory,
    ClassificationLeafFactory,
    RegressionLeafFactory,


    // Trained trees ----------------------------
    DecisionTree,
    Node,
    BranchNode,
    LeafNode,
    Splitter,
    Threshold,
    Interval,
    LR,
};


pub use crate::sample::{
    Feature,
    Sample,
};


pub use crate::error::CartError;
