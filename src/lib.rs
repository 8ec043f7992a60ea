#![warn(missing_docs)]

//!
//! A crate that provides CART (Classification and Regression Trees)
//! decision-tree induction.
//!
//! Training recursively partitions the observation index space into a
//! binary tree that minimizes impurity at each split. Candidate
//! thresholds are scored in amortized linear time by sweeping an
//! incremental impurity calculator across each feature-sorted order,
//! with full support for per-observation weights.
//!
//! This crate includes two kinds of trees.
//!
//! - Classification trees
//!     Targets are class indices. Splits minimize Gini or entropic
//!     impurity over per-class weighted counts, and leaves hold
//!     class-probability vectors.
//!
//! - Regression trees
//!     Targets are continuous values. Splits maximize Friedman's
//!     between-group variance, and leaves hold weighted means.
//!
//! The learner is configured with three injected strategies: the
//! impurity metric, the feature-candidate selector (all features, or a
//! random subset per split for variance-reduction ensembles), and the
//! leaf-value factory.

pub mod error;
pub mod prelude;
pub mod sample;
pub mod tree;


pub use error::CartError;

pub use sample::{Feature, Sample};

pub use tree::{
    CartLearner,
    ClassificationCartLearner,
    RegressionCartLearner,
    Criterion,
    Variance,
    DecisionTree,
};
