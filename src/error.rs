//! Error types for tree learning.
use thiserror::Error;


/// Errors from CART learner construction and training.
///
/// Every variant is an argument error: either an invalid hyperparameter
/// at construction or a shape mismatch in the training data.
/// Contract violations inside the split machinery
/// (e.g., driving an impurity calculator backwards)
/// are programmer errors and panic instead.
#[derive(Debug, Error)]
pub enum CartError {
    /// Returned when the minimum split size is zero.
    #[error("minimum split size must be at least 1, got {got}")]
    InvalidMinimumSplitSize {
        /// The invalid minimum split size provided.
        got: usize,
    },

    /// Returned when the maximum tree size is zero.
    #[error("maximum tree size must be at least 1, got {got}")]
    InvalidMaximumTreeSize {
        /// The invalid maximum tree size provided.
        got: usize,
    },

    /// Returned when the minimum information gain is not a positive number.
    #[error("minimum information gain must be positive, got {got}")]
    InvalidMinimumInformationGain {
        /// The invalid minimum information gain provided.
        got: f64,
    },

    /// Returned when the training sample has zero observations.
    #[error("training sample has zero observations")]
    EmptyDataset,

    /// Returned when the training sample has zero feature columns.
    #[error("training sample has zero feature columns")]
    ZeroFeatures,

    /// Returned when the target array length disagrees with the sample.
    #[error("target array has {got} entries, expected {expected}")]
    TargetLengthMismatch {
        /// The number of observations in the sample.
        expected: usize,
        /// The actual target array length.
        got: usize,
    },

    /// Returned when a non-empty weight array length disagrees with the sample.
    #[error("weight array has {got} entries, expected {expected} or 0")]
    WeightLengthMismatch {
        /// The number of observations in the sample.
        expected: usize,
        /// The actual weight array length.
        got: usize,
    },
}
