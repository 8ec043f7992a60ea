//! Impurity metrics for node splitting.
use serde::{Serialize, Deserialize};

use std::fmt;


/// Splitting criteria for growing classification trees.
/// * `Criterion::Gini` minimizes the Gini impurity
///     of the weighted class masses.
/// * `Criterion::Entropy` minimizes the entropic impurity
///     of the weighted class masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Gini index.
    Gini,
    /// Entropy function.
    Entropy,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::Entropy => "Entropy",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// Returns the impurity of the given weighted class masses.
    /// `class_weights[k]` is the total weight of class `k`.
    /// An all-zero slice has impurity `0`.
    #[inline]
    pub fn impurity(&self, class_weights: &[f64]) -> f64 {
        match self {
            Self::Gini => gini_impurity(class_weights),
            Self::Entropy => entropic_impurity(class_weights),
        }
    }
}


/// Returns the Gini impurity of the given weighted class masses.
#[inline(always)]
fn gini_impurity(class_weights: &[f64]) -> f64 {
    let total = class_weights.iter().sum::<f64>();
    if total <= 0.0 { return 0.0; }

    let correct = class_weights.iter()
        .map(|&w| (w / total).powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


/// Returns the entropic impurity of the given weighted class masses.
#[inline(always)]
fn entropic_impurity(class_weights: &[f64]) -> f64 {
    let total = class_weights.iter().sum::<f64>();
    if total <= 0.0 { return 0.0; }

    class_weights.iter()
        .map(|&w| {
            let r = w / total;
            if r <= 0.0 { 0.0 } else { -r * r.ln() }
        })
        .sum::<f64>()
}


/// The impurity metric of regression trees: population variance.
/// Regression trees admit a single metric,
/// so this is a unit marker passed where classification trees
/// pass a [`Criterion`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variance;


impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variance")
    }
}
