use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;

use super::feature_struct::Feature;


/// Struct `Sample` holds the feature columns of a training set
/// in a dense, column-major layout.
/// Targets and per-observation weights are passed to the learner
/// as separate arrays, so `Sample` carries features only.
/// The columns are read-only during training.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(crate) features: Vec<Feature>,
    pub(crate) n_sample: usize,
    pub(crate) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` into `Sample`.
    /// This method takes the ownership of `data`.
    /// Every column must have a dtype `f64`.
    pub fn from_dataframe(data: DataFrame) -> Self {
        let (n_sample, n_feature) = data.shape();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        Self { features, n_sample, n_feature, }
    }


    /// Construct a `Sample` from named columns.
    /// All columns must have the same length.
    pub fn from_columns<T: ToString>(columns: Vec<(T, Vec<f64>)>) -> Self {
        let features = columns.into_iter()
            .map(|(name, values)| Feature { name: name.to_string(), values, })
            .collect::<Vec<Feature>>();

        let n_feature = features.len();
        let n_sample = features.first().map(Feature::len).unwrap_or(0);

        assert!(
            features.iter().all(|feature| feature.len() == n_sample),
            "All feature columns must have the same length",
        );

        Self { features, n_sample, n_feature, }
    }


    /// Returns the pair of the number of observations and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns a slice of the feature columns.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}


impl Index<usize> for Sample {
    type Output = Feature;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.features[idx]
    }
}
