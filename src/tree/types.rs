use serde::{Serialize, Deserialize};

use std::cmp;


/// Threshold value of a split.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Threshold(pub(crate) f64);


impl From<f64> for Threshold {
    #[inline]
    fn from(threshold: f64) -> Self {
        Self(threshold)
    }
}


impl cmp::PartialEq<f64> for Threshold {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0.eq(other)
    }
}


/// Impurity improvement of a candidate split.
/// This is just a wrapper for `f64`.
#[derive(Clone, Copy, PartialEq, Debug)]
#[repr(transparent)]
pub(crate) struct Gain(pub(crate) f64);


impl From<f64> for Gain {
    #[inline]
    fn from(gain: f64) -> Self {
        Self(gain)
    }
}


impl cmp::PartialOrd for Gain {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
