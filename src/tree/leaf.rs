//! Leaf-value factories.
use super::impurity::ImpurityCalculator;


/// Converts a node's final statistics into the leaf payload
/// stored in the tree.
pub trait LeafFactory<C: ImpurityCalculator> {
    /// The prediction payload stored in each leaf.
    type Payload;

    /// Build the leaf payload from the calculator's
    /// whole-interval statistics.
    fn leaf_value(&self, calculator: &C) -> Self::Payload;
}


/// Leaves hold the weighted mean of their interval.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegressionLeafFactory;


impl<C> LeafFactory<C> for RegressionLeafFactory
where
    C: ImpurityCalculator<Leaf = f64>,
{
    type Payload = f64;


    #[inline]
    fn leaf_value(&self, calculator: &C) -> f64 {
        calculator.leaf_value()
    }
}


/// Leaves hold a class-probability vector of fixed length.
///
/// Calculators size their count vectors by the classes they actually
/// observe, so the factory pads every probability vector to the
/// configured class count; all leaves of one tree have equal length.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationLeafFactory {
    n_classes: usize,
}


impl ClassificationLeafFactory {
    /// Probability vectors are padded to `n_classes` entries.
    ///
    /// # Panics
    ///
    /// Panics if `n_classes` is zero.
    pub fn new(n_classes: usize) -> Self {
        assert!(n_classes > 0, "A classification task needs at least one class");
        Self { n_classes }
    }
}


impl<C> LeafFactory<C> for ClassificationLeafFactory
where
    C: ImpurityCalculator<Leaf = Vec<f64>>,
{
    type Payload = Vec<f64>;


    fn leaf_value(&self, calculator: &C) -> Vec<f64> {
        let mut probabilities = calculator.leaf_value();
        probabilities.resize(self.n_classes, 0.0);
        probabilities
    }
}
