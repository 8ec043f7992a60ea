use minitrees::prelude::*;

use polars::prelude::*;


const TOLERANCE: f64 = 1e-9;


fn classification_learner(
    minimum_split_size: usize,
    maximum_tree_size: usize,
    minimum_information_gain: f64,
) -> Result<ClassificationCartLearner<AllFeatureCandidateSelector>, CartError>
{
    ClassificationCartLearner::new(
        minimum_split_size,
        maximum_tree_size,
        minimum_information_gain,
        Criterion::Gini,
        AllFeatureCandidateSelector,
        ClassificationLeafFactory::new(2),
    )
}


fn regression_learner(
    minimum_split_size: usize,
    maximum_tree_size: usize,
    minimum_information_gain: f64,
) -> RegressionCartLearner<AllFeatureCandidateSelector> {
    RegressionCartLearner::new(
        minimum_split_size,
        maximum_tree_size,
        minimum_information_gain,
        Variance,
        AllFeatureCandidateSelector,
        RegressionLeafFactory,
    )
    .unwrap()
}


#[test]
fn invalid_minimum_split_size() {
    let learner = classification_learner(0, 1, 0.1);
    assert!(matches!(
        learner,
        Err(CartError::InvalidMinimumSplitSize { .. }),
    ));
}


#[test]
fn invalid_maximum_tree_size() {
    let learner = classification_learner(1, 0, 0.1);
    assert!(matches!(
        learner,
        Err(CartError::InvalidMaximumTreeSize { .. }),
    ));
}


#[test]
fn invalid_minimum_information_gain() {
    let learner = classification_learner(1, 1, 0.0);
    assert!(matches!(
        learner,
        Err(CartError::InvalidMinimumInformationGain { .. }),
    ));

    let learner = classification_learner(1, 1, f64::NAN);
    assert!(matches!(
        learner,
        Err(CartError::InvalidMinimumInformationGain { .. }),
    ));
}


#[test]
fn valid_arguments_construct() {
    assert!(classification_learner(1, 1, 0.1).is_ok());
}


#[test]
fn fit_rejects_mismatched_shapes() {
    let sample = Sample::from_columns(vec![("x", vec![1.0, 2.0, 3.0])]);
    let mut learner = regression_learner(1, 15, 1e-7);

    let short = learner.fit(&sample, &[1.0, 2.0], &[]);
    assert!(matches!(
        short,
        Err(CartError::TargetLengthMismatch { .. }),
    ));

    let bad_weights = learner.fit(&sample, &[1.0, 2.0, 3.0], &[1.0]);
    assert!(matches!(
        bad_weights,
        Err(CartError::WeightLengthMismatch { .. }),
    ));
}


// Targets [1, 1, 1, 1, 5, 5, 5, 5] sorted by a single feature:
// the best split is the 4/5 boundary, both children are pure,
// and the leaves predict the two means.
#[test]
fn regression_recovers_step_function() {
    let sample = Sample::from_columns(vec![
        ("x", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]),
    ]);
    let targets = [1.0, 1.0, 1.0, 1.0, 5.0, 5.0, 5.0, 5.0];

    let mut learner = regression_learner(1, 15, 1e-7);
    let tree = learner.fit(&sample, &targets, &[]).unwrap();

    assert_eq!(tree.node_count(), 3);

    match tree.root() {
        Node::Branch(branch) => {
            assert_eq!(branch.splitter().feature(), 0);
            assert!((branch.splitter().threshold() - 4.5).abs() < TOLERANCE);
        },
        Node::Leaf(_) => panic!("The root must be a branch"),
    }

    assert_eq!(*tree.predict(&[2.0]), 1.0);
    assert_eq!(*tree.predict(&[4.5]), 1.0);
    assert_eq!(*tree.predict(&[5.0]), 5.0);
    assert_eq!(*tree.predict(&[100.0]), 5.0);
}


#[test]
fn insufficient_gain_yields_single_leaf_regression() {
    let sample = Sample::from_columns(vec![
        ("x", vec![1.0, 2.0, 3.0, 4.0]),
    ]);
    let targets = [1.0, 2.0, 1.0, 2.0];

    let mut learner = regression_learner(1, 15, 10.0);
    let tree = learner.fit(&sample, &targets, &[]).unwrap();

    assert_eq!(tree.node_count(), 1);
    assert!((tree.predict(&[3.0]) - 1.5).abs() < TOLERANCE);
}


#[test]
fn constant_feature_yields_single_leaf_classification() {
    let sample = Sample::from_columns(vec![("x", vec![7.0; 4])]);
    let targets = [0.0, 0.0, 1.0, 1.0];

    let mut learner = classification_learner(1, 15, 1e-7).unwrap();
    let tree = learner.fit(&sample, &targets, &[]).unwrap();

    assert_eq!(tree.node_count(), 1);
    assert_eq!(*tree.predict(&[7.0]), vec![0.5, 0.5]);
    assert_eq!(*tree.predict(&[100.0]), vec![0.5, 0.5]);
}


#[test]
fn tree_size_never_exceeds_budget() {
    let values = (0..32).map(f64::from).collect::<Vec<_>>();
    let sample = Sample::from_columns(vec![("x", values.clone())]);

    let mut learner = regression_learner(1, 7, 1e-9);
    let tree = learner.fit(&sample, &values, &[]).unwrap();

    assert!(tree.node_count() <= 7);
    assert!(matches!(tree.root(), Node::Branch(_)));
}


#[test]
fn empty_weights_equal_unit_weights() {
    let sample = Sample::from_columns(vec![
        ("x", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        ("y", vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0]),
    ]);
    let targets = [1.0, 1.0, 2.0, 2.0, 3.0, 3.0];
    let unit = vec![1.0; 6];

    let mut learner = regression_learner(1, 31, 1e-9);
    let unweighted = learner.fit(&sample, &targets, &[]).unwrap();
    let weighted = learner.fit(&sample, &targets, &unit).unwrap();

    assert_eq!(unweighted, weighted);
}


#[test]
fn single_leaf_holds_the_weighted_mean() {
    let sample = Sample::from_columns(vec![("x", vec![1.0, 2.0])]);
    let targets = [0.0, 4.0];
    let weights = [1.0, 3.0];

    // A budget of one node forces the root to be a leaf.
    let mut learner = regression_learner(1, 1, 1e-7);
    let tree = learner.fit(&sample, &targets, &weights).unwrap();

    assert_eq!(tree.node_count(), 1);
    assert!((tree.predict(&[1.5]) - 3.0).abs() < TOLERANCE);
}


#[test]
fn classification_splits_on_the_informative_feature() {
    let sample = Sample::from_columns(vec![
        ("noise", vec![5.0; 6]),
        ("signal", vec![1.0, 2.0, 3.0, 10.0, 11.0, 12.0]),
    ]);
    let targets = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

    let mut learner = classification_learner(2, 15, 1e-7).unwrap();
    let tree = learner.fit(&sample, &targets, &[]).unwrap();

    assert_eq!(tree.node_count(), 3);

    match tree.root() {
        Node::Branch(branch) => {
            assert_eq!(branch.splitter().feature(), 1);
            assert!((branch.splitter().threshold() - 6.5).abs() < TOLERANCE);
        },
        Node::Leaf(_) => panic!("The root must be a branch"),
    }

    assert_eq!(*tree.predict(&[5.0, 2.0]), vec![1.0, 0.0]);
    assert_eq!(*tree.predict(&[5.0, 11.5]), vec![0.0, 1.0]);
}


#[test]
fn deep_tree_fits_distinct_targets_exactly() {
    let sample = Sample::from_columns(vec![
        ("x", vec![1.0, 2.0, 3.0, 4.0]),
    ]);
    let targets = [1.0, 2.0, 3.0, 4.0];

    let mut learner = regression_learner(1, 31, 1e-9);
    let tree = learner.fit(&sample, &targets, &[]).unwrap();

    assert_eq!(tree.node_count(), 7);
    for (x, target) in [1.0, 2.0, 3.0, 4.0].into_iter().zip(targets) {
        assert_eq!(*tree.predict(&[x]), target);
    }
}


#[test]
fn random_selector_is_deterministic_per_seed() {
    let mut first = RandomFeatureCandidateSelector::new(2, 42);
    let mut second = RandomFeatureCandidateSelector::new(2, 42);

    let mut a = Vec::new();
    let mut b = Vec::new();
    first.select(5, &mut a);
    second.select(5, &mut b);

    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
    assert!(a.iter().all(|&feature| feature < 5));
    assert_ne!(a[0], a[1]);
}


#[test]
fn random_selector_trains_reproducibly() {
    let sample = Sample::from_columns(vec![
        ("a", vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
        ("b", vec![2.0, 4.0, 6.0, 8.0, 10.0, 12.0]),
        ("c", vec![9.0, 7.0, 5.0, 3.0, 2.0, 1.0]),
    ]);
    let targets = [1.0, 1.0, 1.0, 4.0, 4.0, 4.0];

    let mut trees = Vec::new();
    for _ in 0..2 {
        let mut learner = RegressionCartLearner::new(
            2, 15, 1e-7,
            Variance,
            RandomFeatureCandidateSelector::new(2, 7),
            RegressionLeafFactory,
        )
        .unwrap();
        trees.push(learner.fit(&sample, &targets, &[]).unwrap());
    }

    assert_eq!(trees[0], trees[1]);
}


#[test]
fn sample_from_dataframe_trains() {
    let s1 = Series::new("x", &[10.0, 14.0, 15.0, 5.0, 3.0, 8.0, 12.0]);
    let s2 = Series::new("y", &[5.0, 8.0, 3.0, 1.0, 9.0, 13.0, 11.0]);
    let df = DataFrame::new(vec![s1, s2]).unwrap();

    let sample = Sample::from_dataframe(df);
    assert_eq!(sample.shape(), (7, 2));

    let targets = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0];

    let mut learner = classification_learner(1, 31, 1e-7).unwrap();
    let tree = learner.fit(&sample, &targets, &[]).unwrap();

    // Every training observation must be classified correctly:
    // the tree can grow until all leaves are pure.
    for (row, &label) in targets.iter().enumerate() {
        let x = [sample[0][row], sample[1][row]];
        let probabilities = tree.predict(&x);
        assert_eq!(probabilities[label as usize], 1.0);
    }
}
