use minitrees::prelude::*;


const TOLERANCE: f64 = 1e-9;


fn regression_calculator(targets: &[f64], weights: &[f64])
    -> RegressionImpurityCalculator
{
    RegressionImpurityCalculator::create(
        &Variance, targets, weights, Interval::new(0, targets.len()),
    )
}


fn classification_calculator(targets: &[f64], weights: &[f64])
    -> ClassificationImpurityCalculator
{
    ClassificationImpurityCalculator::create(
        &Criterion::Gini, targets, weights, Interval::new(0, targets.len()),
    )
}


#[test]
fn regression_conserves_weight_across_updates() {
    let targets = [3.0, 1.0, 4.0, 1.0, 5.0];
    let weights = [0.5, 1.0, 2.0, 1.5, 0.25];

    let mut calculator = regression_calculator(&targets, &weights);

    for position in [1, 3, 3, 5] {
        calculator.update(&targets, &weights, position);

        let conserved = calculator.weighted_left()
            + calculator.weighted_right();
        assert!((conserved - calculator.weighted_total()).abs() < TOLERANCE);
    }
}


#[test]
fn regression_reset_restores_presweep_state() {
    let targets = [3.0, 1.0, 4.0, 1.0, 5.0];
    let weights = [0.5, 1.0, 2.0, 1.5, 0.25];

    let mut fresh = regression_calculator(&targets, &weights);
    fresh.update(&targets, &weights, 2);
    let expected = fresh.impurity_improvement(0.0);

    let mut calculator = regression_calculator(&targets, &weights);
    calculator.update(&targets, &weights, 4);
    calculator.reset();

    assert_eq!(calculator.weighted_left(), 0.0);
    assert_eq!(calculator.weighted_right(), calculator.weighted_total());

    calculator.update(&targets, &weights, 2);
    assert!((calculator.impurity_improvement(0.0) - expected).abs() < TOLERANCE);
}


#[test]
#[should_panic(expected = "must not be behind")]
fn regression_update_behind_cursor_panics() {
    let targets = [3.0, 1.0, 4.0, 1.0, 5.0];

    let mut calculator = regression_calculator(&targets, &[]);
    calculator.update(&targets, &[], 3);
    calculator.update(&targets, &[], 2);
}


#[test]
fn regression_update_at_cursor_is_noop() {
    let targets = [3.0, 1.0, 4.0, 1.0, 5.0];

    let mut calculator = regression_calculator(&targets, &[]);
    calculator.update(&targets, &[], 2);

    let weighted_left = calculator.weighted_left();
    let children = calculator.child_impurities();

    calculator.update(&targets, &[], 2);

    assert_eq!(calculator.weighted_left(), weighted_left);
    assert_eq!(calculator.child_impurities(), children);
}


#[test]
fn regression_constant_targets_have_zero_impurity() {
    let targets = [2.5; 6];

    let mut calculator = regression_calculator(&targets, &[]);
    assert!(calculator.node_impurity().abs() < TOLERANCE);

    for position in 1..6 {
        calculator.update(&targets, &[], position);
        assert!(calculator.impurity_improvement(0.0).abs() < TOLERANCE);
    }
}


#[test]
fn regression_empty_weights_match_unit_weights() {
    let targets = [1.0, 2.0, 3.0, 4.0];
    let unit = [1.0; 4];

    let mut unweighted = regression_calculator(&targets, &[]);
    let mut weighted = regression_calculator(&targets, &unit);

    assert_eq!(unweighted.node_impurity(), weighted.node_impurity());

    for position in 1..4 {
        unweighted.update(&targets, &[], position);
        weighted.update(&targets, &unit, position);

        assert_eq!(
            unweighted.child_impurities(),
            weighted.child_impurities(),
        );
        assert_eq!(
            unweighted.impurity_improvement(0.0),
            weighted.impurity_improvement(0.0),
        );
    }
}


#[test]
fn classification_conserves_weight_and_normalizes_leaves() {
    let targets = [0.0, 1.0, 0.0, 1.0];
    let weights = [1.0, 2.0, 3.0, 4.0];

    let mut calculator = classification_calculator(&targets, &weights);

    // Gini of class masses {0: 4, 1: 6}.
    let expected = 1.0 - (0.4_f64).powi(2) - (0.6_f64).powi(2);
    assert!((calculator.node_impurity() - expected).abs() < TOLERANCE);

    let leaf = calculator.leaf_value();
    assert!((leaf[0] - 0.4).abs() < TOLERANCE);
    assert!((leaf[1] - 0.6).abs() < TOLERANCE);

    calculator.update(&targets, &weights, 2);

    let conserved = calculator.weighted_left() + calculator.weighted_right();
    assert!((conserved - calculator.weighted_total()).abs() < TOLERANCE);

    // Left masses {0: 1, 1: 2}, right masses {0: 3, 1: 4}.
    let children = calculator.child_impurities();
    let left = 1.0 - (1.0_f64 / 3.0).powi(2) - (2.0_f64 / 3.0).powi(2);
    let right = 1.0 - (3.0_f64 / 7.0).powi(2) - (4.0_f64 / 7.0).powi(2);
    assert!((children.left - left).abs() < TOLERANCE);
    assert!((children.right - right).abs() < TOLERANCE);
}


#[test]
#[should_panic(expected = "must not be behind")]
fn classification_update_behind_cursor_panics() {
    let targets = [0.0, 1.0, 0.0, 1.0];

    let mut calculator = classification_calculator(&targets, &[]);
    calculator.update(&targets, &[], 3);
    calculator.update(&targets, &[], 1);
}


#[test]
fn criterion_values_on_balanced_binary_masses() {
    let masses = [5.0, 5.0];

    assert!((Criterion::Gini.impurity(&masses) - 0.5).abs() < TOLERANCE);
    assert!(
        (Criterion::Entropy.impurity(&masses) - 2.0_f64.ln()).abs()
            < TOLERANCE
    );

    // A pure node has no impurity under either metric.
    assert_eq!(Criterion::Gini.impurity(&[10.0, 0.0]), 0.0);
    assert_eq!(Criterion::Entropy.impurity(&[10.0, 0.0]), 0.0);
}
