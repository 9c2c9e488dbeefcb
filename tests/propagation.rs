//! End-to-end propagation scenarios.
//!
//! These tests follow a complete laboratory workflow: raw samples into a
//! measured quantity, combination through arithmetic expressions, reduction
//! by weighted averaging, and extraction of parallel arrays.

use approx::assert_relative_eq;
use errorprop::{sequence, weighted_average, MeasuredQuantity, Quantity, QuantityError};
use std::f64::consts::PI;

/// Pendulum period samples (seconds) from the reference experiment.
const PERIODS: [f64; 8] = [2.77, 2.81, 2.93, 2.95, 2.49, 2.81, 2.95, 2.76];

#[test]
fn pendulum_gravity_end_to_end() {
    let length = Quantity::new(1.84, 0.007, 0.0).unwrap();
    let period = MeasuredQuantity::new(&PERIODS, 0.3).unwrap();

    assert_relative_eq!(period.value(), 2.8088, max_relative = 1e-4);
    assert_relative_eq!(period.err_stat(), 0.1000, max_relative = 1e-3);

    // g = 4π²·l/T², built from operator chaining.
    let g = 4.0 * PI * PI * length / period.quantity().powi(2);
    assert_relative_eq!(g.value(), 9.208, max_relative = 1e-3);
    assert_relative_eq!(g.err_sys(), 2.002, max_relative = 1e-3);
    assert_relative_eq!(g.err_stat(), 0.656, max_relative = 1e-3);
}

#[test]
fn pendulum_gravity_via_explicit_derivatives() {
    // Same result through the explicit derived-quantity factory with the
    // analytic partials ∂g/∂l = 4π²/T² and ∂g/∂T = −8π²·l/T³.
    let four_pi_sq = 4.0 * PI * PI;
    let l = Quantity::new(1.84, 0.007, 0.0).unwrap();
    let t: Quantity<f64> = MeasuredQuantity::new(&PERIODS, 0.3).unwrap().into();

    let explicit = Quantity::derived(
        |v| four_pi_sq * v[0] / (v[1] * v[1]),
        &[
            &|v: &[f64]| four_pi_sq / (v[1] * v[1]),
            &|v: &[f64]| -2.0 * four_pi_sq * v[0] / (v[1] * v[1] * v[1]),
        ],
        &[l, t],
    )
    .unwrap();

    let chained = 4.0 * PI * PI * l / t.powi(2);
    assert_relative_eq!(explicit.value(), chained.value(), max_relative = 1e-12);
    assert_relative_eq!(explicit.err_sys(), chained.err_sys(), max_relative = 1e-12);
    assert_relative_eq!(explicit.err_stat(), chained.err_stat(), max_relative = 1e-12);
}

#[test]
fn three_sigma_interval_scales_the_statistical_error() {
    let two = MeasuredQuantity::new(&PERIODS, 0.3).unwrap();
    let three = MeasuredQuantity::with_sigma_interval(&PERIODS, 0.3, 3.0).unwrap();

    assert_relative_eq!(three.err_stat(), 0.15, max_relative = 1e-3);
    assert_relative_eq!(three.err_stat(), 1.5 * two.err_stat(), max_relative = 1e-12);

    // The 3-sigma rendition of g carries the proportionally larger error.
    let length = Quantity::new(1.84, 0.007, 0.0).unwrap();
    let g = 4.0 * PI * PI * length / three.quantity().powi(2);
    assert_relative_eq!(g.err_stat(), 0.984, max_relative = 1e-3);
}

#[test]
fn spring_constant_from_force_series() {
    // Forces measured with a 1 N instrument error over known extensions.
    let forces = sequence::from_values(&[292.4, 260.0, 231.0], 1.0, 0.0).unwrap();
    assert_eq!(forces.len(), 3);
    for force in &forces {
        assert_eq!(force.err_sys(), 1.0);
        assert_eq!(force.err_stat(), 0.0);
    }

    let extensions = sequence::from_values(&[0.292, 0.260, 0.231], 0.001, 0.0).unwrap();

    // Element-wise division: same-shaped sequence, no cross coupling.
    let stiffness: Vec<Quantity<f64>> = forces
        .iter()
        .zip(&extensions)
        .map(|(&f, &x)| f / x)
        .collect();
    assert_eq!(stiffness.len(), 3);
    assert_relative_eq!(stiffness[0].value(), 292.4 / 0.292, max_relative = 1e-12);

    // Reduce the repeated determinations into a single constant.
    let k = weighted_average(&stiffness).unwrap();
    assert!(k.value() > 990.0 && k.value() < 1010.0);
    assert!(k.err_stat() < stiffness[0].total_error());
    assert_eq!(k.err_sys(), 0.0);
}

#[test]
fn extraction_round_trips_constructed_sequences() {
    let data = [292.4, 260.0, 231.0];
    let qs = sequence::from_values(&data, 1.0, 0.0).unwrap();

    assert_eq!(sequence::values(&qs), data.to_vec());
    assert_eq!(sequence::sys_errors(&qs), vec![1.0; 3]);
    assert_eq!(sequence::stat_errors(&qs), vec![0.0; 3]);
}

#[test]
fn rendering_follows_the_zero_omission_rule() {
    let period = MeasuredQuantity::new(&PERIODS, 0.3).unwrap();
    assert!(period.has_statistical_error());
    assert_eq!(format!("{:.3}", period), "2.809 ± 0.300 ± 0.100");

    let length = Quantity::new(1.84, 0.007, 0.0).unwrap();
    assert!(!length.has_statistical_error());
    assert_eq!(format!("{:.3}", length), "1.840 ± 0.007");
}

#[test]
fn construction_failures_are_eager_and_typed() {
    assert!(matches!(
        Quantity::new(1.0, -0.1, 0.0),
        Err(QuantityError::NegativeError { .. })
    ));
    let empty: [f64; 0] = [];
    assert_eq!(
        MeasuredQuantity::new(&empty, 0.1).unwrap_err(),
        QuantityError::EmptyMeasurements
    );
    assert_eq!(
        weighted_average::<f64>(&[]).unwrap_err(),
        QuantityError::EmptyAverage
    );
    assert!(matches!(
        sequence::from_values(&[1.0, 2.0], &[0.1], 0.0).unwrap_err(),
        QuantityError::BroadcastLength { .. }
    ));
}

#[test]
fn f32_quantities_propagate_like_f64() {
    let a = Quantity::new(2.0_f32, 0.1, 0.0).unwrap();
    let b = Quantity::new(3.0_f32, 0.2, 0.0).unwrap();
    let p = a * b;
    assert_relative_eq!(p.value(), 6.0_f32);
    assert_relative_eq!(p.err_sys(), 0.7_f32, max_relative = 1e-6);
}
