//! Transfer Function Tests
//!
//! Zero cancellation, pole divergence, symmetry and magnitude sign.

use approx::assert_relative_eq;
use bode_core::transfer::{ModelOrder, TransferFunction};
use bode_core::BodeError;
use num_complex::Complex64;

// ============================================================================
// First order
// ============================================================================

#[test]
fn test_first_order_zero_cancellation() {
    let tf = TransferFunction::new(ModelOrder::First, &[1000.0], &[10000.0]).unwrap();
    let h = tf.evaluate(Complex64::new(-1000.0, 0.0)).unwrap();
    assert_eq!(h.norm(), 0.0);
}

#[test]
fn test_first_order_diverges_near_pole() {
    let tf = TransferFunction::new(ModelOrder::First, &[1000.0], &[10000.0]).unwrap();

    let mut previous = 0.0;
    for eps in [1e-2, 1e-4, 1e-6, 1e-8] {
        let h = tf.evaluate(Complex64::new(-10000.0 + eps, 0.0)).unwrap();
        assert!(h.norm() > previous, "|H| should grow as s approaches -p1");
        previous = h.norm();
    }
    assert!(previous > 1e11);
}

#[test]
fn test_first_order_singular_at_pole() {
    let tf = TransferFunction::new(ModelOrder::First, &[1000.0], &[10000.0]).unwrap();
    let s = Complex64::new(-10000.0, 0.0);
    assert_eq!(tf.evaluate(s), Err(BodeError::SingularEvaluation { s }));
}

// ============================================================================
// Second order
// ============================================================================

#[test]
fn test_second_order_symmetric_in_zeros_and_poles() {
    let a = TransferFunction::new(ModelOrder::Second, &[10.0, 3e4], &[200.0, 7e6]).unwrap();
    let swapped_zeros =
        TransferFunction::new(ModelOrder::Second, &[3e4, 10.0], &[200.0, 7e6]).unwrap();
    let swapped_poles =
        TransferFunction::new(ModelOrder::Second, &[10.0, 3e4], &[7e6, 200.0]).unwrap();

    for s in [
        Complex64::new(0.0, 1.0),
        Complex64::new(0.0, 6.283e3),
        Complex64::new(-5.0, 1e7),
        Complex64::new(12.0, -3.0),
    ] {
        let h = a.evaluate(s).unwrap();
        assert_eq!(h, swapped_zeros.evaluate(s).unwrap());
        assert_eq!(h, swapped_poles.evaluate(s).unwrap());
    }
}

#[test]
fn test_second_order_cancellation_is_unity() {
    let tf = TransferFunction::new(ModelOrder::Second, &[100.0, 100.0], &[100.0, 100.0]).unwrap();
    for w in [1.0, 1e3, 1e6, 6e9] {
        let h = tf.evaluate(Complex64::new(0.0, w)).unwrap();
        assert_eq!(h, Complex64::new(1.0, 0.0));
    }
}

#[test]
fn test_second_order_singular_at_either_pole() {
    let tf = TransferFunction::new(ModelOrder::Second, &[1.0, 2.0], &[3.0, 4.0]).unwrap();
    for p in [3.0, 4.0] {
        let s = Complex64::new(-p, 0.0);
        assert!(matches!(
            tf.evaluate(s),
            Err(BodeError::SingularEvaluation { .. })
        ));
    }
}

// ============================================================================
// General properties
// ============================================================================

#[test]
fn test_magnitude_non_negative() {
    let tf = TransferFunction::new(ModelOrder::Second, &[0.0, 5e7], &[1.0, 1e8]).unwrap();
    for re in [-1e3, -1.0, 0.0, 1.0, 1e3] {
        for im in [-1e6, -1.0, 0.5, 1e2, 1e9] {
            let h = tf.evaluate(Complex64::new(re, im)).unwrap();
            assert!(h.norm() >= 0.0);
        }
    }
}

#[test]
fn test_order_is_fixed_at_construction() {
    let first = TransferFunction::new(ModelOrder::First, &[1.0], &[2.0]).unwrap();
    let second = TransferFunction::new(ModelOrder::Second, &[1.0, 1.0], &[2.0, 2.0]).unwrap();
    assert_eq!(first.order(), ModelOrder::First);
    assert_eq!(second.order(), ModelOrder::Second);

    // (s+1)^2/(s+2)^2 is the square of (s+1)/(s+2)
    let s = Complex64::new(0.0, 3.0);
    let h1 = first.evaluate(s).unwrap();
    let h2 = second.evaluate(s).unwrap();
    assert_relative_eq!((h1 * h1).re, h2.re, epsilon = 1e-12);
    assert_relative_eq!((h1 * h1).im, h2.im, epsilon = 1e-12);
}

#[test]
fn test_wrong_set_length_rejected() {
    assert!(matches!(
        TransferFunction::new(ModelOrder::First, &[1.0, 2.0], &[3.0]),
        Err(BodeError::ZeroPoleCount { expected: 1, .. })
    ));
    assert!(matches!(
        TransferFunction::new(ModelOrder::Second, &[], &[]),
        Err(BodeError::ZeroPoleCount { expected: 2, .. })
    ));
}
