//! Transfer function evaluation
//!
//! H(s) is built from real zeros and poles:
//!
//! - first order:  H(s) = (s + z1) / (s + p1)
//! - second order: H(s) = (s + z1)(s + z2) / ((s + p1)(s + p2))
//!
//! The model order is fixed when the [`TransferFunction`] is constructed, so
//! evaluation never re-checks it.

use std::fmt;

use num_complex::Complex64;
use tracing::warn;

use crate::constants::ZERO_POLE_RANGE;
use crate::error::{BodeError, Result};

/// Model order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelOrder {
    First,
    Second,
}

impl ModelOrder {
    /// Parse from the numeric selector (1 or 2)
    pub fn from_selector(selector: u32) -> Result<Self> {
        match selector {
            1 => Ok(ModelOrder::First),
            2 => Ok(ModelOrder::Second),
            other => Err(BodeError::InvalidModelOrder(other)),
        }
    }

    /// Number of zeros (and of poles) this order requires
    pub fn degree(&self) -> usize {
        match self {
            ModelOrder::First => 1,
            ModelOrder::Second => 2,
        }
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelOrder::First => write!(f, "first-order"),
            ModelOrder::Second => write!(f, "second-order"),
        }
    }
}

/// A first- or second-order transfer function with real zeros and poles
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransferFunction {
    FirstOrder { zero: f64, pole: f64 },
    SecondOrder { zeros: [f64; 2], poles: [f64; 2] },
}

impl TransferFunction {
    /// Build from a model order and matching zero/pole sets
    ///
    /// # Arguments
    /// * `order` - First or second order
    /// * `zeros` - Zero locations, one per order
    /// * `poles` - Pole locations, one per order
    ///
    /// # Example
    /// ```
    /// use bode_core::transfer::{ModelOrder, TransferFunction};
    /// let tf = TransferFunction::new(ModelOrder::First, &[1000.0], &[10000.0]).unwrap();
    /// assert_eq!(tf.order(), ModelOrder::First);
    /// ```
    pub fn new(order: ModelOrder, zeros: &[f64], poles: &[f64]) -> Result<Self> {
        if let Some(&value) = zeros.iter().chain(poles).find(|v| !v.is_finite()) {
            return Err(BodeError::NonFiniteZeroPole { value });
        }

        let tf = match (order, zeros, poles) {
            (ModelOrder::First, &[zero], &[pole]) => TransferFunction::FirstOrder { zero, pole },
            (ModelOrder::Second, &[z1, z2], &[p1, p2]) => {
                // Sorted so that swapping a pair yields the same evaluation order
                let mut zeros = [z1, z2];
                let mut poles = [p1, p2];
                zeros.sort_by(f64::total_cmp);
                poles.sort_by(f64::total_cmp);
                TransferFunction::SecondOrder { zeros, poles }
            }
            _ => {
                return Err(BodeError::ZeroPoleCount {
                    order,
                    expected: order.degree(),
                    zeros: zeros.len(),
                    poles: poles.len(),
                })
            }
        };

        for &v in zeros.iter().chain(poles) {
            if !ZERO_POLE_RANGE.contains(&v) {
                warn!(
                    value = v,
                    "zero/pole lies outside the operating range {:?}", ZERO_POLE_RANGE
                );
            }
        }

        Ok(tf)
    }

    /// Get the model order
    pub fn order(&self) -> ModelOrder {
        match self {
            TransferFunction::FirstOrder { .. } => ModelOrder::First,
            TransferFunction::SecondOrder { .. } => ModelOrder::Second,
        }
    }

    /// Evaluate H(s) at a complex point
    ///
    /// The second-order form is evaluated as a product of first-order ratios,
    /// ((s + z1) / (s + p1)) * ((s + z2) / (s + p2)), which keeps the
    /// intermediate terms quadratic rather than quartic in |s|.
    ///
    /// Returns [`BodeError::SingularEvaluation`] when `s` sits on a pole or the
    /// division is not representable (the denominator's squared norm
    /// underflows to zero or overflows).
    pub fn evaluate(&self, s: Complex64) -> Result<Complex64> {
        let h = match *self {
            TransferFunction::FirstOrder { zero, pole } => section(s, zero, pole),
            TransferFunction::SecondOrder { zeros, poles } => {
                section(s, zeros[0], poles[0]) * section(s, zeros[1], poles[1])
            }
        };

        if !h.is_finite() {
            return Err(BodeError::SingularEvaluation { s });
        }
        Ok(h)
    }
}

/// One first-order section (s + z) / (s + p)
#[inline]
fn section(s: Complex64, zero: f64, pole: f64) -> Complex64 {
    (s + zero) / (s + pole)
}
