//! Error types for transfer function evaluation and sweeps

use num_complex::Complex64;
use thiserror::Error;

use crate::transfer::ModelOrder;

/// Errors raised by the frequency response core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodeError {
    #[error("Invalid start frequency {start}: must be a finite value greater than 0")]
    InvalidStartFrequency { start: f64 },

    #[error("Invalid stop frequency {stop}: must be a finite value")]
    InvalidStopFrequency { stop: f64 },

    #[error("Start frequency {start} is greater than stop frequency {stop}")]
    ReversedRange { start: f64, stop: f64 },

    #[error("Invalid model order {0}: expected 1 or 2")]
    InvalidModelOrder(u32),

    #[error("Invalid zero/pole {value}: must be a finite real number")]
    NonFiniteZeroPole { value: f64 },

    #[error("{order} model needs {expected} zero(s) and pole(s), got {zeros} zero(s) and {poles} pole(s)")]
    ZeroPoleCount {
        order: ModelOrder,
        expected: usize,
        zeros: usize,
        poles: usize,
    },

    #[error("Singular evaluation at s = {s}: a pole coincides with the evaluation point")]
    SingularEvaluation { s: Complex64 },
}

pub type Result<T> = std::result::Result<T, BodeError>;
