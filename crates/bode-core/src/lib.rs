//! bode-core: Frequency response of low-order rational transfer functions
//!
//! Evaluates H(s) built from real zeros and poles along the imaginary axis
//! and reduces each point to magnitude and phase.
//!
//! ## Modules
//!
//! - `frequency` - Validated frequency range and log-uniform axis
//! - `transfer` - First/second-order transfer function evaluation
//! - `sweep` - Frequency sweep producing (frequency, magnitude, phase) samples
//! - `math` - Magnitude, dB and phase conversions
//! - `report` - Console table rendering of a sweep

pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod report;
pub mod sweep;
pub mod transfer;

pub use error::{BodeError, Result};
pub use frequency::FrequencyRange;
pub use sweep::{sweep, Sample, SweepResult};
pub use transfer::{ModelOrder, TransferFunction};
