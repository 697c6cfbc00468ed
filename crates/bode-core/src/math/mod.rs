//! Mathematical helpers for frequency response reduction

pub mod conversions;

pub use conversions::*;
