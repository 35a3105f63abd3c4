//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `BrError` as one variant
//! where they need the shared parameter checks.

use thiserror::Error;

/// The common base error for `br-*` crates.
#[derive(Debug, Error)]
pub enum BrError {
    /// A numeric parameter that must be finite and strictly positive was not.
    #[error("parameter `{name}` must be finite and > 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

impl BrError {
    /// Check that `value` is finite and strictly positive.
    pub fn ensure_positive(name: &'static str, value: f64) -> BrResult<f64> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(BrError::NonPositive { name, value })
        }
    }
}

/// Shorthand result type for all `br-*` crates.
pub type BrResult<T> = Result<T, BrError>;
