//! # Tax Calculator
//!
//! The octroi de mer due on a declared import value:
//! `due = declared_value × rate / 100`.
//!
//! A declared value of zero is legal (an empty declaration owes nothing);
//! negative or non-finite values and rates are rejected.

use crate::error::OdmError;

/// Compute the tax due on `declared_value` at `rate_pct` percent.
///
/// # Errors
///
/// Returns [`OdmError::InvalidInput`] if the declared value is negative or
/// non-finite, or the rate is negative or non-finite.
pub fn compute_tax(declared_value: f64, rate_pct: f64) -> Result<f64, OdmError> {
    if !declared_value.is_finite() || declared_value < 0.0 {
        return Err(OdmError::InvalidInput(format!(
            "declared value must be finite and non-negative, got {declared_value}"
        )));
    }
    if !rate_pct.is_finite() || rate_pct < 0.0 {
        return Err(OdmError::InvalidInput(format!(
            "rate must be finite and non-negative, got {rate_pct}"
        )));
    }
    Ok(declared_value * rate_pct / 100.0)
}
