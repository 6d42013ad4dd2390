//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error type used throughout the Octroi de Mer workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! The taxonomy is deliberately small: every generator input is produced
//! internally, so the only failure modes are an unknown territory code, a
//! snapshot requested over missing data, and malformed calculator input.
//! None of these are retryable — there is no external dependency to retry
//! against.

use thiserror::Error;

/// Top-level error type for the Octroi de Mer data core.
#[derive(Error, Debug)]
pub enum OdmError {
    /// The territory code is not present in the fixed catalog.
    #[error("unknown territory code: {code}")]
    InvalidTerritory {
        /// The code that failed the catalog lookup.
        code: String,
    },

    /// A derivation was requested over an empty or incomplete source table.
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// A caller-supplied value is outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl OdmError {
    /// Construct an [`OdmError::InvalidTerritory`] from any displayable code.
    pub fn invalid_territory(code: impl std::fmt::Display) -> Self {
        Self::InvalidTerritory {
            code: code.to_string(),
        }
    }
}
