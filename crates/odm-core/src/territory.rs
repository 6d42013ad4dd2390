//! # Territory Primitives
//!
//! Newtypes and reference attributes for the eleven overseas territories.
//! A [`TerritoryCode`] identifies a territory in every table of the
//! workspace; [`Territory`] carries the immutable demographic and economic
//! attributes the aggregators read.
//!
//! ## Validation
//!
//! [`TerritoryCode`] is validated at construction time: non-empty,
//! uppercase ASCII letters only. Deserialization goes through the same
//! validation, so a code that exists at runtime is always well-formed.

use serde::{Deserialize, Serialize};

use crate::error::OdmError;

// -- Validating Deserialize for TerritoryCode ---------------------------------

impl<'de> Deserialize<'de> for TerritoryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A territory identifier, e.g. `REUNION` or `STPIERRE`.
///
/// # Validation
///
/// Must be a non-empty string of uppercase ASCII letters. The format is
/// intentionally strict: territory codes are a closed vocabulary defined by
/// the catalog, not free-form input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TerritoryCode(String);

impl TerritoryCode {
    /// Create a territory code from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns [`OdmError::InvalidInput`] if the string is empty,
    /// whitespace-only, or contains anything other than uppercase ASCII
    /// letters.
    pub fn new(value: impl Into<String>) -> Result<Self, OdmError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(OdmError::InvalidInput(
                "territory code must be non-empty".into(),
            ));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(OdmError::InvalidInput(format!(
                "territory code must be uppercase ASCII letters, got: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed))
    }

    /// Access the territory code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TerritoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Legal classification of an overseas territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalStatus {
    /// Overseas department/region (département et région d'outre-mer).
    Drom,
    /// Overseas collectivity (collectivité d'outre-mer).
    Com,
}

impl std::fmt::Display for LegalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drom => f.write_str("DROM"),
            Self::Com => f.write_str("COM"),
        }
    }
}

/// Currency in circulation in a territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro.
    Eur,
    /// CFP franc (franc pacifique).
    Xpf,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eur => f.write_str("EUR"),
            Self::Xpf => f.write_str("XPF"),
        }
    }
}

/// Immutable reference attributes of one territory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Territory {
    /// Unique catalog key.
    pub code: TerritoryCode,
    /// Full display name, e.g. "La Réunion".
    pub name: String,
    /// DROM or COM.
    pub status: LegalStatus,
    /// Resident population.
    pub population: u64,
    /// Land area in square kilometres.
    pub area_km2: u32,
    /// Gross domestic product in billions of euros.
    pub gdp_billions: f64,
    /// Currency in circulation.
    pub currency: Currency,
    /// Whether the octroi de mer regime is levied in this territory.
    pub octroi_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_valid() {
        let code = TerritoryCode::new("REUNION").unwrap();
        assert_eq!(code.as_str(), "REUNION");
    }

    #[test]
    fn code_trims_whitespace() {
        let code = TerritoryCode::new("  MAYOTTE ").unwrap();
        assert_eq!(code.as_str(), "MAYOTTE");
    }

    #[test]
    fn code_rejects_empty() {
        assert!(TerritoryCode::new("").is_err());
        assert!(TerritoryCode::new("   ").is_err());
    }

    #[test]
    fn code_rejects_lowercase_and_punctuation() {
        assert!(TerritoryCode::new("reunion").is_err());
        assert!(TerritoryCode::new("ST-PIERRE").is_err());
        assert!(TerritoryCode::new("GUYANE ").is_ok());
    }

    #[test]
    fn code_deserialize_validates() {
        let ok: Result<TerritoryCode, _> = serde_json::from_str("\"WALLIS\"");
        assert!(ok.is_ok());
        let bad: Result<TerritoryCode, _> = serde_json::from_str("\"wallis\"");
        assert!(bad.is_err());
    }

    #[test]
    fn legal_status_display() {
        assert_eq!(LegalStatus::Drom.to_string(), "DROM");
        assert_eq!(LegalStatus::Com.to_string(), "COM");
    }
}
