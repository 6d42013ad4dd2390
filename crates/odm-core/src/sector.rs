//! # Sector Primitives
//!
//! Economic sector identity and tax-rate schedules. A [`Sector`] row is
//! reference data produced by the catalog crate; its weight and import
//! volume are already scaled by the owning territory's multiplier by the
//! time a consumer sees it.

use serde::{Deserialize, Serialize};

use crate::error::OdmError;

// -- Validating Deserialize for SectorCode ------------------------------------

impl<'de> Deserialize<'de> for SectorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A sector identifier, unique within one territory's catalog,
/// e.g. `AGRICULTURE` or `BIENS_EQUIPEMENT`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SectorCode(String);

impl SectorCode {
    /// Create a sector code, validating non-emptiness and the
    /// `UPPERCASE_WITH_UNDERSCORES` format.
    ///
    /// # Errors
    ///
    /// Returns [`OdmError::InvalidInput`] on an empty string or any
    /// character outside `[A-Z_]`.
    pub fn new(value: impl Into<String>) -> Result<Self, OdmError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(OdmError::InvalidInput(
                "sector code must be non-empty".into(),
            ));
        }
        if !trimmed.bytes().all(|b| b.is_ascii_uppercase() || b == b'_') {
            return Err(OdmError::InvalidInput(format!(
                "sector code must match [A-Z_]+, got: {trimmed:?}"
            )));
        }
        Ok(Self(trimmed))
    }

    /// Access the sector code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SectorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three octroi de mer rate tiers applied to imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Standard rate for the sector.
    Normal,
    /// Reduced rate for essential goods.
    Reduced,
    /// Sector-specific surcharge rate (alcohol, vehicles, luxury goods).
    Specific,
}

impl std::fmt::Display for RateTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Reduced => f.write_str("reduced"),
            Self::Specific => f.write_str("specific"),
        }
    }
}

/// The tax rates of one sector, one percentage per [`RateTier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSchedule {
    /// Standard rate, percent.
    pub normal: f64,
    /// Reduced rate, percent.
    pub reduced: f64,
    /// Specific surcharge rate, percent.
    pub specific: f64,
}

impl RateSchedule {
    /// Select the percentage for a tier.
    pub fn rate(&self, tier: RateTier) -> f64 {
        match tier {
            RateTier::Normal => self.normal,
            RateTier::Reduced => self.reduced,
            RateTier::Specific => self.specific,
        }
    }
}

/// One economic sector of a territory's catalog.
///
/// `weight` is the sector's share of the territory's import base
/// (descriptive, not normalized to 100) and `import_volume` its monthly
/// import volume; both are scaled by the territory multiplier at catalog
/// build time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sector {
    /// Catalog key, unique within one territory.
    pub code: SectorCode,
    /// Full display name.
    pub name: String,
    /// Top-level grouping, e.g. "Alimentation".
    pub category: String,
    /// Finer grouping, e.g. "Fruits & Légumes".
    pub sub_category: String,
    /// Tax rates per tier.
    pub rates: RateSchedule,
    /// Weight share of the territory's import base, multiplier-scaled.
    pub weight: f64,
    /// Monthly import volume, multiplier-scaled.
    pub import_volume: f64,
}
