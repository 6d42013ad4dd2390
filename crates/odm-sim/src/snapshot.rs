//! # Current Snapshot Generator
//!
//! Derives the "latest month" view from the historical series: for each
//! sector, the chronologically last record plus a month-over-month change
//! drawn from the configured window. The snapshot has no independent
//! source of truth; everything is a function of the last record and the
//! sector's catalog row.
//!
//! `refresh_snapshot` applies the small live nudge a running dashboard
//! shows between full regenerations: each row has a configured chance of a
//! ±2% revenue move and a matching volume wiggle.

use odm_core::{OdmError, RateSchedule, Sector, SectorCode, TerritoryCode};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::historical::HistoricalRecord;
use crate::tunables::Tunables;

/// The latest-month state of one sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorSnapshot {
    /// Owning territory.
    pub territory: TerritoryCode,
    /// Sector within the territory's catalog.
    pub sector: SectorCode,
    /// Sector display name.
    pub name: String,
    /// Sector category.
    pub category: String,
    /// Revenue for the latest simulated month, euros.
    pub monthly_revenue: f64,
    /// Month-over-month change, percent.
    pub change_pct: f64,
    /// Month-over-month change, euros.
    pub change_abs: f64,
    /// Re-jittered import volume.
    pub import_volume: f64,
    /// The sector's three rate tiers.
    pub rates: RateSchedule,
    /// Multiplier-scaled sector weight.
    pub weight: f64,
    /// Synthetic revenue for the prior year.
    pub prior_year_revenue: f64,
    /// Synthetic projection for the current year.
    pub current_year_projection: f64,
}

/// Derive the snapshot for one territory from its catalog and series.
///
/// # Errors
///
/// Returns [`OdmError::InsufficientData`] when the sector catalog is empty
/// or a sector has no historical record to derive from.
pub fn generate_snapshot(
    territory: &TerritoryCode,
    sectors: &[Sector],
    historical: &[HistoricalRecord],
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<SectorSnapshot>, OdmError> {
    if sectors.is_empty() {
        return Err(OdmError::InsufficientData(format!(
            "empty sector catalog for {territory}"
        )));
    }

    let mut snapshot = Vec::with_capacity(sectors.len());
    for sector in sectors {
        let last = historical
            .iter()
            .filter(|r| r.sector == sector.code)
            .max_by_key(|r| r.month)
            .ok_or_else(|| {
                OdmError::InsufficientData(format!(
                    "no historical records for sector {} in {territory}",
                    sector.code
                ))
            })?;

        let change = tunables.monthly_change.sample(rng);
        let change_abs = last.revenue * change;

        snapshot.push(SectorSnapshot {
            territory: territory.clone(),
            sector: sector.code.clone(),
            name: sector.name.clone(),
            category: sector.category.clone(),
            monthly_revenue: last.revenue + change_abs,
            change_pct: change * 100.0,
            change_abs,
            import_volume: sector.import_volume * tunables.volume_spread.sample(rng),
            rates: sector.rates,
            weight: sector.weight,
            prior_year_revenue: last.revenue * tunables.prior_year_spread.sample(rng),
            current_year_projection: last.revenue * tunables.projection_spread.sample(rng),
        });
    }

    Ok(snapshot)
}

/// Apply one live-refresh pass to an existing snapshot.
///
/// Each row is touched with probability `live_refresh_probability`; a
/// touched row gets a revenue nudge from `live_revenue_nudge` (its
/// `change_pct` is rewritten to that nudge) and a volume factor from
/// `live_volume_nudge`. Returns how many rows moved.
pub fn refresh_snapshot(
    snapshot: &mut [SectorSnapshot],
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> usize {
    let mut touched = 0;
    for row in snapshot.iter_mut() {
        if rng.gen::<f64>() >= tunables.live_refresh_probability {
            continue;
        }
        let nudge = tunables.live_revenue_nudge.sample(rng);
        row.monthly_revenue *= 1.0 + nudge;
        row.change_pct = nudge * 100.0;
        row.import_volume *= tunables.live_volume_nudge.sample(rng);
        touched += 1;
    }
    tracing::debug!(touched, rows = snapshot.len(), "live snapshot refresh");
    touched
}
