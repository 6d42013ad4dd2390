//! # Historical Series Generator
//!
//! One record per (month, sector) from the configured series start through
//! an explicit end month. The pandemic-era and seasonal multipliers are
//! drawn once per month and shared by every sector of that month, matching
//! the shape of the simulated economy: a slow month is slow for everyone.
//!
//! ## Seasons
//!
//! Réunion and Mayotte sit south of the equator; their high season is the
//! austral summer (December–February) and their low season June–August.
//! Every other territory is inverted. Shoulder months draw from a narrow
//! band around 1.0.

use odm_core::{Month, Sector, SectorCode, TerritoryCode};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::tunables::{Band, Tunables};

/// Territories whose seasonal curve follows the southern hemisphere.
const SOUTHERN_SEASON_GROUP: &[&str] = &["REUNION", "MAYOTTE"];

/// One simulated month of octroi revenue for one sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Simulated month.
    pub month: Month,
    /// Owning territory.
    pub territory: TerritoryCode,
    /// Sector within the territory's catalog.
    pub sector: SectorCode,
    /// Octroi revenue for the month, euros.
    pub revenue: f64,
    /// Import volume for the month.
    pub volume: f64,
    /// Sector category, denormalized for chart grouping.
    pub category: String,
    /// Average applied rate over the month, percent.
    pub average_rate: f64,
}

fn seasonal_band<'a>(territory: &TerritoryCode, month: &Month, tunables: &'a Tunables) -> &'a Band {
    let southern = SOUTHERN_SEASON_GROUP.contains(&territory.as_str());
    let (high, low): (&[u32], &[u32]) = if southern {
        (&[12, 1, 2], &[6, 7, 8])
    } else {
        (&[6, 7, 8], &[12, 1, 2])
    };
    if high.contains(&month.month()) {
        &tunables.season_high
    } else if low.contains(&month.month()) {
        &tunables.season_low
    } else {
        &tunables.season_shoulder
    }
}

fn pandemic_band<'a>(month: &Month, tunables: &'a Tunables) -> &'a Band {
    if month.year() == 2022 {
        &tunables.pandemic_2022
    } else {
        &tunables.pandemic_recovery
    }
}

/// Generate the monthly series for one territory, from
/// `tunables.series_start` through `end` inclusive.
///
/// Records come out ordered by month, then by the sector order of the
/// input catalog. An empty catalog or an `end` before the series start
/// produces an empty series; the snapshot layer is where that becomes an
/// error.
pub fn generate_historical(
    territory: &TerritoryCode,
    sectors: &[Sector],
    end: Month,
    tunables: &Tunables,
    rng: &mut ChaCha8Rng,
) -> Vec<HistoricalRecord> {
    let months = Month::sequence(tunables.series_start, end);
    let mut records = Vec::with_capacity(months.len() * sectors.len());

    for month in &months {
        let pandemic = pandemic_band(month, tunables).sample(rng);
        let seasonal = seasonal_band(territory, month, tunables).sample(rng);

        for sector in sectors {
            let base_revenue =
                sector.weight * tunables.revenue_spread.sample(rng) * tunables.revenue_base_scale;
            let revenue =
                base_revenue * pandemic * seasonal * tunables.revenue_jitter.sample(rng);
            let volume = sector.import_volume * tunables.volume_spread.sample(rng);
            let average_rate = sector.rates.normal * tunables.rate_spread.sample(rng);

            records.push(HistoricalRecord {
                month: *month,
                territory: territory.clone(),
                sector: sector.code.clone(),
                revenue,
                volume,
                category: sector.category.clone(),
                average_rate,
            });
        }
    }

    tracing::debug!(
        territory = %territory,
        months = months.len(),
        records = records.len(),
        "generated historical series"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use odm_catalog::sectors;
    use rand::SeedableRng;

    fn code(s: &str) -> TerritoryCode {
        TerritoryCode::new(s).unwrap()
    }

    fn series(territory: &str, end: Month, seed: u64) -> Vec<HistoricalRecord> {
        let territory = code(territory);
        let catalog = sectors(&territory).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_historical(&territory, &catalog, end, &Tunables::default(), &mut rng)
    }

    #[test]
    fn one_record_per_month_and_sector() {
        let end = Month::new(2023, 6).unwrap();
        let records = series("REUNION", end, 42);
        // 18 months x 10 sectors
        assert_eq!(records.len(), 18 * 10);

        let mut keys: Vec<_> = records
            .iter()
            .map(|r| (r.month, r.sector.clone()))
            .collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), records.len());
    }

    #[test]
    fn records_are_month_ordered() {
        let end = Month::new(2022, 12).unwrap();
        let records = series("MAYOTTE", end, 1);
        let months: Vec<_> = records.iter().map(|r| r.month).collect();
        let mut sorted = months.clone();
        sorted.sort();
        assert_eq!(months, sorted);
    }

    #[test]
    fn values_respect_configured_bounds() {
        let territory = code("GUADELOUPE");
        let catalog = sectors(&territory).unwrap();
        let tunables = Tunables::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let end = Month::new(2024, 3).unwrap();
        let records = generate_historical(&territory, &catalog, end, &tunables, &mut rng);

        for record in &records {
            let sector = catalog.iter().find(|s| s.code == record.sector).unwrap();
            // Worst-case composition of all multiplicative draws.
            let lo = sector.weight
                * tunables.revenue_spread.lo
                * tunables.revenue_base_scale
                * tunables.pandemic_2022.lo.min(tunables.pandemic_recovery.lo)
                * tunables.season_low.lo
                * tunables.revenue_jitter.lo;
            let hi = sector.weight
                * tunables.revenue_spread.hi
                * tunables.revenue_base_scale
                * tunables.pandemic_2022.hi.max(tunables.pandemic_recovery.hi)
                * tunables.season_high.hi
                * tunables.revenue_jitter.hi;
            assert!(record.revenue >= lo && record.revenue <= hi);
            assert!(tunables
                .volume_spread
                .contains(record.volume / sector.import_volume));
            assert!(tunables
                .rate_spread
                .contains(record.average_rate / sector.rates.normal));
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_series() {
        let end = Month::new(2023, 2).unwrap();
        let a = series("POLYNESIE", end, 1234);
        let b = series("POLYNESIE", end, 1234);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn different_seeds_diverge() {
        let end = Month::new(2022, 3).unwrap();
        let a = series("REUNION", end, 1);
        let b = series("REUNION", end, 2);
        assert_ne!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn southern_group_peaks_in_december() {
        let tunables = Tunables::default();
        let december = Month::new(2023, 12).unwrap();
        let july = Month::new(2023, 7).unwrap();
        let april = Month::new(2023, 4).unwrap();

        let reunion = code("REUNION");
        assert_eq!(
            seasonal_band(&reunion, &december, &tunables),
            &tunables.season_high
        );
        assert_eq!(seasonal_band(&reunion, &july, &tunables), &tunables.season_low);
        assert_eq!(
            seasonal_band(&reunion, &april, &tunables),
            &tunables.season_shoulder
        );

        // Everyone else is inverted.
        let antilles = code("MARTINIQUE");
        assert_eq!(
            seasonal_band(&antilles, &december, &tunables),
            &tunables.season_low
        );
        assert_eq!(
            seasonal_band(&antilles, &july, &tunables),
            &tunables.season_high
        );
    }

    #[test]
    fn end_before_start_yields_empty_series() {
        let end = Month::new(2021, 12).unwrap();
        assert!(series("REUNION", end, 5).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_series() {
        let territory = code("REUNION");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let end = Month::new(2023, 1).unwrap();
        let records = generate_historical(&territory, &[], end, &Tunables::default(), &mut rng);
        assert!(records.is_empty());
    }
}
