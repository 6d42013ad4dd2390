//! # Tunables — Simulation Constants
//!
//! Every random range the generators draw from, gathered in one
//! serde-(de)serializable table. The defaults reproduce the documented
//! simulation; callers may load overrides (the CLI accepts a JSON file).

use odm_core::Month;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A closed uniform sampling band `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower bound, inclusive.
    pub lo: f64,
    /// Upper bound, inclusive.
    pub hi: f64,
}

impl Band {
    /// Construct a band. `lo` must not exceed `hi`; a degenerate band
    /// (`lo == hi`) always samples that value.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Draw one uniform sample from the band.
    pub fn sample(&self, rng: &mut ChaCha8Rng) -> f64 {
        if self.lo >= self.hi {
            return self.lo;
        }
        rng.gen_range(self.lo..self.hi)
    }

    /// Whether `value` lies within the band (inclusive).
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// Tuning table for all generators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// First month of the historical series.
    pub series_start: Month,
    /// Pandemic-era demand multiplier for months in 2022.
    pub pandemic_2022: Band,
    /// Demand multiplier for recovery years (2023 onward).
    pub pandemic_recovery: Band,
    /// Seasonal multiplier in a territory's high season.
    pub season_high: Band,
    /// Seasonal multiplier in a territory's low season.
    pub season_low: Band,
    /// Seasonal multiplier in shoulder months.
    pub season_shoulder: Band,
    /// Euros of monthly revenue per unit of sector weight.
    pub revenue_base_scale: f64,
    /// Per-sector revenue dispersion around the weight.
    pub revenue_spread: Band,
    /// Final per-record revenue jitter.
    pub revenue_jitter: Band,
    /// Per-record import volume dispersion.
    pub volume_spread: Band,
    /// Per-record dispersion of the average applied rate around the
    /// sector's normal rate.
    pub rate_spread: Band,
    /// Month-over-month revenue change window for snapshots, as a
    /// fraction (`-0.08` = −8%).
    pub monthly_change: Band,
    /// Synthetic prior-year revenue as a factor of the last month.
    pub prior_year_spread: Band,
    /// Synthetic current-year projection as a factor of the last month.
    pub projection_spread: Band,
    /// Probability that a live refresh touches a given snapshot row.
    pub live_refresh_probability: f64,
    /// Revenue nudge applied by a live refresh, as a fraction.
    pub live_revenue_nudge: Band,
    /// Volume factor applied by a live refresh.
    pub live_volume_nudge: Band,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            // Month 1 of a valid year is always constructible; encode it
            // directly rather than unwrap a Result in a Default impl.
            series_start: Month::start_of(2022),
            pandemic_2022: Band::new(0.9, 1.1),
            pandemic_recovery: Band::new(1.0, 1.2),
            season_high: Band::new(1.1, 1.3),
            season_low: Band::new(0.9, 1.1),
            season_shoulder: Band::new(0.95, 1.05),
            revenue_base_scale: 1_000_000.0,
            revenue_spread: Band::new(0.8, 1.2),
            revenue_jitter: Band::new(0.95, 1.05),
            volume_spread: Band::new(0.8, 1.2),
            rate_spread: Band::new(0.9, 1.1),
            monthly_change: Band::new(-0.08, 0.08),
            prior_year_spread: Band::new(0.9, 1.1),
            projection_spread: Band::new(1.05, 1.15),
            live_refresh_probability: 0.3,
            live_revenue_nudge: Band::new(-0.02, 0.02),
            live_volume_nudge: Band::new(0.98, 1.02),
        }
    }
}
