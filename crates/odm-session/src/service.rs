//! # Dashboard Service Facade
//!
//! The single entry point a presentation layer talks to. Owns the seeded
//! RNG, the tunables, and the session cache; everything else is delegated
//! to the catalog and generator crates.
//!
//! One user action maps to one method call here, synchronously: either a
//! cache hit or a full recomputation, then a render on the caller's side.

use chrono::Duration;
use odm_catalog::Product;
use odm_core::{
    compute_tax, Month, OdmError, RateTier, Sector, Territory, TerritoryCode,
};
use odm_sim::{
    generate_comparison, generate_historical, generate_snapshot, refresh_snapshot, ComparisonRow,
    HistoricalRecord, SectorSnapshot, Tunables,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::cache::{SessionCache, TerritoryBundle};

/// Default bundle TTL: matches the coarse reference-data cadence of the
/// dashboard (catalogs barely move within a session).
const DEFAULT_TTL_MINUTES: i64 = 30;

/// A resolved tax calculation for one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxQuote {
    /// Product the quote applies to.
    pub product: String,
    /// Rate tier used, if the caller picked one (otherwise the product's
    /// own applied rate).
    pub tier: Option<RateTier>,
    /// Rate applied, percent.
    pub rate_pct: f64,
    /// Declared import value.
    pub declared_value: f64,
    /// Octroi due.
    pub amount: f64,
}

/// Session-scoped service over the catalogs, generators, and cache.
#[derive(Debug)]
pub struct DashboardService {
    tunables: Tunables,
    rng: ChaCha8Rng,
    cache: SessionCache,
}

impl DashboardService {
    /// Create a service with a fixed RNG seed and default tunables/TTL.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, Tunables::default(), Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Create a service with explicit seed, tunables, and cache TTL.
    pub fn new(seed: u64, tunables: Tunables, ttl: Duration) -> Self {
        Self {
            tunables,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cache: SessionCache::new(ttl),
        }
    }

    /// The tunables this service generates with.
    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// The fixed territory catalog.
    pub fn territories(&self) -> &'static [Territory] {
        odm_catalog::territories()
    }

    /// The multiplier-scaled sector catalog for one territory.
    pub fn sectors(&self, code: &TerritoryCode) -> Result<Vec<Sector>, OdmError> {
        odm_catalog::sectors(code)
    }

    /// The monthly series for one territory over an explicit catalog,
    /// ending at the current UTC month.
    pub fn historical(
        &mut self,
        code: &TerritoryCode,
        sectors: &[Sector],
    ) -> Vec<HistoricalRecord> {
        generate_historical(code, sectors, Month::current(), &self.tunables, &mut self.rng)
    }

    /// The latest-month snapshot over an explicit catalog and series.
    pub fn snapshot(
        &mut self,
        code: &TerritoryCode,
        sectors: &[Sector],
        historical: &[HistoricalRecord],
    ) -> Result<Vec<SectorSnapshot>, OdmError> {
        generate_snapshot(code, sectors, historical, &self.tunables, &mut self.rng)
    }

    /// The illustrative product table for one territory.
    pub fn products(&self, code: &TerritoryCode) -> Result<Vec<Product>, OdmError> {
        odm_catalog::products(code)
    }

    /// One comparison row per active territory.
    pub fn comparison(&mut self) -> Result<Vec<ComparisonRow>, OdmError> {
        generate_comparison(odm_catalog::territories(), &self.tunables, &mut self.rng)
    }

    /// The cached bundle for a territory, regenerating when absent or
    /// expired.
    pub fn bundle(&mut self, code: &TerritoryCode) -> Result<&TerritoryBundle, OdmError> {
        if !self.cache.is_fresh(code) {
            tracing::info!(territory = %code, "generating territory bundle");
            let bundle = self.generate_bundle(code)?;
            return Ok(self.cache.insert(code.clone(), bundle));
        }
        tracing::debug!(territory = %code, "bundle cache hit");
        // is_fresh above guarantees presence; the error arm is for the
        // type checker, not for runtime.
        self.cache
            .get(code)
            .ok_or_else(|| OdmError::invalid_territory(code))
    }

    /// Apply a live-refresh pass to the cached snapshot of `code`,
    /// generating the bundle first if needed. Returns how many rows moved.
    pub fn refresh(&mut self, code: &TerritoryCode) -> Result<usize, OdmError> {
        self.bundle(code)?;
        let tunables = self.tunables;
        let bundle = self
            .cache
            .get_mut(code)
            .ok_or_else(|| OdmError::invalid_territory(code))?;
        Ok(refresh_snapshot(&mut bundle.snapshot, &tunables, &mut self.rng))
    }

    /// Drop the cached bundle for one territory.
    pub fn invalidate(&mut self, code: &TerritoryCode) -> bool {
        self.cache.invalidate(code)
    }

    /// Drop every cached bundle.
    pub fn clear_cache(&mut self) {
        self.cache.clear()
    }

    /// Quote the octroi due on a declared value for one of the
    /// territory's products.
    ///
    /// With `tier: None` the product's own applied rate is used; with a
    /// tier, the rate comes from the product's sector schedule.
    ///
    /// # Errors
    ///
    /// [`OdmError::InvalidTerritory`] for an unknown territory,
    /// [`OdmError::InvalidInput`] for an unknown product label or an
    /// out-of-domain declared value.
    pub fn tax_quote(
        &self,
        code: &TerritoryCode,
        product_label: &str,
        tier: Option<RateTier>,
        declared_value: f64,
    ) -> Result<TaxQuote, OdmError> {
        let products = odm_catalog::products(code)?;
        let product = products
            .iter()
            .find(|p| p.label == product_label)
            .ok_or_else(|| {
                OdmError::InvalidInput(format!(
                    "unknown product {product_label:?} for territory {code}"
                ))
            })?;

        let rate_pct = match tier {
            None => product.rate,
            Some(tier) => {
                let sectors = odm_catalog::sectors(code)?;
                let sector = sectors
                    .iter()
                    .find(|s| s.code == product.sector)
                    .ok_or_else(|| {
                        OdmError::InsufficientData(format!(
                            "product {product_label:?} references missing sector {}",
                            product.sector
                        ))
                    })?;
                sector.rates.rate(tier)
            }
        };

        Ok(TaxQuote {
            product: product.label.clone(),
            tier,
            rate_pct,
            declared_value,
            amount: compute_tax(declared_value, rate_pct)?,
        })
    }

    fn generate_bundle(&mut self, code: &TerritoryCode) -> Result<TerritoryBundle, OdmError> {
        let sectors = odm_catalog::sectors(code)?;
        let historical = generate_historical(
            code,
            &sectors,
            Month::current(),
            &self.tunables,
            &mut self.rng,
        );
        let snapshot =
            generate_snapshot(code, &sectors, &historical, &self.tunables, &mut self.rng)?;
        let products = odm_catalog::products(code)?;
        Ok(TerritoryBundle {
            sectors,
            historical,
            snapshot,
            products,
            generated_at: chrono::Utc::now(),
        })
    }
}
