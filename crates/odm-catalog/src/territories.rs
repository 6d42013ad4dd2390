//! # Territory Catalog
//!
//! The fixed table of eleven DROM-COM territories with their demographic
//! and economic attributes. Built once per process behind a `OnceLock`;
//! rebuilding would produce identical values, the memoization only avoids
//! reallocation.
//!
//! Saint-Barthélemy and Saint-Martin carry `octroi_active: false` — the
//! regime is not levied there, and the comparison aggregator skips them.

use std::sync::OnceLock;

use odm_core::{Currency, LegalStatus, OdmError, Territory, TerritoryCode};

static CATALOG: OnceLock<Vec<Territory>> = OnceLock::new();

struct TerritoryDef {
    code: &'static str,
    name: &'static str,
    status: LegalStatus,
    population: u64,
    area_km2: u32,
    gdp_billions: f64,
    currency: Currency,
    octroi_active: bool,
}

#[rustfmt::skip]
const TERRITORY_DEFS: &[TerritoryDef] = &[
    TerritoryDef { code: "REUNION",    name: "La Réunion",               status: LegalStatus::Drom, population: 860_000, area_km2: 2_511,  gdp_billions: 19.8, currency: Currency::Eur, octroi_active: true },
    TerritoryDef { code: "GUADELOUPE", name: "Guadeloupe",               status: LegalStatus::Drom, population: 384_000, area_km2: 1_628,  gdp_billions: 9.1,  currency: Currency::Eur, octroi_active: true },
    TerritoryDef { code: "MARTINIQUE", name: "Martinique",               status: LegalStatus::Drom, population: 376_000, area_km2: 1_128,  gdp_billions: 8.9,  currency: Currency::Eur, octroi_active: true },
    TerritoryDef { code: "GUYANE",     name: "Guyane",                   status: LegalStatus::Drom, population: 290_000, area_km2: 83_534, gdp_billions: 4.8,  currency: Currency::Eur, octroi_active: true },
    TerritoryDef { code: "MAYOTTE",    name: "Mayotte",                  status: LegalStatus::Drom, population: 270_000, area_km2: 374,    gdp_billions: 2.4,  currency: Currency::Eur, octroi_active: true },
    TerritoryDef { code: "STPIERRE",   name: "Saint-Pierre-et-Miquelon", status: LegalStatus::Com,  population: 6_000,   area_km2: 242,    gdp_billions: 0.2,  currency: Currency::Eur, octroi_active: true },
    TerritoryDef { code: "STBARTH",    name: "Saint-Barthélemy",         status: LegalStatus::Com,  population: 10_000,  area_km2: 21,     gdp_billions: 0.6,  currency: Currency::Eur, octroi_active: false },
    TerritoryDef { code: "STMARTIN",   name: "Saint-Martin",             status: LegalStatus::Com,  population: 32_000,  area_km2: 54,     gdp_billions: 0.9,  currency: Currency::Eur, octroi_active: false },
    TerritoryDef { code: "WALLIS",     name: "Wallis-et-Futuna",         status: LegalStatus::Com,  population: 11_500,  area_km2: 142,    gdp_billions: 0.2,  currency: Currency::Xpf, octroi_active: true },
    TerritoryDef { code: "POLYNESIE",  name: "Polynésie française",      status: LegalStatus::Com,  population: 280_000, area_km2: 4_167,  gdp_billions: 7.2,  currency: Currency::Xpf, octroi_active: true },
    TerritoryDef { code: "CALEDONIE",  name: "Nouvelle-Calédonie",       status: LegalStatus::Com,  population: 271_000, area_km2: 18_575, gdp_billions: 9.7,  currency: Currency::Xpf, octroi_active: true },
];

/// The fixed territory catalog, in declaration order.
pub fn territories() -> &'static [Territory] {
    CATALOG.get_or_init(|| {
        tracing::debug!(count = TERRITORY_DEFS.len(), "building territory catalog");
        TERRITORY_DEFS
            .iter()
            .map(|def| Territory {
                code: TerritoryCode::new(def.code).expect("static territory code is valid"),
                name: def.name.to_string(),
                status: def.status,
                population: def.population,
                area_km2: def.area_km2,
                gdp_billions: def.gdp_billions,
                currency: def.currency,
                octroi_active: def.octroi_active,
            })
            .collect()
    })
}

/// Look up one territory by code.
///
/// # Errors
///
/// Returns [`OdmError::InvalidTerritory`] when the code is not in the
/// catalog.
pub fn territory(code: &TerritoryCode) -> Result<&'static Territory, OdmError> {
    territories()
        .iter()
        .find(|t| &t.code == code)
        .ok_or_else(|| OdmError::invalid_territory(code))
}
