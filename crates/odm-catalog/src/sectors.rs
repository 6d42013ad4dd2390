//! # Sector Catalog
//!
//! The ten-sector base table, the per-territory multiplier table, and the
//! catalog builder that assembles a territory's sector list: base rows plus
//! any bonus rows, weights and volumes scaled by the territory multiplier.
//!
//! ## Invariant
//!
//! Sector codes are unique within one territory's catalog. The base table
//! and the bonus rules use disjoint code sets, so the builder never has to
//! deduplicate.

use odm_core::{OdmError, RateSchedule, Sector, SectorCode, TerritoryCode};

use crate::rules::{bonus_for, SectorDef};
use crate::territories::territory;

/// Import-base adjustment factor per territory, in `[0.25, 1.0]`.
/// Unknown codes default to 1.0.
#[rustfmt::skip]
const TERRITORY_MULTIPLIERS: &[(&str, f64)] = &[
    ("REUNION",    1.0),
    ("GUADELOUPE", 0.95),
    ("MARTINIQUE", 0.9),
    ("GUYANE",     0.7),
    ("MAYOTTE",    0.5),
    ("STPIERRE",   0.3),
    ("STBARTH",    0.4),
    ("STMARTIN",   0.45),
    ("WALLIS",     0.25),
    ("POLYNESIE",  0.8),
    ("CALEDONIE",  0.85),
];

#[rustfmt::skip]
const BASE_SECTORS: &[SectorDef] = &[
    SectorDef { code: "AGRICULTURE",        name: "Produits Agricoles",         category: "Alimentation", sub_category: "Fruits & Légumes",    normal: 2.5, reduced: 1.3, specific: 0.0,  weight: 15.2, import_volume: 450_000.0 },
    SectorDef { code: "AGROALIMENTAIRE",    name: "Industrie Agroalimentaire",  category: "Alimentation", sub_category: "Produits Transformés", normal: 3.2, reduced: 1.8, specific: 0.5,  weight: 22.8, import_volume: 320_000.0 },
    SectorDef { code: "BOISSONS",           name: "Boissons et Alcools",        category: "Alimentation", sub_category: "Liquides",             normal: 5.8, reduced: 3.2, specific: 8.5,  weight: 8.5,  import_volume: 180_000.0 },
    SectorDef { code: "BTP",                name: "Matériaux de Construction",  category: "Industrie",    sub_category: "Matériaux",            normal: 4.2, reduced: 2.1, specific: 1.5,  weight: 12.3, import_volume: 280_000.0 },
    SectorDef { code: "AUTOMOBILE",         name: "Véhicules et Pièces",        category: "Transport",    sub_category: "Véhicules",            normal: 6.5, reduced: 3.8, specific: 12.2, weight: 9.8,  import_volume: 75_000.0 },
    SectorDef { code: "ENERGIE",            name: "Produits Pétroliers",        category: "Énergie",      sub_category: "Carburants",           normal: 3.8, reduced: 2.2, specific: 0.8,  weight: 14.7, import_volume: 420_000.0 },
    SectorDef { code: "BIENS_EQUIPEMENT",   name: "Biens d'Équipement",         category: "Industrie",    sub_category: "Machines",             normal: 4.8, reduced: 2.9, specific: 3.2,  weight: 7.2,  import_volume: 95_000.0 },
    SectorDef { code: "BIENS_CONSOMMATION", name: "Biens de Consommation",      category: "Commerce",     sub_category: "Divers",               normal: 5.2, reduced: 3.1, specific: 4.5,  weight: 16.5, import_volume: 210_000.0 },
    SectorDef { code: "PHARMACEUTIQUE",     name: "Produits Pharmaceutiques",   category: "Santé",        sub_category: "Médicaments",          normal: 1.2, reduced: 0.8, specific: 0.3,  weight: 4.8,  import_volume: 65_000.0 },
    SectorDef { code: "TIC",                name: "Technologies Information",   category: "High-Tech",    sub_category: "Électronique",         normal: 4.5, reduced: 2.7, specific: 6.8,  weight: 5.2,  import_volume: 88_000.0 },
];

/// The import-base multiplier for a territory. Unknown codes get 1.0.
pub fn territory_multiplier(code: &TerritoryCode) -> f64 {
    TERRITORY_MULTIPLIERS
        .iter()
        .find(|(c, _)| *c == code.as_str())
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

fn build_sector(def: &SectorDef, factor: f64) -> Result<Sector, OdmError> {
    Ok(Sector {
        code: SectorCode::new(def.code)?,
        name: def.name.to_string(),
        category: def.category.to_string(),
        sub_category: def.sub_category.to_string(),
        rates: RateSchedule {
            normal: def.normal,
            reduced: def.reduced,
            specific: def.specific,
        },
        weight: def.weight * factor,
        import_volume: def.import_volume * factor,
    })
}

/// Build the sector catalog for one territory: the ten base sectors plus
/// any bonus sectors, scaled by the territory multiplier.
///
/// # Errors
///
/// Returns [`OdmError::InvalidTerritory`] when the code is not in the
/// territory catalog.
pub fn sectors(code: &TerritoryCode) -> Result<Vec<Sector>, OdmError> {
    territory(code)?;
    let factor = territory_multiplier(code);

    let mut catalog = Vec::with_capacity(BASE_SECTORS.len() + 1);
    for def in BASE_SECTORS {
        catalog.push(build_sector(def, factor)?);
    }
    for rule in bonus_for(code) {
        for def in rule.sectors {
            catalog.push(build_sector(def, factor)?);
        }
    }

    tracing::debug!(
        territory = %code,
        sectors = catalog.len(),
        factor,
        "built sector catalog"
    );
    Ok(catalog)
}
