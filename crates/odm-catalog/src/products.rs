//! # Product Catalog
//!
//! A flat table of illustrative products per territory, used by the tax
//! calculator and demo widgets. Ten base products, extended by the bonus
//! rules, volumes scaled by the territory multiplier. No randomness.

use odm_core::{OdmError, SectorCode, TerritoryCode};
use serde::{Deserialize, Serialize};

use crate::rules::{bonus_for, ProductDef};
use crate::sectors::territory_multiplier;
use crate::territories::territory;

#[rustfmt::skip]
const BASE_PRODUCTS: &[ProductDef] = &[
    ProductDef { label: "Véhicules particuliers",     sector: "AUTOMOBILE",         rate: 12.2, volume: 12_000.0 },
    ProductDef { label: "Carburants",                 sector: "ENERGIE",            rate: 2.2,  volume: 420_000.0 },
    ProductDef { label: "Boissons alcoolisées",       sector: "BOISSONS",           rate: 8.5,  volume: 85_000.0 },
    ProductDef { label: "Matériaux construction",     sector: "BTP",                rate: 2.1,  volume: 280_000.0 },
    ProductDef { label: "Produits alimentaires",      sector: "AGROALIMENTAIRE",    rate: 1.8,  volume: 320_000.0 },
    ProductDef { label: "Fruits et légumes",          sector: "AGRICULTURE",        rate: 1.3,  volume: 450_000.0 },
    ProductDef { label: "Équipements électroniques",  sector: "TIC",                rate: 2.7,  volume: 88_000.0 },
    ProductDef { label: "Médicaments",                sector: "PHARMACEUTIQUE",     rate: 0.8,  volume: 65_000.0 },
    ProductDef { label: "Meubles et ameublement",     sector: "BIENS_CONSOMMATION", rate: 3.1,  volume: 45_000.0 },
    ProductDef { label: "Machines industrielles",     sector: "BIENS_EQUIPEMENT",   rate: 2.9,  volume: 35_000.0 },
];

/// One illustrative product with its own applied rate and import volume.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Display label, e.g. "Carburants".
    pub label: String,
    /// The sector this product belongs to.
    pub sector: SectorCode,
    /// Applied octroi rate, percent.
    pub rate: f64,
    /// Import volume, multiplier-scaled.
    pub volume: f64,
}

/// Build the product table for one territory.
///
/// # Errors
///
/// Returns [`OdmError::InvalidTerritory`] when the code is not in the
/// territory catalog.
pub fn products(code: &TerritoryCode) -> Result<Vec<Product>, OdmError> {
    territory(code)?;
    let factor = territory_multiplier(code);

    let bonus = bonus_for(code).flat_map(|rule| rule.products.iter());
    BASE_PRODUCTS
        .iter()
        .chain(bonus)
        .map(|def| {
            Ok(Product {
                label: def.label.to_string(),
                sector: SectorCode::new(def.sector)?,
                rate: def.rate,
                volume: def.volume * factor,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sectors::sectors;

    fn code(s: &str) -> TerritoryCode {
        TerritoryCode::new(s).unwrap()
    }

    #[test]
    fn base_list_has_ten_products() {
        let list = products(&code("MARTINIQUE")).unwrap();
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn polynesie_gains_three_tourism_products() {
        let list = products(&code("POLYNESIE")).unwrap();
        assert_eq!(list.len(), 13);
        let tourism = list
            .iter()
            .filter(|p| p.sector.as_str() == "TOURISME")
            .count();
        assert_eq!(tourism, 3);
    }

    #[test]
    fn volumes_scaled_by_multiplier() {
        let list = products(&code("GUYANE")).unwrap();
        let fuel = list.iter().find(|p| p.label == "Carburants").unwrap();
        assert!((fuel.volume - 420_000.0 * 0.7).abs() < 1e-9);
    }

    #[test]
    fn every_product_sector_exists_in_the_territory_catalog() {
        for t in crate::territories() {
            let catalog = sectors(&t.code).unwrap();
            for product in products(&t.code).unwrap() {
                assert!(
                    catalog.iter().any(|s| s.code == product.sector),
                    "{} references missing sector {} in {}",
                    product.label,
                    product.sector,
                    t.code
                );
            }
        }
    }

    #[test]
    fn unknown_territory_rejected() {
        assert!(products(&code("ATLANTIS")).is_err());
    }
}
