//! # Bonus Rules — Territory-Specific Extras
//!
//! Some territories carry an extra sector (and matching products) on top
//! of the ten-sector base: tourism in Polynésie, mining in
//! Nouvelle-Calédonie, aerospace in Guyane, luxury goods on the two
//! northern Caribbean islands.
//!
//! The extras are rows in one declarative table. Adding a territory rule
//! means adding a row here, not a branch in the catalog builders.

use odm_core::TerritoryCode;

/// Static definition of one sector, before multiplier scaling.
pub(crate) struct SectorDef {
    pub code: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub sub_category: &'static str,
    pub normal: f64,
    pub reduced: f64,
    pub specific: f64,
    pub weight: f64,
    pub import_volume: f64,
}

/// Static definition of one illustrative product, before volume scaling.
pub(crate) struct ProductDef {
    pub label: &'static str,
    pub sector: &'static str,
    pub rate: f64,
    pub volume: f64,
}

/// One territory-specific extension: the territories it applies to and
/// the sector/product rows it contributes.
pub(crate) struct BonusRule {
    pub territories: &'static [&'static str],
    pub sectors: &'static [SectorDef],
    pub products: &'static [ProductDef],
}

pub(crate) const BONUS_RULES: &[BonusRule] = &[
    BonusRule {
        territories: &["POLYNESIE"],
        sectors: &[SectorDef {
            code: "TOURISME",
            name: "Tourisme et Hôtellerie",
            category: "Services",
            sub_category: "Tourisme",
            normal: 3.5,
            reduced: 1.5,
            specific: 0.0,
            weight: 18.0,
            import_volume: 150_000.0,
        }],
        products: &[
            ProductDef { label: "Équipements hôteliers", sector: "TOURISME", rate: 1.5, volume: 25_000.0 },
            ProductDef { label: "Produits de plage", sector: "TOURISME", rate: 3.0, volume: 15_000.0 },
            ProductDef { label: "Matériel de plongée", sector: "TOURISME", rate: 2.5, volume: 8_000.0 },
        ],
    },
    BonusRule {
        territories: &["CALEDONIE"],
        sectors: &[SectorDef {
            code: "MINIER",
            name: "Industrie Minière",
            category: "Industrie",
            sub_category: "Mines",
            normal: 2.8,
            reduced: 1.2,
            specific: 0.0,
            weight: 15.0,
            import_volume: 120_000.0,
        }],
        products: &[
            ProductDef { label: "Équipements miniers", sector: "MINIER", rate: 1.2, volume: 12_000.0 },
            ProductDef { label: "Produits métallurgiques", sector: "MINIER", rate: 2.8, volume: 18_000.0 },
        ],
    },
    BonusRule {
        territories: &["GUYANE"],
        sectors: &[SectorDef {
            code: "SPATIAL",
            name: "Industrie Spatiale",
            category: "High-Tech",
            sub_category: "Aérospatiale",
            normal: 1.5,
            reduced: 0.5,
            specific: 0.0,
            weight: 8.0,
            import_volume: 50_000.0,
        }],
        products: &[
            ProductDef { label: "Composants spatiaux", sector: "SPATIAL", rate: 0.5, volume: 5_000.0 },
            ProductDef { label: "Équipements de télécommunication", sector: "SPATIAL", rate: 1.0, volume: 8_000.0 },
        ],
    },
    BonusRule {
        territories: &["STBARTH", "STMARTIN"],
        sectors: &[SectorDef {
            code: "LUXE",
            name: "Produits de Luxe",
            category: "Commerce",
            sub_category: "Luxe",
            normal: 6.0,
            reduced: 3.0,
            specific: 8.0,
            weight: 20.0,
            import_volume: 80_000.0,
        }],
        products: &[
            ProductDef { label: "Montres de luxe", sector: "LUXE", rate: 6.0, volume: 2_000.0 },
            ProductDef { label: "Bijoux précieux", sector: "LUXE", rate: 8.0, volume: 1_500.0 },
            ProductDef { label: "Haute couture", sector: "LUXE", rate: 5.0, volume: 3_000.0 },
        ],
    },
];

/// Every bonus rule applying to `code`, in table order.
pub(crate) fn bonus_for(code: &TerritoryCode) -> impl Iterator<Item = &'static BonusRule> {
    let code = code.as_str().to_string();
    BONUS_RULES
        .iter()
        .filter(move |rule| rule.territories.contains(&code.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynesie_gets_tourism() {
        let code = TerritoryCode::new("POLYNESIE").unwrap();
        let rules: Vec<_> = bonus_for(&code).collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].sectors[0].code, "TOURISME");
        assert_eq!(rules[0].products.len(), 3);
    }

    #[test]
    fn both_northern_islands_share_the_luxury_rule() {
        for code in ["STBARTH", "STMARTIN"] {
            let code = TerritoryCode::new(code).unwrap();
            let rules: Vec<_> = bonus_for(&code).collect();
            assert_eq!(rules.len(), 1);
            assert_eq!(rules[0].sectors[0].code, "LUXE");
        }
    }

    #[test]
    fn mainland_drom_has_no_bonus() {
        let code = TerritoryCode::new("MARTINIQUE").unwrap();
        assert_eq!(bonus_for(&code).count(), 0);
    }
}
