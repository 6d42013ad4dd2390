//! Catalog dumps: territories, sectors, products.

use clap::Args;

use crate::{parse_territory, print_json};

/// Arguments for the catalog commands that need a territory.
#[derive(Args, Debug)]
pub struct TerritoryArgs {
    /// Territory code, e.g. REUNION (case-insensitive).
    #[arg(long)]
    pub territory: String,
}

/// `odm territories` — the fixed eleven-territory table.
pub fn territories() -> anyhow::Result<()> {
    print_json(&odm_catalog::territories())
}

/// `odm sectors` — one territory's multiplier-scaled sector catalog.
pub fn sectors(args: &TerritoryArgs) -> anyhow::Result<()> {
    let code = parse_territory(&args.territory)?;
    print_json(&odm_catalog::sectors(&code)?)
}

/// `odm products` — one territory's illustrative product table.
pub fn products(args: &TerritoryArgs) -> anyhow::Result<()> {
    let code = parse_territory(&args.territory)?;
    print_json(&odm_catalog::products(&code)?)
}
