//! The octroi calculator command.

use clap::Args;
use odm_core::RateTier;
use odm_session::DashboardService;

use crate::{parse_territory, print_json};

/// Arguments for `odm tax`.
#[derive(Args, Debug)]
pub struct TaxArgs {
    /// Territory code, e.g. REUNION (case-insensitive).
    #[arg(long)]
    pub territory: String,
    /// Product label, e.g. "Carburants".
    #[arg(long)]
    pub product: String,
    /// Rate tier from the product's sector schedule; omit to use the
    /// product's own applied rate.
    #[arg(long, value_parser = parse_tier)]
    pub tier: Option<RateTier>,
    /// Declared import value.
    #[arg(long)]
    pub value: f64,
}

fn parse_tier(raw: &str) -> Result<RateTier, String> {
    match raw.to_ascii_lowercase().as_str() {
        "normal" => Ok(RateTier::Normal),
        "reduced" => Ok(RateTier::Reduced),
        "specific" => Ok(RateTier::Specific),
        other => Err(format!(
            "unknown rate tier {other:?}, expected normal|reduced|specific"
        )),
    }
}

/// `odm tax` — quote the octroi due on a declared value.
pub fn tax(args: &TaxArgs, seed: u64) -> anyhow::Result<()> {
    let code = parse_territory(&args.territory)?;
    let service = DashboardService::with_seed(seed);
    let quote = service.tax_quote(&code, &args.product, args.tier, args.value)?;
    print_json(&quote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parsing_is_case_insensitive() {
        assert_eq!(parse_tier("Normal").unwrap(), RateTier::Normal);
        assert_eq!(parse_tier("SPECIFIC").unwrap(), RateTier::Specific);
        assert!(parse_tier("flat").is_err());
    }
}
