//! Series commands: the monthly historical table and the latest-month
//! snapshot, generated from a seed so runs are reproducible.

use clap::Args;
use odm_core::Month;
use odm_sim::{generate_historical, generate_snapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{parse_territory, print_json, GeneratorOptions};

/// Arguments for `odm historical`.
#[derive(Args, Debug)]
pub struct HistoricalArgs {
    /// Territory code, e.g. REUNION (case-insensitive).
    #[arg(long)]
    pub territory: String,
    /// Last month of the series (YYYY-MM); defaults to the current month.
    #[arg(long, value_parser = Month::parse)]
    pub end: Option<Month>,
}

/// Arguments for `odm snapshot`.
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Territory code, e.g. REUNION (case-insensitive).
    #[arg(long)]
    pub territory: String,
}

/// `odm historical` — dump the monthly series for one territory.
pub fn historical(args: &HistoricalArgs, opts: GeneratorOptions) -> anyhow::Result<()> {
    let code = parse_territory(&args.territory)?;
    let sectors = odm_catalog::sectors(&code)?;
    let end = args.end.unwrap_or_else(Month::current);
    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let records = generate_historical(&code, &sectors, end, &opts.tunables, &mut rng);
    print_json(&records)
}

/// `odm snapshot` — derive and dump the latest-month snapshot.
pub fn snapshot(args: &SnapshotArgs, opts: GeneratorOptions) -> anyhow::Result<()> {
    let code = parse_territory(&args.territory)?;
    let sectors = odm_catalog::sectors(&code)?;
    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let records =
        generate_historical(&code, &sectors, Month::current(), &opts.tunables, &mut rng);
    let snapshot = generate_snapshot(&code, &sectors, &records, &opts.tunables, &mut rng)?;
    print_json(&snapshot)
}
