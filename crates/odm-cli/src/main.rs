//! # odm CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

use odm_cli::{catalog, compare, series, tax, GeneratorOptions};

/// Octroi de Mer data core CLI.
///
/// Dumps the territory/sector/product catalogs, the simulated monthly
/// series, snapshots, and comparison tables as JSON, and quotes octroi
/// amounts for declared imports.
#[derive(Parser, Debug)]
#[command(name = "odm", version, about)]
struct Cli {
    /// RNG seed; the same seed reproduces the same tables.
    #[arg(long, global = true, default_value_t = 42)]
    seed: u64,

    /// JSON file with tunables overrides (partial files are fine).
    #[arg(long, global = true)]
    tunables: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// The fixed eleven-territory catalog.
    Territories,
    /// One territory's multiplier-scaled sector catalog.
    Sectors(catalog::TerritoryArgs),
    /// One territory's illustrative product table.
    Products(catalog::TerritoryArgs),
    /// The monthly historical series for one territory.
    Historical(series::HistoricalArgs),
    /// The latest-month snapshot for one territory.
    Snapshot(series::SnapshotArgs),
    /// The cross-territory comparison rollup.
    Compare,
    /// Quote the octroi due on a declared import value.
    Tax(tax::TaxArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let opts = GeneratorOptions {
        seed: cli.seed,
        tunables: odm_cli::load_tunables(cli.tunables.as_deref())?,
    };

    match cli.command {
        Commands::Territories => catalog::territories(),
        Commands::Sectors(args) => catalog::sectors(&args),
        Commands::Products(args) => catalog::products(&args),
        Commands::Historical(args) => series::historical(&args, opts),
        Commands::Snapshot(args) => series::snapshot(&args, opts),
        Commands::Compare => compare::compare(opts),
        Commands::Tax(args) => tax::tax(&args, cli.seed),
    }
}
