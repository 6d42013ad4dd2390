//! # odm-cli — Handler Modules
//!
//! One module per command family. Every handler prints pretty JSON to
//! stdout so the output can be piped into `jq` or a notebook.

pub mod catalog;
pub mod compare;
pub mod series;
pub mod tax;

use std::path::Path;

use anyhow::Context;
use odm_core::TerritoryCode;
use odm_sim::Tunables;

/// Shared options every generator-backed command receives.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    /// RNG seed; the same seed reproduces the same tables.
    pub seed: u64,
    /// Tuning table, defaults or file-loaded overrides.
    pub tunables: Tunables,
}

/// Load tunables from a JSON file, or the defaults when no path is given.
pub fn load_tunables(path: Option<&Path>) -> anyhow::Result<Tunables> {
    match path {
        None => Ok(Tunables::default()),
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading tunables file {}", path.display()))?;
            let tunables = serde_json::from_str(&raw)
                .with_context(|| format!("parsing tunables file {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded tunables overrides");
            Ok(tunables)
        }
    }
}

/// Parse a territory code argument.
pub fn parse_territory(raw: &str) -> anyhow::Result<TerritoryCode> {
    // Accept lowercase on the command line; the catalog is uppercase.
    TerritoryCode::new(raw.to_ascii_uppercase()).map_err(Into::into)
}

/// Print any serializable table as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_territory_uppercases() {
        let code = parse_territory("reunion").unwrap();
        assert_eq!(code.as_str(), "REUNION");
    }

    #[test]
    fn parse_territory_rejects_garbage() {
        assert!(parse_territory("st-pierre!").is_err());
    }

    #[test]
    fn missing_tunables_path_uses_defaults() {
        let tunables = load_tunables(None).unwrap();
        assert_eq!(tunables, Tunables::default());
    }
}
