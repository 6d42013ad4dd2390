//! # odm-sim — Randomized Generators
//!
//! The stochastic layer of the Octroi de Mer core: monthly historical
//! series, the latest-month snapshot with its live-refresh nudge, and the
//! cross-territory comparison rollup.
//!
//! ## Determinism
//!
//! Every generator takes an explicit `&mut ChaCha8Rng`. There is no call to
//! a global or thread-local RNG anywhere in this crate, so a fixed seed
//! reproduces every table bit-for-bit. Tests rely on this.
//!
//! ## Tuning
//!
//! All random ranges (pandemic multipliers, seasonal bands, jitters, the
//! monthly change window) are fields of [`Tunables`], whose `Default`
//! carries the documented values. They are tuning constants, not
//! invariants — tests assert against the tunables they pass in.
//!
//! This is a stochastic simulation, not a forecast. No property beyond
//! "values are numeric and within the configured ranges" holds.

pub mod comparison;
pub mod historical;
pub mod snapshot;
pub mod tunables;

pub use comparison::{generate_comparison, ComparisonRow};
pub use historical::{generate_historical, HistoricalRecord};
pub use snapshot::{generate_snapshot, refresh_snapshot, SectorSnapshot};
pub use tunables::{Band, Tunables};
