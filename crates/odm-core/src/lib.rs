//! # odm-core — Foundational Types for the Octroi de Mer Data Core
//!
//! This crate is the bedrock of the Octroi de Mer workspace. It defines the
//! type-system primitives shared by every other crate: validated territory
//! and sector codes, the monthly period primitive, tax-rate schedules, the
//! tax calculator, and the error hierarchy.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `TerritoryCode` and
//!    `SectorCode` are newtypes with validated constructors. No bare strings
//!    for identifiers.
//!
//! 2. **Monthly granularity, UTC only.** The simulated series is monthly;
//!    `Month` is the single temporal primitive and is ordered, so series
//!    ordering never depends on string comparison.
//!
//! 3. **Closed rate vocabulary.** `RateTier` is an enum with three variants;
//!    selecting a rate from a `RateSchedule` is an exhaustive `match`, never
//!    a string lookup.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `odm-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod period;
pub mod sector;
pub mod tax;
pub mod territory;

// Re-export primary types for ergonomic imports.
pub use error::OdmError;
pub use period::Month;
pub use sector::{RateSchedule, RateTier, Sector, SectorCode};
pub use tax::compute_tax;
pub use territory::{Currency, LegalStatus, Territory, TerritoryCode};
