//! # odm-catalog — Reference Tables
//!
//! The immutable reference data of the Octroi de Mer core: the fixed
//! eleven-territory catalog, the per-territory economic sector catalogs,
//! and the illustrative product table.
//!
//! ## Design
//!
//! - **Catalogs are pure.** `territories()` is memoized process-wide;
//!   `sectors()` and `products()` recompute per call and are deterministic
//!   for a given territory code. No randomness lives in this crate — the
//!   stochastic layers downstream draw from their own seeded source.
//!
//! - **Declarative bonus rules.** Territory-specific extras (tourism in
//!   Polynésie, mining in Nouvelle-Calédonie, aerospace in Guyane, luxury
//!   goods in Saint-Barthélemy/Saint-Martin) are rows in one rule table,
//!   looked up by territory code rather than branched on.
//!
//! - **Multiplier scaling at the edge.** Sector weights/volumes and product
//!   volumes are scaled by the territory multiplier before they leave this
//!   crate, so consumers never re-apply it.

pub mod products;
pub mod rules;
pub mod sectors;
pub mod territories;

pub use products::{products, Product};
pub use sectors::{sectors, territory_multiplier};
pub use territories::{territories, territory};
