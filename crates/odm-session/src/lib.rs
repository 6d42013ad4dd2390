//! # odm-session — Session Cache & Service Facade
//!
//! The stateful rim around the pure core. A [`SessionCache`] holds one
//! generated [`TerritoryBundle`] per territory with an explicit
//! time-to-live and explicit invalidation; a [`DashboardService`] owns the
//! cache, the seeded RNG, and the tunables, and exposes the operations a
//! presentation layer calls.
//!
//! ## Ownership
//!
//! The cache is a plain value owned by whoever owns the service — one per
//! session or request context. Nothing here is global, `static`, or
//! synchronized; sessions do not share state, so there is nothing to lock.
//!
//! ## Ordering guarantee
//!
//! The only ordering the system needs: a snapshot is always computed after
//! (and from) its historical series. `DashboardService::bundle` builds the
//! pieces in that order and stores them together, so a cached snapshot can
//! never outlive the series it was derived from.

pub mod cache;
pub mod service;

pub use cache::{SessionCache, TerritoryBundle};
pub use service::{DashboardService, TaxQuote};
