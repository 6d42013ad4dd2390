//! # Session Cache
//!
//! A per-session map of territory code → generated bundle, with an
//! explicit TTL and explicit invalidation. Stale entries are evicted on
//! access; there is no background sweeper because a session touches one
//! territory at a time and recomputation is cheap.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use odm_catalog::Product;
use odm_core::{Sector, TerritoryCode};
use odm_sim::{HistoricalRecord, SectorSnapshot};
use serde::{Deserialize, Serialize};

/// Everything generated for one territory, kept together so the snapshot
/// can never be served without the series it was derived from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryBundle {
    /// Multiplier-scaled sector catalog.
    pub sectors: Vec<Sector>,
    /// Monthly series from the configured start through the latest month.
    pub historical: Vec<HistoricalRecord>,
    /// Latest-month snapshot derived from `historical`.
    pub snapshot: Vec<SectorSnapshot>,
    /// Illustrative product table.
    pub products: Vec<Product>,
    /// When this bundle was generated (UTC); freshness is measured from
    /// here.
    pub generated_at: DateTime<Utc>,
}

/// TTL-bounded bundle cache, one entry per territory.
#[derive(Debug)]
pub struct SessionCache {
    ttl: Duration,
    entries: HashMap<TerritoryCode, TerritoryBundle>,
}

impl SessionCache {
    /// Create an empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Whether a fresh (non-expired) entry exists for `code`.
    pub fn is_fresh(&self, code: &TerritoryCode) -> bool {
        self.entries
            .get(code)
            .is_some_and(|bundle| Utc::now() - bundle.generated_at <= self.ttl)
    }

    /// The fresh entry for `code`, evicting it first if it has expired.
    pub fn get(&mut self, code: &TerritoryCode) -> Option<&TerritoryBundle> {
        self.evict_if_stale(code);
        self.entries.get(code)
    }

    /// Mutable access to the fresh entry for `code`.
    pub fn get_mut(&mut self, code: &TerritoryCode) -> Option<&mut TerritoryBundle> {
        self.evict_if_stale(code);
        self.entries.get_mut(code)
    }

    /// Store a bundle, replacing any previous entry for the territory.
    pub fn insert(&mut self, code: TerritoryCode, bundle: TerritoryBundle) -> &mut TerritoryBundle {
        match self.entries.entry(code) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(bundle);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(bundle),
        }
    }

    /// Drop the entry for one territory, if present.
    pub fn invalidate(&mut self, code: &TerritoryCode) -> bool {
        let removed = self.entries.remove(code).is_some();
        if removed {
            tracing::debug!(territory = %code, "invalidated cached bundle");
        }
        removed
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_if_stale(&mut self, code: &TerritoryCode) {
        let stale = self
            .entries
            .get(code)
            .is_some_and(|bundle| Utc::now() - bundle.generated_at > self.ttl);
        if stale {
            tracing::debug!(territory = %code, "evicting expired bundle");
            self.entries.remove(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> TerritoryCode {
        TerritoryCode::new(s).unwrap()
    }

    fn empty_bundle(generated_at: DateTime<Utc>) -> TerritoryBundle {
        TerritoryBundle {
            sectors: Vec::new(),
            historical: Vec::new(),
            snapshot: Vec::new(),
            products: Vec::new(),
            generated_at,
        }
    }

    #[test]
    fn fresh_entry_is_served() {
        let mut cache = SessionCache::new(Duration::minutes(30));
        cache.insert(code("REUNION"), empty_bundle(Utc::now()));
        assert!(cache.is_fresh(&code("REUNION")));
        assert!(cache.get(&code("REUNION")).is_some());
    }

    #[test]
    fn expired_entry_is_evicted_on_access() {
        let mut cache = SessionCache::new(Duration::minutes(30));
        let old = Utc::now() - Duration::hours(2);
        cache.insert(code("MAYOTTE"), empty_bundle(old));
        assert!(!cache.is_fresh(&code("MAYOTTE")));
        assert!(cache.get(&code("MAYOTTE")).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_removes_entry() {
        let mut cache = SessionCache::new(Duration::minutes(30));
        cache.insert(code("GUYANE"), empty_bundle(Utc::now()));
        assert!(cache.invalidate(&code("GUYANE")));
        assert!(!cache.invalidate(&code("GUYANE")));
        assert!(cache.get(&code("GUYANE")).is_none());
    }

    #[test]
    fn insert_replaces_previous_bundle() {
        let mut cache = SessionCache::new(Duration::minutes(30));
        let first = Utc::now() - Duration::minutes(5);
        let second = Utc::now();
        cache.insert(code("WALLIS"), empty_bundle(first));
        cache.insert(code("WALLIS"), empty_bundle(second));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&code("WALLIS")).unwrap().generated_at, second);
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = SessionCache::new(Duration::minutes(30));
        cache.insert(code("REUNION"), empty_bundle(Utc::now()));
        cache.insert(code("GUYANE"), empty_bundle(Utc::now()));
        cache.clear();
        assert!(cache.is_empty());
    }
}
