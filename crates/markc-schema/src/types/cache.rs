// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent LRU cache for types outside the known schema.
//!
//! Known elements resolve through dense identifier slots; everything else
//! (user controls, third-party types) goes through a full-name search across
//! host modules. The `TypeNameCache` keeps that search to once per name while
//! it stays hot. A secondary dashmap tracks "pinned" names that must never
//! be evicted (types the caller knows will be hit on every document).

use super::handle::TypeHandle;
use dashmap::DashSet;
use lru::LruCache;
use parking_lot::RwLock;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Instant;

/// Cache hit/miss statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct LookupStats {
    pub hits: u64,
    pub misses: u64,
    pub last_miss_ns: u64,
}

/// LRU-based concurrent cache keyed by fully-qualified type name.
pub struct TypeNameCache {
    inner: RwLock<LruCache<Arc<str>, TypeHandle>>,
    pinned: DashSet<Arc<str>>,
    stats: RwLock<LookupStats>,
}

impl TypeNameCache {
    /// A zero capacity is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: RwLock::new(LruCache::new(capacity)),
            pinned: DashSet::new(),
            stats: RwLock::new(LookupStats::default()),
        }
    }

    /// Return the cached handle for `full_name`, or resolve and cache it.
    ///
    /// Failed resolutions are not cached.
    pub fn get_or_try_resolve<F, E>(&self, full_name: &str, resolve: F) -> Result<TypeHandle, E>
    where
        F: FnOnce() -> Result<TypeHandle, E>,
    {
        if let Some(hit) = self.try_peek(full_name) {
            self.record_hit();
            return Ok(hit);
        }

        let mut cache = self.inner.write();
        if let Some(hit) = cache.get(full_name) {
            self.record_hit();
            return Ok(Arc::clone(hit));
        }

        let start = Instant::now();
        let resolved = resolve()?;
        log::debug!("[RESOLVER] name cache miss for {}", full_name);

        if cache.len() >= cache.cap().get() && !self.free_slot(&mut cache) {
            self.record_miss(start);
            return Ok(resolved);
        }

        cache.put(full_name.into(), Arc::clone(&resolved));
        self.record_miss(start);
        Ok(resolved)
    }

    /// Keep `full_name` resident once cached.
    pub fn pin(&self, full_name: &str) {
        self.pinned.insert(full_name.into());
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.inner.read().contains(full_name)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn stats(&self) -> LookupStats {
        *self.stats.read()
    }

    fn try_peek(&self, full_name: &str) -> Option<TypeHandle> {
        let cache = self.inner.read();
        cache.peek(full_name).map(Arc::clone)
    }

    fn free_slot(&self, cache: &mut LruCache<Arc<str>, TypeHandle>) -> bool {
        let attempts = cache.len();
        for _ in 0..attempts {
            match cache.pop_lru() {
                Some((old_name, old_handle)) if self.pinned.contains(&old_name) => {
                    cache.put(old_name, old_handle);
                }
                Some(_) => return true,
                None => break,
            }
        }
        false
    }

    fn record_hit(&self) {
        let mut stats = self.stats.write();
        stats.hits = stats.hits.saturating_add(1);
    }

    fn record_miss(&self, start: Instant) {
        let mut stats = self.stats.write();
        stats.misses = stats.misses.saturating_add(1);
        stats.last_miss_ns = start.elapsed().as_nanos() as u64;
    }
}

impl std::fmt::Debug for TypeNameCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeNameCache")
            .field("len", &self.len())
            .field("pinned", &self.pinned.len())
            .field("stats", &self.stats())
            .finish()
    }
}
