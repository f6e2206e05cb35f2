// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Memoized sort keys keyed by entity identifier.
//!
//! ```text
//! get_or_compute(id, f)
//!   lock ------------------------------+
//!   hit?  --> Arc<str> (hits += 1)     |
//!   miss  --> f() --> store            |  guard held for the
//!             (misses += 1)            |  whole unit of work
//!   unlock <---------------------------+
//! ```
//!
//! One cache never calls into itself while computing. Callers that nest two
//! caches must always acquire them in the same order.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Snapshot of cache activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Thread-safe map from identifier to memoized sort key.
#[derive(Debug, Default)]
pub struct SortKeyCache {
    entries: Mutex<HashMap<String, Arc<str>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SortKeyCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cache with room for `capacity` keys.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::with_capacity(capacity)),
            ..Self::default()
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<str>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the stored key for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<str>> {
        self.lock().get(id).cloned()
    }

    /// Stores `key` for `id`, replacing any previous value.
    pub fn put(&self, id: impl Into<String>, key: impl Into<Arc<str>>) {
        self.lock().insert(id.into(), key.into());
    }

    /// Returns the key for `id`, computing and storing it on a miss.
    pub fn get_or_compute<F>(&self, id: &str, compute: F) -> Arc<str>
    where
        F: FnOnce() -> String,
    {
        let result: Result<_, std::convert::Infallible> =
            self.try_get_or_compute(id, || Ok(compute()));
        match result {
            Ok(key) => key,
        }
    }

    /// Fallible [`get_or_compute`](Self::get_or_compute).
    ///
    /// Nothing is stored when `compute` fails.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `compute`.
    pub fn try_get_or_compute<F, E>(&self, id: &str, compute: F) -> Result<Arc<str>, E>
    where
        F: FnOnce() -> Result<String, E>,
    {
        let mut entries = self.lock();
        if let Some(key) = entries.get(id) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(key));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let key: Arc<str> = compute()?.into();
        tracing::trace!(id, key = %key.escape_debug(), "sort key computed");
        entries.insert(id.to_string(), Arc::clone(&key));
        Ok(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
