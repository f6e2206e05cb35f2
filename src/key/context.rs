// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-run owner of the sort-key caches.
//!
//! ```text
//! SortContext (one per generation run, shared by &ref across workers)
//!   references: SortKeyCache ──lock──┐
//!                                    │ miss: resolve file, parent
//!   elements:   SortKeyCache <─lock──┘       element_key(parent)
//!
//! lock order: references --> elements, never the reverse
//! ```

use std::sync::Arc;

use crate::cache::{CacheStats, SortKeyCache};
use crate::error::OrderResult;
use crate::model::{Element, ElementLookup, Reference, TargetKey};

use super::{element_sort_key, reference_sort_key, target_sort_key};

/// Cache activity of both key caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextStats {
    pub elements: CacheStats,
    pub references: CacheStats,
}

/// Memoizes element and reference sort keys for one generation run.
///
/// Keys are computed on first use and never invalidated; drop the context
/// when the run ends. Mutating an element's name or path after its key was
/// computed leaves the old key in place.
#[derive(Debug, Default)]
pub struct SortContext {
    elements: SortKeyCache,
    references: SortKeyCache,
}

impl SortContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context whose caches have room for `capacity` keys each.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SortKeyCache::with_capacity(capacity),
            references: SortKeyCache::with_capacity(capacity),
        }
    }

    /// Sort key of `element`, memoized by its identifier.
    pub fn element_key(&self, element: &Element) -> Arc<str> {
        self.elements
            .get_or_compute(element.id().as_str(), || element_sort_key(element))
    }

    /// Sort key of `reference`, memoized by its identifier.
    ///
    /// The file element and its parent are resolved through `lookup`; the
    /// parent's key goes through the element cache.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::UnlinkedReference`](crate::error::OrderError::UnlinkedReference)
    /// if the reference has no file, or
    /// [`OrderError::UnknownElement`](crate::error::OrderError::UnknownElement)
    /// if the file or its parent is missing from `lookup`.
    pub fn reference_key<L>(&self, reference: &Reference, lookup: &L) -> OrderResult<Arc<str>>
    where
        L: ElementLookup + ?Sized,
    {
        self.references
            .try_get_or_compute(reference.id().as_str(), || {
                let file = lookup.resolve_file(reference)?;
                let parent_key = lookup
                    .parent_of(file)?
                    .map(|parent| self.element_key(parent));
                Ok(reference_sort_key(file, parent_key.as_deref().unwrap_or_default()))
            })
    }

    /// Sort key of `element` referenced on behalf of `target`.
    ///
    /// The element part is memoized; the composite is not.
    pub fn target_key(&self, element: &Element, target: &TargetKey) -> String {
        target_sort_key(&self.element_key(element), target)
    }

    #[must_use]
    pub fn stats(&self) -> ContextStats {
        ContextStats {
            elements: self.elements.stats(),
            references: self.references.stats(),
        }
    }
}
