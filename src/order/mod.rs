// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordering operations.
//!
//! ```text
//! generic     sort_localized_standard(&mut [T], key)
//!             sorted_localized_standard(iter, key) -> Vec<T>
//!
//! SortContext
//!   elements    sort_elements / sorted_elements           element key
//!   references  sort_references / sorted_references       reference key (fallible)
//!   targets     sorted_by_target / sorted_target_entries  element key \t target
//! ```
//!
//! Each key is extracted once per call; equal keys keep their input order.

use std::borrow::Borrow;
use std::sync::Arc;

use crate::collate::Collated;
use crate::error::OrderResult;
use crate::key::SortContext;
use crate::model::{Element, ElementLookup, Reference, TargetKey};

/// Sorts `items` in place by the localized-standard order of `key`.
pub fn sort_localized_standard<T, K, F>(items: &mut [T], mut key: F)
where
    F: FnMut(&T) -> K,
    K: AsRef<str>,
{
    items.sort_by_cached_key(|item| Collated(key(item)));
}

/// Returns `items` ordered by the localized-standard order of `key`.
pub fn sorted_localized_standard<I, K, F>(items: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: AsRef<str>,
{
    let mut items: Vec<_> = items.into_iter().collect();
    sort_localized_standard(&mut items, key);
    items
}

fn sort_keyed<T>(keyed: &mut [(Collated<Arc<str>>, T)]) {
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
}

/// Moves `items[order[i]]` to position `i` for every `i`.
fn permute<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..items.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

impl SortContext {
    /// Sorts elements in place by their element sort key.
    pub fn sort_elements<T: Borrow<Element>>(&self, elements: &mut [T]) {
        tracing::debug!(count = elements.len(), "ordering elements");
        sort_localized_standard(elements, |e| self.element_key(e.borrow()));
    }

    /// Returns elements ordered by their element sort key.
    pub fn sorted_elements<I>(&self, elements: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Borrow<Element>,
    {
        let mut elements: Vec<_> = elements.into_iter().collect();
        self.sort_elements(&mut elements);
        elements
    }

    /// Sorts references in place by their reference sort key.
    ///
    /// Every key is resolved before anything moves, so on error `references`
    /// is left as it was.
    ///
    /// # Errors
    ///
    /// Fails if any reference is unlinked or points outside `lookup`.
    pub fn sort_references<T, L>(&self, references: &mut [T], lookup: &L) -> OrderResult<()>
    where
        T: Borrow<Reference>,
        L: ElementLookup + ?Sized,
    {
        tracing::debug!(count = references.len(), "ordering references");
        let keys = references
            .iter()
            .map(|r| self.reference_key(r.borrow(), lookup).map(Collated))
            .collect::<OrderResult<Vec<_>>>()?;

        let mut order: Vec<usize> = (0..keys.len()).collect();
        order.sort_by(|&a, &b| keys[a].cmp(&keys[b]));
        permute(references, order);
        Ok(())
    }

    /// Returns references ordered by their reference sort key.
    ///
    /// # Errors
    ///
    /// Fails if any reference is unlinked or points outside `lookup`.
    pub fn sorted_references<I, L>(&self, references: I, lookup: &L) -> OrderResult<Vec<I::Item>>
    where
        I: IntoIterator,
        I::Item: Borrow<Reference>,
        L: ElementLookup + ?Sized,
    {
        let mut keyed = references
            .into_iter()
            .map(|r| Ok((Collated(self.reference_key(r.borrow(), lookup)?), r)))
            .collect::<OrderResult<Vec<_>>>()?;
        tracing::debug!(count = keyed.len(), "ordering references");
        sort_keyed(&mut keyed);
        Ok(keyed.into_iter().map(|(_, r)| r).collect())
    }

    /// Orders one file per target, grouping equal files by target.
    ///
    /// Entries whose composite keys collate equal fall back to the target
    /// identifier order, so map iteration order never shows through.
    pub fn sorted_by_target<'a, I, T>(&self, entries: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = (&'a TargetKey, &'a T)>,
        T: Borrow<Element> + 'a,
    {
        self.sorted_target_entries(entries)
            .into_iter()
            .map(|(_, file)| file)
            .collect()
    }

    /// [`sorted_by_target`](Self::sorted_by_target), keeping each file's target.
    pub fn sorted_target_entries<'a, I, T>(&self, entries: I) -> Vec<(&'a TargetKey, &'a T)>
    where
        I: IntoIterator<Item = (&'a TargetKey, &'a T)>,
        T: Borrow<Element> + 'a,
    {
        let mut keyed: Vec<_> = entries
            .into_iter()
            .map(|(target, file)| (Collated(self.target_key(file.borrow(), target)), target, file))
            .collect();
        tracing::debug!(count = keyed.len(), "ordering files by target");
        keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        keyed
            .into_iter()
            .map(|(_, target, file)| (target, file))
            .collect()
    }
}
