// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localized-standard string comparison.
//!
//! Finder-style ordering on top of the CLDR root collation:
//!
//! ```text
//! Collator (root, process-wide, built once)
//!   strength   secondary      "File" == "file", "cafe" < "café"
//!   numeric    on             "9" < "10", "007" == "7"
//!   alternate  non-ignorable  spaces and punctuation carry weight
//!
//! primary weight (low → high)
//!   \t ' '  <  _ - , ; : ! ? . ' " ( ) [ ] { } @ * / \ & # %  <  ` ^ + < = > | ~
//!         <  $  <  digits  <  letters (accented letters next to their base)
//! ```
//!
//! Input is compared under canonical equivalence, so precomposed and
//! decomposed spellings of a name are equal.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::options::{AlternateHandling, CollatorOptions, Strength};
use icu_collator::preferences::CollationNumericOrdering;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};

/// Root collator, or `None` if the compiled collation data cannot be loaded.
fn collator() -> Option<&'static CollatorBorrowed<'static>> {
    static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();
    COLLATOR
        .get_or_init(|| {
            let mut prefs = CollatorPreferences::default();
            prefs.numeric_ordering = Some(CollationNumericOrdering::True);

            let mut options = CollatorOptions::default();
            options.strength = Some(Strength::Secondary);
            options.alternate_handling = Some(AlternateHandling::NonIgnorable);

            Collator::try_new(prefs, options)
                .inspect_err(|e| {
                    tracing::warn!(error = %e, "root collation unavailable, using case-folded order");
                })
                .ok()
        })
        .as_ref()
}

/// Compares two strings the way a platform "localized standard" compare
/// does: case-insensitively, with embedded numbers ordered by value.
///
/// ```
/// use std::cmp::Ordering;
/// use pbx_order::collate::localized_standard_compare;
///
/// assert_eq!(localized_standard_compare("file2", "file10"), Ordering::Less);
/// assert_eq!(localized_standard_compare("File1", "file1"), Ordering::Equal);
/// assert_eq!(localized_standard_compare("École", "Zebra"), Ordering::Less);
/// assert_eq!(localized_standard_compare("", "a"), Ordering::Less);
/// ```
#[must_use]
pub fn localized_standard_compare(a: &str, b: &str) -> Ordering {
    match collator() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Builds a comparator over `T` from a key extraction function.
pub fn compare_by_localized_standard<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: AsRef<str>,
{
    move |lhs, rhs| localized_standard_compare(key(lhs).as_ref(), key(rhs).as_ref())
}

/// Strict "less than" predicate over `T`, for callers that sort with a
/// boolean comparator.
pub fn sort_by_localized_standard<T, K, F>(key: F) -> impl Fn(&T, &T) -> bool
where
    F: Fn(&T) -> K,
    K: AsRef<str>,
{
    let compare = compare_by_localized_standard(key);
    move |lhs, rhs| compare(lhs, rhs) == Ordering::Less
}

/// String key ordered by [`localized_standard_compare`].
///
/// Equality follows the collation, so `Collated("A") == Collated("a")`.
/// As a map or set key, case variants of one name collapse into one entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collated<K>(pub K);

impl<K> Collated<K> {
    pub fn into_inner(self) -> K {
        self.0
    }
}

impl<K: AsRef<str>> Ord for Collated<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        localized_standard_compare(self.0.as_ref(), other.0.as_ref())
    }
}

impl<K: AsRef<str>> PartialOrd for Collated<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: AsRef<str>> PartialEq for Collated<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: AsRef<str>> Eq for Collated<K> {}
