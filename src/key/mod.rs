// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Composite sort keys.
//!
//! ```text
//! element    display \t name \t path
//! reference  display \t name \t path \t parent-element-key   (file's fields)
//! by target  element-key \t target
//!
//! display = name ?? path ?? ""     absent name/path --> ""
//! ```
//!
//! Only the immediate parent is folded into a reference key. An element key
//! carries no parent context, so grandparents never contribute.

pub mod context;

pub use context::{ContextStats, SortContext};

use crate::model::{Element, TargetKey};

/// Separator between key fields.
///
/// Names and paths containing it make keys ambiguous; this is not guarded.
pub const FIELD_SEPARATOR: char = '\t';

/// Sort key of a plain element.
#[must_use]
pub fn element_sort_key(element: &Element) -> String {
    format!(
        "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
        element.display(),
        element.name().unwrap_or_default(),
        element.path().unwrap_or_default(),
    )
}

/// Sort key of a reference to `file`, whose parent has key `parent_key`.
///
/// `parent_key` is empty when the file has no parent.
#[must_use]
pub fn reference_sort_key(file: &Element, parent_key: &str) -> String {
    format!("{}{FIELD_SEPARATOR}{parent_key}", element_sort_key(file))
}

/// Sort key of an element referenced on behalf of `target`.
#[must_use]
pub fn target_sort_key(element_key: &str, target: &TargetKey) -> String {
    format!("{element_key}{FIELD_SEPARATOR}{target}")
}
