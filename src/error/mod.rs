// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                  OrderError
//!                      |
//!   +---------+--------+--------+
//!   v         v        v        v
//! Unlinked  Unknown  UnknownId Model
//! Reference Element
//!
//! ConfigError: config files, --set overrides, option values.
//!
//! Unlinked/Unknown element: broken project model, fatal for the run.
//! Missing name/path is never an error.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`, used at the binary edge.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`OrderError`].
pub type OrderResult<T> = std::result::Result<T, OrderError>;

/// Top-level error type of the ordering core.
#[derive(Debug, Error)]
pub enum OrderError {
    /// A reference has no associated element.
    ///
    /// The project model is not fully linked; no ordering can be produced.
    #[error("reference '{reference}' has no associated file element")]
    UnlinkedReference { reference: String },

    /// An identifier points at an element missing from the model.
    #[error("element '{id}' is not part of the project model")]
    UnknownElement { id: String },

    /// Lookup by identifier matched neither an element nor a reference.
    #[error("no element or reference with id '{id}'")]
    UnknownId { id: String },

    /// Project model dump could not be loaded.
    #[error("failed to load model '{path}': {message}")]
    Model { path: String, message: String },
}

impl OrderError {
    /// Whether the error stems from an incompletely linked project model.
    #[must_use]
    pub const fn is_model_invariant(&self) -> bool {
        matches!(
            self,
            Self::UnlinkedReference { .. } | Self::UnknownElement { .. }
        )
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
