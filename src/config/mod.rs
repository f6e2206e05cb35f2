// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. pbx-order.toml (cwd, optional)
//! 3. --ini FILE (repeatable)
//! 4. PBX_ORDER_* env vars
//! 5. --set section/key=value, CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PBX_ORDER_OUTPUT__FORMAT=json          → output.format = "json"
//! PBX_ORDER_CACHE__INITIAL_CAPACITY=64   → cache.initial_capacity = 64
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::key::SortContext;
use crate::logging::LogConfig;

use loader::ConfigLoader;
use types::{CacheConfig, GlobalConfig, OutputConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pbx_order::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("pbx-order.toml")
    ///     .with_env_prefix("PBX_ORDER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// A fresh sort context sized by `[cache]`.
    #[must_use]
    pub fn sort_context(&self) -> SortContext {
        SortContext::with_capacity(self.cache.initial_capacity)
    }

    /// Logging setup described by `[global]`.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.output_log_level)
            .with_file_level(self.global.file_log_level)
            .maybe_with_log_file(
                self.global
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string()),
            )
            .with_format(self.global.log_format)
            .build()
    }

    /// `key = value` lines for every option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert(
                "global.log_file".to_string(),
                log_file.display().to_string(),
            );
        }
        options.insert(
            "global.log_format".to_string(),
            format!("{:?}", self.global.log_format).to_lowercase(),
        );
        options.insert(
            "cache.initial_capacity".to_string(),
            self.cache.initial_capacity.to_string(),
        );
        options.insert("output.format".to_string(), self.output.format.to_string());
        options.insert(
            "output.show_keys".to_string(),
            self.output.show_keys.to_string(),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
