// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! pbx-order [global options] <command>
//! elements   <MODEL>
//! references <MODEL>
//! targets    <MODEL>
//! key        <MODEL> <ID>
//! options | inis | version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use crate::cli::global::GlobalOptions;
use crate::config::types::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Orders project model entities the way the generator emits them.
#[derive(Debug, Parser)]
#[command(
    name = "pbx-order",
    author,
    version,
    about = "Deterministic, locale-aware ordering of project model entities",
    long_about = "Loads a JSON dump of a project model and prints its elements,\n\
                  references or per-target files in generated-output order.\n\n\
                  Ordering is case-insensitive and numeric-aware: `File1`,\n\
                  `file2`, `file10`. Ties break on name, path, the file's\n\
                  parent group and the owning target.",
    after_help = "MODEL FORMAT:\n\n\
                  {\"elements\": [{\"id\": \"E1\", \"name\": \"main.m\", \"parent\": \"G1\"}],\n \
                  \"references\": [{\"id\": \"R1\", \"file\": \"E1\"}],\n \
                  \"targets\": {\"App\": \"E1\"}}"
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Order every element of the model.
    Elements(ModelArgs),

    /// Order every reference of the model by its file element.
    References(ModelArgs),

    /// Order the model's target → file map.
    Targets(ModelArgs),

    /// Print the sort key of one element or reference.
    Key(KeyArgs),

    /// Print the effective configuration.
    Options,

    /// List the configuration files that were loaded.
    Inis,

    /// Print the version.
    Version,
}

/// Arguments of the ordering commands.
#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    /// JSON model dump.
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Output format, overrides `output.format`.
    #[arg(short = 'f', long = "format", value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Print each row's sort key.
    #[arg(short = 'k', long = "show-keys")]
    pub show_keys: bool,
}

/// Arguments of the `key` command.
#[derive(Debug, Clone, Args)]
pub struct KeyArgs {
    /// JSON model dump.
    #[arg(value_name = "MODEL")]
    pub model: PathBuf,

    /// Element or reference identifier; elements are looked up first.
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Parse command line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
