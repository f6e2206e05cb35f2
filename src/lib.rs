// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        elements / references / targets
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!                 order   sort slices, target maps
//!                   |
//!          +--------+--------+
//!          v                 v
//!         key             collate
//!     SortContext     localized standard
//!          |             comparison
//!          v
//!        cache  (id --> key, per run)
//!
//!   +-----------------------------------------+
//!   |  model   elements, references, targets  |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use pbx_order::key::SortContext;
//! use pbx_order::model::Element;
//!
//! let elements = [
//!     Element::new("E1").with_name("file10.swift"),
//!     Element::new("E2").with_name("File2.swift"),
//! ];
//! let ctx = SortContext::new();
//! let sorted = ctx.sorted_elements(&elements);
//! assert_eq!(sorted[0].display(), "File2.swift");
//! ```

pub mod cache;
pub mod cli;
pub mod cmd;
pub mod collate;
pub mod config;
pub mod error;
pub mod key;
pub mod logging;
pub mod model;
pub mod order;
