// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordering commands.
//!
//! ```text
//! MODEL.json --> ProjectModel --> SortContext (per invocation)
//!   elements   sorted_elements
//!   references sorted_references   (fails on unlinked references)
//!   targets    sorted_target_entries
//!   key        element key, else reference key
//! --> rows --> text | json on stdout
//! ```

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use crate::cli::{KeyArgs, ModelArgs};
use crate::config::Config;
use crate::config::types::OutputFormat;
use crate::error::{OrderError, OrderResult, Result};
use crate::key::SortContext;
use crate::model::{ElementId, ElementLookup, ProjectModel, ReferenceId};

/// One printed line of an ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// Renders tabs in a sort key as `\t`.
#[must_use]
pub fn escape_key(key: &str) -> String {
    key.replace('\t', "\\t")
}

#[must_use]
pub fn element_rows(model: &ProjectModel, ctx: &SortContext, show_keys: bool) -> Vec<Row> {
    ctx.sorted_elements(model.elements())
        .into_iter()
        .map(|element| Row {
            id: element.id().to_string(),
            target: None,
            display: element.display().to_string(),
            key: show_keys.then(|| escape_key(&ctx.element_key(element))),
        })
        .collect()
}

/// # Errors
///
/// Fails if any reference is unlinked or points outside the model.
pub fn reference_rows(
    model: &ProjectModel,
    ctx: &SortContext,
    show_keys: bool,
) -> OrderResult<Vec<Row>> {
    ctx.sorted_references(model.references(), model)?
        .into_iter()
        .map(|reference| {
            let file = model.resolve_file(reference)?;
            let key = if show_keys {
                Some(escape_key(&ctx.reference_key(reference, model)?))
            } else {
                None
            };
            Ok(Row {
                id: reference.id().to_string(),
                target: None,
                display: file.display().to_string(),
                key,
            })
        })
        .collect()
}

/// # Errors
///
/// Fails if a target points outside the model.
pub fn target_rows(
    model: &ProjectModel,
    ctx: &SortContext,
    show_keys: bool,
) -> OrderResult<Vec<Row>> {
    let entries = model.target_files()?;
    Ok(ctx
        .sorted_target_entries(entries)
        .into_iter()
        .map(|(target, file)| Row {
            id: file.id().to_string(),
            target: Some(target.to_string()),
            display: file.display().to_string(),
            key: show_keys.then(|| escape_key(&ctx.target_key(file, target))),
        })
        .collect())
}

/// Sort key of the element or reference named `id`.
///
/// # Errors
///
/// Returns [`OrderError::UnknownId`] if `id` names neither, or the
/// reference key error if the reference is not linked.
pub fn lookup_key(model: &ProjectModel, ctx: &SortContext, id: &str) -> OrderResult<Arc<str>> {
    if let Some(element) = model.element(&ElementId::new(id)) {
        return Ok(ctx.element_key(element));
    }
    let reference = model
        .reference(&ReferenceId::new(id))
        .ok_or_else(|| OrderError::UnknownId { id: id.to_string() })?;
    ctx.reference_key(reference, model)
}

/// Formats rows for stdout.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_rows(rows: &[Row], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(rows).context("failed to serialize rows")
        }
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| {
                let mut fields = vec![row.id.as_str()];
                fields.extend(row.target.as_deref());
                fields.push(&row.display);
                fields.extend(row.key.as_deref());
                fields.join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Wraps an ordering error with the model path, naming broken links as such.
fn order_failure(err: OrderError, model: &Path) -> anyhow::Error {
    let what = if err.is_model_invariant() {
        "project model is not fully linked"
    } else {
        "cannot order project model"
    };
    anyhow::Error::new(err).context(format!("{what}: {}", model.display()))
}

/// Which ordering a model command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    Elements,
    References,
    Targets,
}

/// Handler for the `elements`, `references` and `targets` commands.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded or is not fully linked.
pub fn run_order_command(kind: OrderKind, args: &ModelArgs, config: &Config) -> Result<()> {
    let model = ProjectModel::from_file(&args.model)?;
    let ctx = config.sort_context();
    let show_keys = args.show_keys || config.output.show_keys;

    let rows = match kind {
        OrderKind::Elements => element_rows(&model, &ctx, show_keys),
        OrderKind::References => reference_rows(&model, &ctx, show_keys)
            .map_err(|e| order_failure(e, &args.model))?,
        OrderKind::Targets => target_rows(&model, &ctx, show_keys)
            .map_err(|e| order_failure(e, &args.model))?,
    };
    tracing::debug!(?kind, rows = rows.len(), stats = ?ctx.stats(), "ordering complete");

    let output = render_rows(&rows, args.format.unwrap_or(config.output.format))?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Handler for the `key` command.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded or `id` is unknown.
pub fn run_key_command(args: &KeyArgs, config: &Config) -> Result<()> {
    let model = ProjectModel::from_file(&args.model)?;
    let ctx = config.sort_context();
    let key = lookup_key(&model, &ctx, &args.id)?;
    println!("{}", escape_key(&key));
    Ok(())
}
