// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for ordering through the public API.
//!
//! Tests realistic project models loaded from JSON dumps.

use pbx_order::cmd::order::{element_rows, reference_rows, render_rows, target_rows};
use pbx_order::config::types::OutputFormat;
use pbx_order::error::OrderError;
use pbx_order::key::SortContext;
use pbx_order::model::{Element, ProjectModel, Reference, TargetKey};

const MODEL: &str = r#"{
    "elements": [
        {"id": "G1", "name": "Sources", "path": "Sources"},
        {"id": "G2", "name": "Tests", "path": "Tests"},
        {"id": "E1", "path": "View10.swift", "parent": "G1"},
        {"id": "E2", "path": "View2.swift", "parent": "G1"},
        {"id": "E3", "path": "view2.swift", "parent": "G2"},
        {"id": "E4", "name": "Info.plist", "path": "Support/Info.plist"}
    ],
    "references": [
        {"id": "R1", "file": "E1"},
        {"id": "R2", "file": "E2"},
        {"id": "R3", "file": "E3"},
        {"id": "R4", "file": "E4"}
    ],
    "targets": {"AppTests": "E3", "App": "E2", "Widget": "E4"}
}"#;

fn model() -> ProjectModel {
    ProjectModel::from_json_str(MODEL).unwrap()
}

// =============================================================================
// Elements
// =============================================================================

#[test]
fn order_elements_text() {
    let model = model();
    let ctx = SortContext::new();
    let rows = element_rows(&model, &ctx, false);
    insta::assert_snapshot!(render_rows(&rows, OutputFormat::Text).unwrap(), @r"
    E4	Info.plist
    G1	Sources
    G2	Tests
    E2	View2.swift
    E3	view2.swift
    E1	View10.swift
    ");
}

#[test]
fn order_elements_cold_and_warm_cache_agree() {
    let model = model();
    let ctx = SortContext::new();
    let cold = element_rows(&model, &ctx, true);
    let warm = element_rows(&model, &ctx, true);
    assert_eq!(cold, warm);

    let stats = ctx.stats().elements;
    assert_eq!(stats.entries, 6);
    assert!(stats.hits >= 6);
}

#[test]
fn order_elements_with_accented_and_decomposed_names() {
    let elements = [
        Element::new("E1").with_path("Zebra.swift"),
        Element::new("E2").with_path("cafe\u{301}.swift"),
        Element::new("E3").with_path("École.swift"),
        Element::new("E4").with_path("caf\u{e9}.swift"),
        Element::new("E5").with_path("cafe.swift"),
    ];
    let ctx = SortContext::new();
    let ids: Vec<_> = ctx
        .sorted_elements(&elements)
        .into_iter()
        .map(|e| e.id().as_str())
        .collect();
    assert_eq!(ids, ["E5", "E2", "E4", "E3", "E1"]);
}

// =============================================================================
// References
// =============================================================================

#[test]
fn order_references_break_ties_on_parent_group() {
    let model = model();
    let ctx = SortContext::new();
    let ids: Vec<_> = reference_rows(&model, &ctx, false)
        .unwrap()
        .into_iter()
        .map(|row| row.id)
        .collect();
    assert_eq!(ids, ["R4", "R2", "R3", "R1"]);
}

#[test]
fn order_references_with_keys() {
    let model = model();
    let ctx = SortContext::new();
    let rows = reference_rows(&model, &ctx, true).unwrap();
    insta::assert_snapshot!(render_rows(&rows, OutputFormat::Text).unwrap(), @r"
    R4	Info.plist	Info.plist\tInfo.plist\tSupport/Info.plist\t
    R2	View2.swift	View2.swift\t\tView2.swift\tSources\tSources\tSources
    R3	view2.swift	view2.swift\t\tview2.swift\tTests\tTests\tTests
    R1	View10.swift	View10.swift\t\tView10.swift\tSources\tSources\tSources
    ");
}

#[test]
fn order_references_unlinked_is_fatal() {
    let mut model = model();
    model.insert_reference(Reference::unlinked("R9"));
    let ctx = SortContext::new();
    let err = reference_rows(&model, &ctx, false).unwrap_err();
    assert!(matches!(err, OrderError::UnlinkedReference { ref reference } if reference == "R9"));
    assert!(err.is_model_invariant());
}

#[test]
fn order_references_parent_cycle_reads_one_level() {
    let mut model = ProjectModel::new();
    model.insert_element(Element::new("A").with_name("a").with_parent("B"));
    model.insert_element(Element::new("B").with_name("b").with_parent("A"));
    model.insert_reference(Reference::new("R1", "A"));
    let ctx = SortContext::new();
    let rows = reference_rows(&model, &ctx, true).unwrap();
    assert_eq!(rows[0].key.as_deref(), Some("a\\ta\\t\\tb\\tb\\t"));
}

// =============================================================================
// Targets
// =============================================================================

#[test]
fn order_targets_json() {
    let model = model();
    let ctx = SortContext::new();
    let rows = target_rows(&model, &ctx, false).unwrap();
    insta::assert_snapshot!(render_rows(&rows, OutputFormat::Json).unwrap(), @r#"
    [
      {
        "id": "E4",
        "target": "Widget",
        "display": "Info.plist"
      },
      {
        "id": "E2",
        "target": "App",
        "display": "View2.swift"
      },
      {
        "id": "E3",
        "target": "AppTests",
        "display": "view2.swift"
      }
    ]
    "#);
}

#[test]
fn order_same_file_in_two_targets() {
    let file = Element::new("E1").with_path("shared.swift");
    let other = Element::new("E2").with_path("alpha.swift");
    let (app, tests) = (TargetKey::new("App"), TargetKey::new("Tests"));
    let ctx = SortContext::new();

    let sorted = ctx.sorted_target_entries([(&tests, &file), (&app, &other), (&app, &file)]);
    let pairs: Vec<_> = sorted
        .iter()
        .map(|(target, file)| format!("{}:{}", file.id(), target))
        .collect();
    assert_eq!(pairs, ["E2:App", "E1:App", "E1:Tests"]);
}

#[test]
fn order_dangling_target_fails() {
    let mut model = model();
    model.insert_target("Broken", "E404");
    let ctx = SortContext::new();
    assert!(matches!(
        target_rows(&model, &ctx, false),
        Err(OrderError::UnknownElement { .. })
    ));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn order_shared_context_across_threads() {
    let model = model();
    let ctx = SortContext::new();
    let expected = reference_rows(&model, &SortContext::new(), false).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| reference_rows(&model, &ctx, false).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    assert_eq!(ctx.stats().references.entries, 4);
}
