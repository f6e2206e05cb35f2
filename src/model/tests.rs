// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use super::*;

const MODEL: &str = r#"{
    "elements": [
        {"id": "G1", "name": "Sources"},
        {"id": "E1", "path": "main.swift", "parent": "G1"},
        {"id": "E2"}
    ],
    "references": [
        {"id": "R1", "file": "E1"},
        {"id": "R2"}
    ],
    "targets": {"App": "E1"}
}"#;

#[test]
fn test_display_falls_back_to_path_then_empty() {
    let named = Element::new("E1").with_name("Name").with_path("path.m");
    let pathed = Element::new("E2").with_path("path.m");
    let bare = Element::new("E3");
    assert_eq!(named.display(), "Name");
    assert_eq!(pathed.display(), "path.m");
    assert_eq!(bare.display(), "");
}

#[test]
fn test_parse_model_json() {
    let model = ProjectModel::from_json_str(MODEL).unwrap();
    let ids: Vec<_> = model.elements().map(|e| e.id().as_str()).collect();
    assert_eq!(ids, ["E1", "E2", "G1"]);
    assert_eq!(model.references().count(), 2);

    let e1 = model.element(&ElementId::new("E1")).unwrap();
    assert_eq!(e1.name(), None);
    assert_eq!(e1.path(), Some("main.swift"));
    assert_eq!(e1.parent(), Some(&ElementId::new("G1")));
}

#[test]
fn test_parse_rejects_unknown_fields() {
    let err = ProjectModel::from_json_str(r#"{"groups": []}"#).unwrap_err();
    assert!(matches!(err, OrderError::Model { .. }));
    assert!(err.to_string().contains("groups"));
}

#[test]
fn test_parse_empty_model() {
    let model = ProjectModel::from_json_str("{}").unwrap();
    assert_eq!(model.elements().count(), 0);
    assert!(model.target_files().unwrap().is_empty());
}

#[test]
fn test_serialize_round_trip_keeps_array_form() {
    let model = ProjectModel::from_json_str(MODEL).unwrap();
    insta::assert_snapshot!(serde_json::to_string(&model).unwrap(), @r#"{"elements":[{"id":"E1","path":"main.swift","parent":"G1"},{"id":"E2"},{"id":"G1","name":"Sources"}],"references":[{"id":"R1","file":"E1"},{"id":"R2"}],"targets":{"App":"E1"}}"#);
}

#[test]
fn test_resolve_file() {
    let model = ProjectModel::from_json_str(MODEL).unwrap();
    let r1 = model.reference(&ReferenceId::new("R1")).unwrap();
    assert_eq!(model.resolve_file(r1).unwrap().id().as_str(), "E1");

    let r2 = model.reference(&ReferenceId::new("R2")).unwrap();
    let err = model.resolve_file(r2).unwrap_err();
    assert!(err.is_model_invariant());
    insta::assert_snapshot!(err, @"reference 'R2' has no associated file element");

    let dangling = Reference::new("R9", "E9");
    insta::assert_snapshot!(
        model.resolve_file(&dangling).unwrap_err(),
        @"element 'E9' is not part of the project model"
    );
}

#[test]
fn test_parent_of() {
    let model = ProjectModel::from_json_str(MODEL).unwrap();
    let e1 = model.element(&ElementId::new("E1")).unwrap();
    let e2 = model.element(&ElementId::new("E2")).unwrap();
    assert_eq!(model.parent_of(e1).unwrap().map(Element::display), Some("Sources"));
    assert!(model.parent_of(e2).unwrap().is_none());

    let orphan = Element::new("E5").with_parent("G9");
    assert!(matches!(
        model.parent_of(&orphan),
        Err(OrderError::UnknownElement { .. })
    ));
}

#[test]
fn test_target_files_resolve_and_fail_on_dangling() {
    let mut model = ProjectModel::from_json_str(MODEL).unwrap();
    let files = model.target_files().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0.as_str(), "App");
    assert_eq!(files[0].1.path(), Some("main.swift"));

    model.insert_target("Tests", "E404");
    assert!(matches!(
        model.target_files(),
        Err(OrderError::UnknownElement { id }) if id == "E404"
    ));
}

#[test]
fn test_insert_replaces_same_id() {
    let mut model = ProjectModel::new();
    model.insert_element(Element::new("E1").with_name("old"));
    model.insert_element(Element::new("E1").with_name("new"));
    model.insert_reference(Reference::unlinked("R1"));
    model.insert_reference(Reference::new("R1", "E1"));

    assert_eq!(model.elements().count(), 1);
    assert_eq!(model.element(&"E1".into()).unwrap().display(), "new");
    assert_eq!(
        model.reference(&"R1".into()).unwrap().file(),
        Some(&ElementId::new("E1"))
    );
}

#[test]
fn test_map_lookups() {
    let element = Element::new("E1").with_path("a.c");
    let btree: BTreeMap<_, _> = [(element.id().clone(), element.clone())].into();
    let hash: HashMap<_, _> = [(element.id().clone(), element)].into();
    let reference = Reference::new("R1", "E1");

    assert_eq!(btree.resolve_file(&reference).unwrap().display(), "a.c");
    assert_eq!(hash.resolve_file(&reference).unwrap().display(), "a.c");
}

#[test]
fn test_from_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "not json").unwrap();
    let err = ProjectModel::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("model.json"));
}
