// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use crate::cli::{Cli, Command};
use crate::config::types::OutputFormat;
use clap::{CommandFactory, Parser};

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["pbx-order", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_elements_with_format() {
    let cli =
        Cli::try_parse_from(["pbx-order", "elements", "model.json", "-f", "json", "-k"]).unwrap();
    let Some(Command::Elements(args)) = cli.command else {
        panic!("expected elements command");
    };
    assert_eq!(args.model, Path::new("model.json"));
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert!(args.show_keys);
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["pbx-order", "targets", "m.json", "--format", "xml"]).is_err());
}

#[test]
fn test_parse_key() {
    let cli = Cli::try_parse_from(["pbx-order", "key", "m.json", "BF01"]).unwrap();
    let Some(Command::Key(args)) = cli.command else {
        panic!("expected key command");
    };
    assert_eq!(args.id, "BF01");
}

#[test]
fn test_global_options_to_overrides() {
    let cli = Cli::try_parse_from([
        "pbx-order",
        "references",
        "m.json",
        "-l",
        "4",
        "--set",
        "output/show_keys=true",
        "--log-file",
        "out.log",
    ])
    .unwrap();
    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "output/show_keys=true",
        "global/output_log_level=4",
        "global/file_log_level=4",
        "global/log_file=out.log",
    ]
    "#);
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["pbx-order", "-l", "7", "version"]).is_err());
}
