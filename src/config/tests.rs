// pbx-order: Deterministic ordering for generated project files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::types::OutputFormat;
use crate::error::ConfigError;
use crate::logging::{LogFormat, LogLevel};

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    cache.initial_capacity  = 1024
    global.file_log_level   = 4
    global.log_format       = text
    global.output_log_level = 2
    output.format           = text
    output.show_keys        = false
    ");
}

#[test]
fn test_output_format_parse() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert!("xml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/pbx-order.log"
log_format = "json"

[cache]
initial_capacity = 64

[output]
format = "json"
show_keys = true
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_format, LogFormat::Json);
    assert_eq!(config.cache.initial_capacity, 64);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(config.output.show_keys);

    let log = config.log_config();
    assert_eq!(log.log_file(), Some("logs/pbx-order.log"));
    assert_eq!(log.console_level(), LogLevel::DEBUG);
}

#[test]
fn test_unknown_fields_rejected() {
    assert!(Config::parse("[cache]\nsize = 3").is_err());
    assert!(Config::parse("[sorting]\nmode = \"fast\"").is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9").is_err());
}

#[test]
fn test_overrides_win_over_files() {
    let config = ConfigLoader::new()
        .add_toml_str("[output]\nformat = \"text\"")
        .with_overrides(&["output/format=json", "cache/initial_capacity = 8"])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.cache.initial_capacity, 8);
}

#[test]
fn test_malformed_overrides() {
    for bad in ["output.format=json", "output/format", "/format=json"] {
        let err = ConfigLoader::new().with_overrides(&[bad]).err();
        assert!(err.is_some(), "{bad} should be rejected");
    }
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[output]\n show_keys = true")
        .add_toml_file_optional("/nonexistent/pbx-order.toml");

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @"1. [string] <string>");
}

#[test]
fn test_sort_context_from_config() {
    let config = Config::parse("[cache]\ninitial_capacity = 2").unwrap();
    let ctx = config.sort_context();
    assert_eq!(ctx.stats().elements.entries, 0);
}

#[test]
fn test_malformed_toml_reports_parse_error() {
    let err = Config::parse("[output\nformat = 1").unwrap_err();
    let err = err.downcast::<ConfigError>().unwrap();
    assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == "<string>"));
}
