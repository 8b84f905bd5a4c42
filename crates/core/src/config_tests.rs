// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

#[test]
fn defaults() {
    let config = EngineConfig::default();
    assert_eq!(config.issues.max_results, None);
    assert_eq!(config.components.default_page_size, 100);
    assert_eq!(config.actions.required_role, Role::User);
}

#[test]
fn empty_document_is_default() {
    assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
}

#[test]
fn parses_every_section() {
    let config = EngineConfig::from_toml_str(
        r#"
[issues]
max_results = 500

[components]
default_page_size = 25

[actions]
required_role = "admin"
"#,
    )
    .unwrap();
    assert_eq!(config.issues.max_results, Some(500));
    assert_eq!(config.components.default_page_size, 25);
    assert_eq!(config.actions.required_role, Role::Admin);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = EngineConfig::from_toml_str("[actions]\nrequired_role = \"codeviewer\"\n").unwrap();
    assert_eq!(config.actions.required_role, Role::CodeViewer);
    assert_eq!(config.components.default_page_size, 100);
}

#[parameterized(
    zero_page_size = { "[components]\ndefault_page_size = 0\n" },
    zero_max_results = { "[issues]\nmax_results = 0\n" },
)]
fn out_of_range_values_are_config_errors(content: &str) {
    let err = EngineConfig::from_toml_str(content).unwrap_err();
    assert!(matches!(err, Error::Config(_)), "got {err:?}");
}

#[parameterized(
    unknown_role = { "[actions]\nrequired_role = \"root\"\n" },
    wrong_type = { "[components]\ndefault_page_size = \"ten\"\n" },
    not_toml = { "[issues" },
)]
fn malformed_documents_are_toml_errors(content: &str) {
    let err = EngineConfig::from_toml_str(content).unwrap_err();
    assert!(matches!(err, Error::Toml(_)), "got {err:?}");
}

#[test]
fn save_and_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("engine.toml");
    let mut config = EngineConfig::default();
    config.issues.max_results = Some(42);
    config.actions.required_role = Role::Admin;

    config.save(&path).unwrap();
    assert_eq!(EngineConfig::load(&path).unwrap(), config);
}

#[test]
fn load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = EngineConfig::load(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn component_query_uses_configured_page_size() {
    let config = EngineConfig::from_toml_str("[components]\ndefault_page_size = 7\n").unwrap();
    let query = config.component_query().build().unwrap();
    assert_eq!(query.page_size(), Some(7));
}
