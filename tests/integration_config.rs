// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the config module with realistic TOML files on disk.

use std::io::Write;

use session_rs::config::SessionConfig;
use session_rs::config::loader::ConfigLoader;
use session_rs::core::env::{Environment, KeyPolicy};
use session_rs::core::os::MemoryEnv;
use session_rs::logging::LogLevel;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// =============================================================================
// Loading from files
// =============================================================================

#[test]
fn config_from_file() {
    let file = write_config(
        r#"
[global]
output_log_level = 3

[env]
path_separator = "|"
"#,
    );

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.env.path_separator, Some('|'));
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(SessionConfig::from_file(dir.path().join("missing.toml")).is_err());
}

#[test]
fn config_later_files_override_earlier() {
    let base = write_config("[global]\noutput_log_level = 1\n[env]\npath_separator = \";\"\n");
    let local = write_config("[env]\npath_separator = \",\"\n");

    let loader = ConfigLoader::new()
        .add_toml_file(base.path())
        .add_toml_file(local.path());
    assert_eq!(loader.format_loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
    assert_eq!(config.env.path_separator, Some(','));
}

#[test]
fn config_optional_file_may_be_missing() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(dir.path().join("session.toml"));

    assert!(loader.loaded_files().is_empty());
    let config = loader.build().unwrap();
    assert_eq!(config.env.path_separator, None);
}

#[test]
fn config_invalid_toml_fails() {
    let file = write_config("[env\npath_separator = ");
    assert!(SessionConfig::from_file(file.path()).is_err());
}

// =============================================================================
// Driving the environment
// =============================================================================

#[test]
fn config_options_drive_environment() {
    let config = SessionConfig::parse(
        r#"
[env]
path_separator = ","
"#,
    )
    .unwrap();

    let os = MemoryEnv::from_pairs(KeyPolicy::Insensitive, [("Include", "a,b")]);
    let env = Environment::with_os(os, config.environment_options()).unwrap();

    assert_eq!(env.policy(), KeyPolicy::Insensitive);
    assert_eq!(env.get("INCLUDE").unwrap(), "a,b");
    assert_eq!(env.split("include").unwrap().to_vec(), ["a", "b"]);
}

#[test]
fn config_key_policy_rejected() {
    let file = write_config("[env]\nkey_policy = \"insensitive\"\n");
    assert!(SessionConfig::from_file(file.path()).is_err());
}
