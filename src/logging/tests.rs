// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};

#[test]
fn test_log_level_conversion() {
    let conversions: Vec<_> = (0..=6u8)
        .map(|n| (n, LogLevel::from_u8(n).map(LogLevel::to_filter_string)))
        .collect();
    insta::assert_debug_snapshot!(conversions, @r#"
    [
        (
            0,
            Some(
                "off",
            ),
        ),
        (
            1,
            Some(
                "error",
            ),
        ),
        (
            2,
            Some(
                "warn",
            ),
        ),
        (
            3,
            Some(
                "info",
            ),
        ),
        (
            4,
            Some(
                "debug",
            ),
        ),
        (
            5,
            Some(
                "trace",
            ),
        ),
        (
            6,
            None,
        ),
    ]
    "#);
}

#[test]
fn test_log_level_rejects_out_of_range() {
    let err = LogLevel::new(9).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 9"
    );
    assert_eq!(LogLevel::try_from(4).unwrap(), LogLevel::DEBUG);
    assert_eq!(u8::from(LogLevel::TRACE), 5);
}

#[test]
fn test_log_level_serde() {
    let level: LogLevel = serde_json::from_str("3").unwrap();
    assert_eq!(level, LogLevel::INFO);
    assert_eq!(serde_json::to_string(&LogLevel::ERROR).unwrap(), "1");
    assert!(serde_json::from_str::<LogLevel>("7").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
    assert_eq!(config.console_level().to_tracing_level(), Some(tracing::Level::WARN));
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
}
