// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error as _;

use super::{ConfigError, Direction, EncodingError, SessionError, SessionResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "env".to_string(),
        key: "path_separator".to_string(),
        message: "expected one character".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'path_separator' in section '[env]': expected one character"
    );
}

#[test]
fn test_encoding_error_display() {
    let err = EncodingError::no_translation(Direction::Narrow);
    insta::assert_snapshot!(err.to_string(), @"cannot narrow environment string (os error 1113)");
}

#[test]
fn test_snapshot_error_chains_cause() {
    let err = SessionError::snapshot(EncodingError::no_translation(Direction::Narrow));

    assert_eq!(err.to_string(), "failed to create environment");
    let source = err.source().expect("snapshot error should carry its cause");
    assert_eq!(
        source.to_string(),
        "cannot narrow environment string (os error 1113)"
    );
}

#[test]
fn test_out_of_range_display() {
    let err = SessionError::OutOfRange { index: 7, len: 2 };
    insta::assert_snapshot!(err.to_string(), @"invalid arguments subscript 7 (len 2)");
}

#[test]
fn test_session_result_size() {
    let size = std::mem::size_of::<SessionResult<()>>();
    assert!(size <= 40, "SessionResult<()> is {size} bytes, expected <= 40");
}
