// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the process argument vector.
//!
//! The vector is captured once per process, so this binary holds a single
//! test that owns the capture.

use session_rs::core::args;

#[test]
fn args_first_capture_wins() {
    assert!(args::init(["session", "split", "PATH"]));
    assert!(!args::init(["other"]));

    let captured = args::arguments().unwrap();
    assert_eq!(captured.argc(), 3);
    assert_eq!(&captured[0], "session");
    assert_eq!(captured.at(2).unwrap(), "PATH");
    assert!(captured.at(3).is_err());

    let reversed: Vec<&str> = captured.iter().rev().collect();
    assert_eq!(reversed, ["PATH", "split", "session"]);

    // The same vector on every call.
    assert!(std::ptr::eq(captured, args::arguments().unwrap()));
}
