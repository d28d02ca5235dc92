// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::env::{ArgsArgs, GetArgs, ListArgs, SplitArgs};
use crate::cmd::args::format_args;
use crate::cmd::env::{format_get, format_list, format_split};
use crate::core::args::Arguments;
use crate::core::env::{EnvOptions, Environment, KeyPolicy};
use crate::core::os::MemoryEnv;

fn environment() -> Environment<MemoryEnv> {
    let os = MemoryEnv::from_pairs(
        KeyPolicy::Sensitive,
        [("HOME", "/home/druaga"), ("PATH", "/bin:/usr/bin::")],
    );
    let options = EnvOptions::builder().with_path_separator(':').build();
    Environment::with_os(os, options).unwrap()
}

#[test]
fn test_format_list_lines() {
    let env = environment();

    let all = format_list(&ListArgs::default(), &env).unwrap();
    assert_eq!(all, ["HOME=/home/druaga", "PATH=/bin:/usr/bin::"]);

    let keys = ListArgs {
        keys: true,
        ..ListArgs::default()
    };
    assert_eq!(format_list(&keys, &env).unwrap(), ["HOME", "PATH"]);

    let values = ListArgs {
        values: true,
        ..ListArgs::default()
    };
    assert_eq!(
        format_list(&values, &env).unwrap(),
        ["/home/druaga", "/bin:/usr/bin::"]
    );
}

#[test]
fn test_format_list_json() {
    let env = environment();
    let args = ListArgs {
        keys: true,
        json: true,
        ..ListArgs::default()
    };

    let lines = format_list(&args, &env).unwrap();
    assert_eq!(lines.len(), 1);
    insta::assert_snapshot!(lines[0], @r#"
    [
      "HOME",
      "PATH"
    ]
    "#);
}

#[test]
fn test_format_get() {
    let env = environment();

    let home = GetArgs {
        key: "HOME".to_string(),
    };
    assert_eq!(format_get(&home, &env).unwrap(), "/home/druaga");

    let missing = GetArgs {
        key: "MISSING".to_string(),
    };
    let err = format_get(&missing, &env).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"MISSING is not set");
}

#[test]
fn test_format_split() {
    let env = environment();

    let path = SplitArgs {
        key: "PATH".to_string(),
        separator: None,
    };
    assert_eq!(format_split(&path, &env).unwrap(), ["/bin", "/usr/bin", "", ""]);

    let by_slash = SplitArgs {
        key: "HOME".to_string(),
        separator: Some('/'),
    };
    assert_eq!(format_split(&by_slash, &env).unwrap(), ["", "home", "druaga"]);

    let unset = SplitArgs {
        key: "MISSING".to_string(),
        separator: None,
    };
    assert!(format_split(&unset, &env).unwrap().is_empty());
}

#[test]
fn test_format_args() {
    let arguments: Arguments = ["session", "args", "-r"].into_iter().collect();

    let forward = format_args(&ArgsArgs::default(), &arguments);
    assert_eq!(forward, ["0: session", "1: args", "2: -r"]);

    let reversed = format_args(&ArgsArgs { reverse: true }, &arguments);
    assert_eq!(reversed, ["2: -r", "1: args", "0: session"]);
}
