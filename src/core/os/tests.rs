// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::system::is_os_key;
use super::{MemoryEnv, OsEnv, SystemEnv};
use crate::core::env::types::KeyPolicy;

#[test]
fn test_memory_env_basic_operations() {
    let env = MemoryEnv::with_policy(KeyPolicy::Sensitive);
    env.set("FOO", "1");
    env.set("FOOBAR", "2");
    env.set("FOO", "3");

    assert_eq!(env.get("FOO").unwrap().as_deref(), Some("3"));
    assert_eq!(env.get("FOOBAR").unwrap().as_deref(), Some("2"));
    assert_eq!(env.get("FO").unwrap(), None);
    assert_eq!(env.entries().unwrap(), ["FOO=3", "FOOBAR=2"]);

    env.remove("FOO");
    env.remove("FOO");
    assert_eq!(env.entries().unwrap(), ["FOOBAR=2"]);
}

#[test]
fn test_memory_env_case_policy() {
    let insensitive = MemoryEnv::from_pairs(KeyPolicy::Insensitive, [("Path", "/bin")]);
    assert_eq!(insensitive.get("PATH").unwrap().as_deref(), Some("/bin"));

    let sensitive = MemoryEnv::from_pairs(KeyPolicy::Sensitive, [("Path", "/bin")]);
    assert_eq!(sensitive.get("PATH").unwrap(), None);
}

#[test]
fn test_memory_env_key_spelling() {
    let insensitive = MemoryEnv::from_pairs(KeyPolicy::Insensitive, [("Path", "/bin")]);
    assert_eq!(insensitive.policy(), KeyPolicy::Insensitive);
    assert_eq!(insensitive.key("PATH").unwrap().as_deref(), Some("Path"));
    assert_eq!(insensitive.key("HOME").unwrap(), None);

    let sensitive = MemoryEnv::from_pairs(KeyPolicy::Sensitive, [("Path", "/bin")]);
    assert_eq!(sensitive.key("Path").unwrap().as_deref(), Some("Path"));
    assert_eq!(sensitive.key("PATH").unwrap(), None);
}

#[test]
fn test_memory_env_clones_share_table() {
    let env = MemoryEnv::new();
    let external = env.clone();
    external.set("SHARED", "yes");

    assert_eq!(env.get("SHARED").unwrap().as_deref(), Some("yes"));
    assert_eq!(env.len(), 1);
    assert!(!env.is_empty());
}

#[test]
fn test_system_env_round_trip() {
    let key = "SESSION_RS_OS_TEST_ROUND_TRIP";
    SystemEnv.set(key, "value=with=equals");

    assert_eq!(
        SystemEnv.get(key).unwrap().as_deref(),
        Some("value=with=equals")
    );
    let line = format!("{key}=value=with=equals");
    assert!(SystemEnv.entries().unwrap().contains(&line));

    SystemEnv.remove(key);
    assert_eq!(SystemEnv.get(key).unwrap(), None);
}

#[test]
fn test_system_env_ignores_unrepresentable_keys() {
    SystemEnv.set("", "x");
    SystemEnv.set("A=B", "x");
    SystemEnv.remove("NUL\0KEY");

    assert_eq!(SystemEnv.get("").unwrap(), None);
    assert_eq!(SystemEnv.get("A=B").unwrap(), None);
}

#[test]
fn test_system_env_policy_is_native() {
    assert_eq!(SystemEnv.policy(), KeyPolicy::native());
}

#[test]
fn test_os_key_shapes() {
    assert!(is_os_key("PATH"));
    assert!(is_os_key("=C:"));
    assert!(is_os_key("=ExitCode"));

    assert!(!is_os_key(""));
    assert!(!is_os_key("="));
    assert!(!is_os_key("A=B"));
    assert!(!is_os_key("=C:=x"));
    assert!(!is_os_key("NUL\0KEY"));
}

#[cfg(unix)]
#[test]
fn test_system_entries_narrow_key_and_value_apart() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let key = OsStr::from_bytes(b"SESSION_RS_OS_TEST_CAF\xE9");
    // SAFETY: no other test reads or writes this key.
    unsafe { std::env::set_var(key, "gr\u{fc}\u{df}") };
    let entries = SystemEnv.entries().unwrap();
    // SAFETY: as above.
    unsafe { std::env::remove_var(key) };

    let line = "SESSION_RS_OS_TEST_CAF\u{e9}=gr\u{fc}\u{df}".to_string();
    assert!(entries.contains(&line), "{entries:?}");
}
