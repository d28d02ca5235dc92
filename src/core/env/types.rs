// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment entries and key matching.
//!
//! ```text
//! Entry: "KEY=VALUE" (separator searched from index 1, so "=C:=C:\" has key "=C:")
//! KeyPolicy: Sensitive (POSIX) | Insensitive (Windows), fixed by the OS table
//! matches("FOO", "FOOBAR=2") == false   (E[key.len()] must be '=')
//! ```

use serde::{Deserialize, Serialize};

/// How keys are compared against entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// `PATH` and `Path` are different variables.
    Sensitive,
    /// `PATH`, `Path` and `path` are one variable.
    Insensitive,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self::native()
    }
}

impl KeyPolicy {
    /// The policy of the OS environment table on the build target.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Compares two keys under this policy.
    #[must_use]
    pub fn keys_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive if a.is_ascii() && b.is_ascii() => a.eq_ignore_ascii_case(b),
            Self::Insensitive => a
                .chars()
                .flat_map(char::to_uppercase)
                .eq(b.chars().flat_map(char::to_uppercase)),
        }
    }

    /// Returns true if `entry` is the `key=...` entry for `key`.
    ///
    /// The character right after the key must be `=`, so a key never matches
    /// a longer key it is a prefix of.
    #[must_use]
    pub fn matches(self, entry: &str, key: &str) -> bool {
        entry.len() > key.len()
            && entry.as_bytes()[key.len()] == b'='
            && entry
                .get(..key.len())
                .is_some_and(|prefix| self.keys_equal(prefix, key))
    }
}

impl std::fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sensitive => write!(f, "sensitive"),
            Self::Insensitive => write!(f, "insensitive"),
        }
    }
}

/// One `KEY=VALUE` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Entry(String);

impl Entry {
    /// Builds `key=value`.
    #[must_use]
    pub fn new(key: &str, value: &str) -> Self {
        let mut line = String::with_capacity(key.len() + value.len() + 1);
        line.push_str(key);
        line.push('=');
        line.push_str(value);
        Self(line)
    }

    /// Wraps a raw entry as read from the OS table.
    #[must_use]
    pub const fn from_raw(line: String) -> Self {
        Self(line)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Byte offset of the key/value separator, if any.
    fn separator(&self) -> Option<usize> {
        self.0
            .get(1..)
            .and_then(|rest| rest.find('='))
            .map(|pos| pos + 1)
    }

    /// The key. A raw entry without separator is all key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.separator().map_or(&self.0, |eq| &self.0[..eq])
    }

    /// The value. Empty for a raw entry without separator.
    #[must_use]
    pub fn value(&self) -> &str {
        self.separator().map_or("", |eq| &self.0[eq + 1..])
    }

    /// Splits into `(key, value)`.
    #[must_use]
    pub fn split(&self) -> (&str, &str) {
        (self.key(), self.value())
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Options for an [`Environment`](super::container::Environment).
///
/// The key policy is not an option: it belongs to the OS table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bon::Builder)]
pub struct EnvOptions {
    #[builder(setters(name = with_path_separator), default = crate::utility::path::PATH_SEPARATOR)]
    path_separator: char,
}

impl Default for EnvOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl EnvOptions {
    #[must_use]
    pub const fn path_separator(&self) -> char {
        self.path_separator
    }
}
