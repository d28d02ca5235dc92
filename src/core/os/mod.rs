// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Access to the authoritative OS environment table.
//!
//! ```text
//! OsEnv (trait)
//!   policy() -> KeyPolicy         key(key) -> Option<spelling>
//!   get(key) -> Option<value>     set(key, value)
//!   remove(key)                   entries() -> ["K=V", ...]
//!       |
//!   +---+-----------+
//!   v               v
//! SystemEnv       MemoryEnv
//! std::env +      Arc<Mutex<Vec<String>>>
//! NativeCodec     shared by clone
//! (Windows: GetEnvironmentStringsW block)
//! ```
//!
//! Implementations are not required to be thread-safe on their own: the
//! environment cache calls them only while holding its lock.

mod system;
#[cfg(windows)]
mod windows;

#[cfg(test)]
mod tests;

pub use system::SystemEnv;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::core::env::types::{Entry, KeyPolicy};
use crate::error::SessionResult;

/// One process environment table.
pub trait OsEnv: Send + Sync + std::fmt::Debug {
    /// How this table compares keys. Every cache over the table matches
    /// keys the same way.
    fn policy(&self) -> KeyPolicy;

    /// The spelling under which the table stores `key`, `None` if unset.
    ///
    /// Tables that compare keys case-sensitively store exactly `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    fn key(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.get(key)?.map(|_| key.to_owned()))
    }

    /// Current value of `key`, `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the native value cannot be converted to UTF-8.
    fn get(&self, key: &str) -> SessionResult<Option<String>>;

    /// Creates or overwrites `key`. Failures are not reported.
    fn set(&self, key: &str, value: &str);

    /// Deletes `key` if present. Failures are not reported.
    fn remove(&self, key: &str);

    /// Snapshot of every `key=value` entry, in table order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or an entry cannot be
    /// converted to UTF-8.
    fn entries(&self) -> SessionResult<Vec<String>>;
}

impl<T: OsEnv + ?Sized> OsEnv for Arc<T> {
    fn policy(&self) -> KeyPolicy {
        (**self).policy()
    }

    fn key(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).key(key)
    }

    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }

    fn entries(&self) -> SessionResult<Vec<String>> {
        (**self).entries()
    }
}

/// An in-process environment table.
///
/// Clones share the same table, so one clone can play "external code"
/// mutating the table behind an environment cache's back.
#[derive(Debug, Clone)]
pub struct MemoryEnv {
    table: Arc<Mutex<Vec<String>>>,
    policy: KeyPolicy,
}

impl Default for MemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEnv {
    /// Creates an empty table using the native key policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(KeyPolicy::native())
    }

    #[must_use]
    pub fn with_policy(policy: KeyPolicy) -> Self {
        Self {
            table: Arc::new(Mutex::new(Vec::new())),
            policy,
        }
    }

    /// Creates a table holding `pairs`, in order.
    #[must_use]
    pub fn from_pairs<I, K, V>(policy: KeyPolicy, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let env = Self::with_policy(policy);
        for (key, value) in pairs {
            env.set(key.as_ref(), value.as_ref());
        }
        env
    }

    /// Appends a raw entry without checking for an existing key.
    pub fn push_raw(&self, line: impl Into<String>) {
        self.table.lock().push(line.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }
}

impl OsEnv for MemoryEnv {
    fn policy(&self) -> KeyPolicy {
        self.policy
    }

    fn key(&self, key: &str) -> SessionResult<Option<String>> {
        let table = self.table.lock();
        Ok(table
            .iter()
            .find(|line| self.policy.matches(line, key))
            .map(|line| line[..key.len()].to_owned()))
    }

    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let table = self.table.lock();
        Ok(table
            .iter()
            .find(|line| self.policy.matches(line, key))
            .map(|line| line[key.len() + 1..].to_owned()))
    }

    fn set(&self, key: &str, value: &str) {
        let mut table = self.table.lock();
        let line = Entry::new(key, value).into_string();
        match table.iter_mut().find(|l| self.policy.matches(l, key)) {
            Some(existing) => *existing = line,
            None => table.push(line),
        }
    }

    fn remove(&self, key: &str) {
        self.table
            .lock()
            .retain(|line| !self.policy.matches(line, key));
    }

    fn entries(&self) -> SessionResult<Vec<String>> {
        Ok(self.table.lock().clone())
    }
}
