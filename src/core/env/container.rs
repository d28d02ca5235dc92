// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The shared environment handle.
//!
//! # Architecture
//!
//! ```text
//! Environment<O = SystemEnv>
//! cache: Arc<EnvCache<O>>   clone shares the cache
//!
//! find / contains / get / var(key)  -> reconcile key, then read
//! set / erase                       -> write-through
//! iter / keys / values / len        -> mirror snapshot
//! ```

use std::sync::Arc;

use super::cache::EnvCache;
use super::types::{EnvOptions, Entry, KeyPolicy};
use super::variable::Variable;
use crate::core::os::{OsEnv, SystemEnv};
use crate::error::SessionResult;
use crate::utility::path::PathSplit;

/// A synchronized view of an OS environment table.
///
/// Every lookup reconciles the looked-up key with the OS table first, so a
/// successful lookup always reflects the table at the time of the call.
/// Entries that are never looked up may go stale when other code changes
/// the table directly; iteration does not refresh them.
///
/// # Thread Safety
/// `Environment` is `Send` and `Sync`; clones share one cache and one lock.
#[derive(Debug)]
pub struct Environment<O: OsEnv = SystemEnv> {
    cache: Arc<EnvCache<O>>,
}

impl<O: OsEnv> Clone for Environment<O> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl Environment<SystemEnv> {
    /// Captures the process environment with native options.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Snapshot`](crate::error::SessionError::Snapshot)
    /// if the process environment cannot be read.
    pub fn new() -> SessionResult<Self> {
        Self::with_os(SystemEnv, EnvOptions::default())
    }

    /// Captures the process environment with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Snapshot`](crate::error::SessionError::Snapshot)
    /// if the process environment cannot be read.
    pub fn with_options(options: EnvOptions) -> SessionResult<Self> {
        Self::with_os(SystemEnv, options)
    }
}

impl<O: OsEnv> Environment<O> {
    /// Captures `os` as the authoritative table.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Snapshot`](crate::error::SessionError::Snapshot)
    /// wrapping the root cause if the table cannot be read.
    pub fn with_os(os: O, options: EnvOptions) -> SessionResult<Self> {
        Ok(Self {
            cache: Arc::new(EnvCache::new(os, options)?),
        })
    }

    #[must_use]
    pub fn options(&self) -> &EnvOptions {
        self.cache.options()
    }

    /// The underlying OS table.
    #[must_use]
    pub fn os(&self) -> &O {
        self.cache.os()
    }

    /// Key policy of the OS table, used for every lookup.
    #[must_use]
    pub fn policy(&self) -> KeyPolicy {
        self.cache.os().policy()
    }

    /// Looks up the entry for `key`, reconciling it with the OS table.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn find(&self, key: &str) -> SessionResult<Option<Entry>> {
        self.cache.find(key)
    }

    /// Index of `key` in iteration order, after reconciliation.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn position(&self, key: &str) -> SessionResult<Option<usize>> {
        self.cache.position_of(key)
    }

    /// Returns true if `key` is set. Reconciles exactly like [`Self::find`].
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn contains(&self, key: &str) -> SessionResult<bool> {
        Ok(self.find(key)?.is_some())
    }

    /// The value of `key`, empty if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn get(&self, key: &str) -> SessionResult<String> {
        Ok(self
            .find(key)?
            .map(|entry| entry.value().to_owned())
            .unwrap_or_default())
    }

    /// A handle bound to `key`.
    #[must_use]
    pub fn var(&self, key: impl Into<String>) -> Variable<O> {
        Variable::new(self.clone(), key.into())
    }

    /// Writes `key=value` to the OS table and the mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is empty or contains NUL or a `=` past its
    /// first character, or if `value` contains NUL. OS-level failures are
    /// not reported.
    pub fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.cache.set(key, value)
    }

    /// Removes `key` from the mirror and the OS table. Removing an unset key
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if `key` is empty or contains NUL or a `=` past its
    /// first character.
    pub fn erase(&self, key: &str) -> SessionResult<()> {
        self.cache.erase(key)
    }

    /// Splits the value of `key` on the configured path separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn split(&self, key: &str) -> SessionResult<PathSplit> {
        Ok(PathSplit::new(self.get(key)?, self.options().path_separator()))
    }

    /// Number of mirrored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over a copy of the mirror.
    #[must_use]
    pub fn iter(&self) -> Entries {
        Entries {
            inner: self.cache.entries().into_iter(),
        }
    }

    /// Keys of a copy of the mirror.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = String> + use<O> {
        self.iter().map(|entry| entry.key().to_owned())
    }

    /// Values of a copy of the mirror.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = String> + use<O> {
        self.iter().map(|entry| entry.value().to_owned())
    }
}

impl<O: OsEnv> IntoIterator for &Environment<O> {
    type Item = Entry;
    type IntoIter = Entries;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a snapshot of an environment's entries.
#[derive(Debug, Clone)]
pub struct Entries {
    inner: std::vec::IntoIter<Entry>,
}

impl Iterator for Entries {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Entries {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Entries {}

impl std::iter::FusedIterator for Entries {}
