// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handle to a single environment variable.

use super::container::Environment;
use crate::core::os::{OsEnv, SystemEnv};
use crate::error::SessionResult;
use crate::utility::path::PathSplit;

/// A key bound to an [`Environment`].
///
/// Holds only the key; every read and write goes through the environment,
/// so the handle never observes a value older than the call.
#[derive(Debug, Clone)]
pub struct Variable<O: OsEnv = SystemEnv> {
    env: Environment<O>,
    key: String,
}

impl<O: OsEnv> Variable<O> {
    pub(super) const fn new(env: Environment<O>, key: String) -> Self {
        Self { env, key }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current value, `None` if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn get(&self) -> SessionResult<Option<String>> {
        Ok(self
            .env
            .find(&self.key)?
            .map(|entry| entry.value().to_owned()))
    }

    /// The current value, empty if unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn value(&self) -> SessionResult<String> {
        self.env.get(&self.key)
    }

    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn is_set(&self) -> SessionResult<bool> {
        self.env.contains(&self.key)
    }

    /// Assigns `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or value cannot be stored in the OS table.
    pub fn set(&self, value: impl AsRef<str>) -> SessionResult<&Self> {
        self.env.set(&self.key, value.as_ref())?;
        Ok(self)
    }

    /// Unsets the variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be stored in the OS table.
    pub fn remove(&self) -> SessionResult<()> {
        self.env.erase(&self.key)
    }

    /// Splits a copy of the current value on the environment's path separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS value cannot be converted to UTF-8.
    pub fn split(&self) -> SessionResult<PathSplit> {
        self.env.split(&self.key)
    }
}
