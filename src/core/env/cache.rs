// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment synchronization cache.
//!
//! # Architecture
//!
//! ```text
//! EnvCache
//!   os:     OsEnv (authoritative)
//!   mirror: Mutex<Vec<Entry>> (insertion order)
//!
//! sync(key)          mirror   os       action
//!                    -        value    adopt   (append, OS spelling)
//!                    entry    -        drop    (erase)
//!                    entry    other    refresh (overwrite in place)
//!                    entry    same     unchanged
//!                    -        -        none
//!
//! set(key)   mirror lookup -> os.set -> replace / append   (write-through)
//! erase(key) mirror remove -> os.remove
//! entries()  copy of mirror, no reconciliation
//! ```
//!
//! All mirror access and every OS call go through the single lock. Keys
//! are matched with the OS table's own policy.

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use super::types::{EnvOptions, Entry};
use crate::core::os::OsEnv;
use crate::error::{SessionError, SessionResult};

#[derive(Debug)]
pub(super) struct EnvCache<O> {
    os: O,
    options: EnvOptions,
    mirror: Mutex<Vec<Entry>>,
}

impl<O: OsEnv> EnvCache<O> {
    /// Builds the mirror from a snapshot of the OS table.
    ///
    /// When the table holds colliding entries, the first one wins.
    pub(super) fn new(os: O, options: EnvOptions) -> SessionResult<Self> {
        let raw = os.entries().map_err(SessionError::snapshot)?;
        let policy = os.policy();

        let mut mirror: Vec<Entry> = Vec::with_capacity(raw.len());
        for line in raw {
            let entry = Entry::from_raw(line);
            if mirror.iter().any(|e| policy.matches(e.as_str(), entry.key())) {
                trace!(key = entry.key(), "ignoring duplicate entry");
                continue;
            }
            mirror.push(entry);
        }

        debug!(entries = mirror.len(), %policy, "captured environment");
        Ok(Self {
            os,
            options,
            mirror: Mutex::new(mirror),
        })
    }

    pub(super) const fn options(&self) -> &EnvOptions {
        &self.options
    }

    pub(super) const fn os(&self) -> &O {
        &self.os
    }

    /// Mirror-only lookup.
    fn position(&self, mirror: &[Entry], key: &str) -> Option<usize> {
        let policy = self.os.policy();
        mirror.iter().position(|e| policy.matches(e.as_str(), key))
    }

    /// Reconciles the mirror entry for `key` against the OS table.
    ///
    /// Must be called with `mirror` locked.
    fn sync(&self, mirror: &mut Vec<Entry>, key: &str) -> SessionResult<Option<usize>> {
        let cached = self.position(mirror, key);
        let current = self.os.get(key)?;

        match (cached, current) {
            (None, Some(value)) => {
                let spelling = self.os.key(key)?;
                mirror.push(Entry::new(spelling.as_deref().unwrap_or(key), &value));
                trace!(key, action = "adopted", "reconciled");
                Ok(Some(mirror.len() - 1))
            }
            (Some(pos), None) => {
                mirror.remove(pos);
                trace!(key, action = "dropped", "reconciled");
                Ok(None)
            }
            (Some(pos), Some(value)) if mirror[pos].value() != value => {
                let refreshed = Entry::new(mirror[pos].key(), &value);
                mirror[pos] = refreshed;
                trace!(key, action = "refreshed", "reconciled");
                Ok(Some(pos))
            }
            (Some(pos), Some(_)) => {
                trace!(key, action = "unchanged", "reconciled");
                Ok(Some(pos))
            }
            (None, None) => Ok(None),
        }
    }

    pub(super) fn find(&self, key: &str) -> SessionResult<Option<Entry>> {
        let mut mirror = self.mirror.lock();
        let pos = self.sync(&mut mirror, key)?;
        Ok(pos.map(|pos| mirror[pos].clone()))
    }

    pub(super) fn position_of(&self, key: &str) -> SessionResult<Option<usize>> {
        let mut mirror = self.mirror.lock();
        self.sync(&mut mirror, key)
    }

    pub(super) fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        validate_key(key)?;
        if value.contains('\0') {
            warn!(key, "rejecting value containing NUL");
            return Err(SessionError::invalid_value(key, "value contains NUL"));
        }

        let mut mirror = self.mirror.lock();
        let cached = self.position(&mirror, key);

        self.os.set(key, value);

        let entry = Entry::new(key, value);
        match cached {
            Some(pos) => mirror[pos] = entry,
            None => mirror.push(entry),
        }
        trace!(key, "set");
        Ok(())
    }

    pub(super) fn erase(&self, key: &str) -> SessionResult<()> {
        validate_key(key)?;

        let mut mirror = self.mirror.lock();
        if let Some(pos) = self.position(&mirror, key) {
            mirror.remove(pos);
        }

        self.os.remove(key);
        trace!(key, "erased");
        Ok(())
    }

    pub(super) fn len(&self) -> usize {
        self.mirror.lock().len()
    }

    pub(super) fn entries(&self) -> Vec<Entry> {
        self.mirror.lock().clone()
    }
}

/// Rejects keys the OS table cannot hold.
///
/// A leading `=` belongs to the key (Windows `=C:` entries).
fn validate_key(key: &str) -> SessionResult<()> {
    let name = key.strip_prefix('=').unwrap_or(key);
    let reason = if key.is_empty() {
        "key is empty"
    } else if name.is_empty() || name.contains('=') {
        "key contains '='"
    } else if name.contains('\0') {
        "key contains NUL"
    } else {
        return Ok(());
    };

    warn!(key, reason, "rejecting environment key");
    Err(SessionError::invalid_key(key, reason))
}
