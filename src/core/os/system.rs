// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The real process environment.
//!
//! ```text
//! get/set/remove --> std::env (OsStr) <--NativeCodec--> String
//! entries        --> POSIX:   std::env::vars_os(), key and value narrowed apart
//!                    Windows: GetEnvironmentStringsW block scan
//! key            --> POSIX:   the key itself
//!                    Windows: spelling of the matching block entry
//! ```
//!
//! Windows keeps per-drive directories under hidden keys such as `=C:`.
//! A leading `=` is therefore part of the key, not a separator.

use std::ffi::{OsStr, OsString};

use super::OsEnv;
use crate::core::env::types::KeyPolicy;
use crate::error::{EncodingError, SessionResult};
use crate::utility::encoding::{EnvCodec, NativeCodec};

/// The process environment table, reached through `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

/// Keys that can name an entry of the table.
pub(super) fn is_os_key(key: &str) -> bool {
    let name = key.strip_prefix('=').unwrap_or(key);
    !name.is_empty() && !name.contains(['=', '\0'])
}

/// Keys `std::env` writes without panicking. `setenv` refuses any `=`.
#[cfg(windows)]
fn is_writable_key(key: &str) -> bool {
    is_os_key(key)
}

#[cfg(not(windows))]
fn is_writable_key(key: &str) -> bool {
    !key.starts_with('=') && is_os_key(key)
}

#[cfg(unix)]
fn narrow_os(s: &OsStr) -> Result<String, EncodingError> {
    use std::os::unix::ffi::OsStrExt;
    NativeCodec::narrow(s.as_bytes())
}

#[cfg(windows)]
fn narrow_os(s: &OsStr) -> Result<String, EncodingError> {
    use std::os::windows::ffi::OsStrExt;
    let wide: Vec<u16> = s.encode_wide().collect();
    NativeCodec::narrow(&wide)
}

#[cfg(not(any(unix, windows)))]
fn narrow_os(s: &OsStr) -> Result<String, EncodingError> {
    Ok(s.to_string_lossy().into_owned())
}

#[cfg(unix)]
fn widen_os(native: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(native).to_os_string()
}

#[cfg(windows)]
fn widen_os(native: &[u16]) -> OsString {
    use std::os::windows::ffi::OsStringExt;
    OsString::from_wide(native)
}

#[cfg(not(any(unix, windows)))]
fn widen_os(native: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(native).into_owned())
}

impl OsEnv for SystemEnv {
    fn policy(&self) -> KeyPolicy {
        KeyPolicy::native()
    }

    #[cfg(windows)]
    fn key(&self, key: &str) -> SessionResult<Option<String>> {
        if !is_os_key(key) {
            return Ok(None);
        }
        super::windows::native_key(key, self.policy())
    }

    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        if !is_os_key(key) {
            return Ok(None);
        }
        Ok(std::env::var_os(key)
            .map(|value| narrow_os(&value))
            .transpose()?)
    }

    fn set(&self, key: &str, value: &str) {
        if !is_writable_key(key) || value.contains('\0') {
            tracing::warn!(key, "skipping set of unrepresentable variable");
            return;
        }

        let (entry, offset) = NativeCodec::widen_entry(key, value);
        let (native_key, native_value) = (&entry[..offset], &entry[offset + 1..]);

        // SAFETY: every call made through an environment cache is serialized
        // by the cache lock, and std takes its own environment lock around
        // setenv. Foreign threads calling getenv directly are outside our control.
        unsafe {
            std::env::set_var(widen_os(native_key), widen_os(native_value));
        }
    }

    fn remove(&self, key: &str) {
        if !is_writable_key(key) {
            tracing::warn!(key, "skipping removal of unrepresentable variable");
            return;
        }

        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[cfg(windows)]
    fn entries(&self) -> SessionResult<Vec<String>> {
        super::windows::native_entries()
    }

    #[cfg(not(windows))]
    fn entries(&self) -> SessionResult<Vec<String>> {
        use crate::core::env::types::Entry;

        std::env::vars_os()
            .map(|(key, value)| -> SessionResult<String> {
                let key = narrow_os(&key)?;
                let value = narrow_os(&value)?;
                Ok(Entry::new(&key, &value).into_string())
            })
            .collect()
    }
}
