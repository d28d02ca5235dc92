// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows native environment block.
//!
//! ```text
//! GetEnvironmentStringsW --> "A=1\0B=2\0\0"
//!   scan to the empty entry (length first)
//!   slice --> block_entries() --> WideCodec::narrow
//!   (native_key: first entry matching the key, its spelling only)
//! FreeEnvironmentStringsW
//! ```

use windows::Win32::System::Environment::{FreeEnvironmentStringsW, GetEnvironmentStringsW};
use windows::core::PCWSTR;

use crate::core::env::types::KeyPolicy;
use crate::error::{SessionError, SessionResult};
use crate::utility::encoding::{EnvCodec, WideCodec, block_entries};

/// Length in units of a double-NUL terminated block, terminator included.
///
/// # Safety
///
/// `block` must point to a valid environment block.
unsafe fn block_len(block: *const u16) -> usize {
    let mut len = 0;
    loop {
        // SAFETY: the block is terminated by an empty entry, so every read
        // up to and including that NUL is in bounds.
        if unsafe { *block.add(len) } == 0 {
            return len + 1;
        }
        while unsafe { *block.add(len) } != 0 {
            len += 1;
        }
        len += 1;
    }
}

/// Runs `f` over the process environment block, terminator included.
fn with_block<T>(f: impl FnOnce(&[u16]) -> T) -> SessionResult<T> {
    // SAFETY: no preconditions; a null result signals failure.
    let block = unsafe { GetEnvironmentStringsW() };
    if block.is_null() {
        return Err(SessionError::from(std::io::Error::last_os_error()));
    }

    // SAFETY: `block` is a valid environment block until freed below, and
    // `block_len` stays within it.
    let units = unsafe { std::slice::from_raw_parts(block.0, block_len(block.0)) };
    let result = f(units);

    // SAFETY: `block` came from GetEnvironmentStringsW and `units` is not
    // used past this point.
    if let Err(e) = unsafe { FreeEnvironmentStringsW(PCWSTR(block.0)) } {
        tracing::debug!(error = %e, "failed to free environment block");
    }

    Ok(result)
}

/// Reads every entry of the process environment block.
pub(super) fn native_entries() -> SessionResult<Vec<String>> {
    with_block(|units| {
        block_entries(units)
            .map(|entry| WideCodec::narrow(entry).map_err(SessionError::from))
            .collect()
    })?
}

/// The block's spelling of `key`. Entries that do not decode are skipped.
pub(super) fn native_key(key: &str, policy: KeyPolicy) -> SessionResult<Option<String>> {
    with_block(|units| {
        block_entries(units)
            .filter_map(|entry| WideCodec::narrow(entry).ok())
            .find(|line| policy.matches(line, key))
            .map(|line| line[..key.len()].to_owned())
    })
}
