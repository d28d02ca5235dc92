// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Encoding normalizer between native environment strings and UTF-8.
//!
//! ```text
//! Native block           API             Native block
//! u8  (POSIX)   --narrow--> UTF-8 --widen--> u8
//! u16 (Windows) --narrow--> UTF-8 --widen--> u16
//!
//! u8 narrow:  UTF-8, else legacy ANSI code page (CP1252)
//! u16 narrow: strict UTF-16, unpaired surrogate -> os error 1113
//! ```
//!
//! Uses `encoding_rs` for the legacy fallback.

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

use crate::error::{Direction, EncodingError};

/// Source encoding of a byte string.
///
/// Maps to Windows code pages:
/// - `Utf8`: UTF-8 (65001)
/// - `Acp`: Active Code Page, typically Windows-1252 (1252)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Acp,
}

impl Encoding {
    /// Picks UTF-8 when `bytes` is valid UTF-8, the ANSI code page otherwise.
    #[must_use]
    pub fn detect(bytes: &[u8]) -> Self {
        if std::str::from_utf8(bytes).is_ok() {
            Self::Utf8
        } else {
            Self::Acp
        }
    }
}

/// Converts bytes from the given encoding to UTF-8.
///
/// Windows-1252 assigns a character to every byte, so the ACP path never
/// fails. Invalid UTF-8 under [`Encoding::Utf8`] is replaced with U+FFFD.
///
/// # Example
/// ```
/// use session_rs::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9";
/// assert_eq!(bytes_to_utf8(Encoding::Acp, cp1252_bytes), "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes),
        Encoding::Acp => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Conversion between a platform's native environment strings and `String`.
pub trait EnvCodec {
    /// Code unit of the native environment block.
    type Unit: Copy + Eq + Default + std::fmt::Debug;

    /// The `=` key/value separator as a native unit.
    const SEPARATOR: Self::Unit;

    /// Converts a native string (without terminator) to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodingError`] if the native string has no Unicode
    /// translation.
    fn narrow(native: &[Self::Unit]) -> Result<String, EncodingError>;

    /// Converts a UTF-8 string to native units (without terminator).
    fn widen(text: &str) -> Vec<Self::Unit>;

    /// Builds a native `key=value` entry.
    ///
    /// Returns the entry and the unit offset of its separator, which is
    /// always `widen(key).len()`.
    fn widen_entry(key: &str, value: &str) -> (Vec<Self::Unit>, usize) {
        let mut entry = Self::widen(key);
        let offset = entry.len();
        entry.push(Self::SEPARATOR);
        entry.extend(Self::widen(value));
        (entry, offset)
    }
}

/// Single-byte native strings (POSIX).
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrowCodec;

impl EnvCodec for NarrowCodec {
    type Unit = u8;

    const SEPARATOR: u8 = b'=';

    fn narrow(native: &[u8]) -> Result<String, EncodingError> {
        Ok(bytes_to_utf8(Encoding::detect(native), native).into_owned())
    }

    fn widen(text: &str) -> Vec<u8> {
        text.as_bytes().to_vec()
    }
}

/// UTF-16 native strings (Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct WideCodec;

impl EnvCodec for WideCodec {
    type Unit = u16;

    const SEPARATOR: u16 = b'=' as u16;

    fn narrow(native: &[u16]) -> Result<String, EncodingError> {
        String::from_utf16(native).map_err(|_| EncodingError::no_translation(Direction::Narrow))
    }

    fn widen(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }
}

/// Codec of the environment block on the build target.
#[cfg(windows)]
pub type NativeCodec = WideCodec;

/// Codec of the environment block on the build target.
#[cfg(not(windows))]
pub type NativeCodec = NarrowCodec;

/// Splits a native environment block into its entries.
///
/// The block is a sequence of NUL-terminated entries closed by an empty
/// entry. Iteration stops at the first empty entry or at the end of the
/// slice, whichever comes first.
pub fn block_entries<U>(block: &[U]) -> impl Iterator<Item = &[U]>
where
    U: Copy + Eq + Default,
{
    let nul = U::default();
    block.split(move |unit| *unit == nul).take_while(|entry| !entry.is_empty())
}

#[cfg(test)]
mod tests;
