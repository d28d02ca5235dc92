// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               SessionError
//!                     |
//!   +--------+--------+--------+--------+------+
//!   |        |        |        |        |      |
//!   v        v        v        v        v      v
//! Snapshot Encoding Invalid*  OutOfRange Config Io
//!  (source)  code    key      index    Box    Box
//!
//! Fatal:    Snapshot (environment construction)
//! Per-op:   Encoding, InvalidKey, InvalidValue, OutOfRange
//! Silent:   OS-level set/remove failures (never raised)
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SessionError`].
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Native error code reported when a string has no Unicode translation.
///
/// Same value as Win32 `ERROR_NO_UNICODE_TRANSLATION`.
pub const NO_UNICODE_TRANSLATION: i32 = 1113;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The OS environment table could not be captured when building the cache.
    #[error("failed to create environment")]
    Snapshot {
        #[source]
        source: Box<Self>,
    },

    /// A native string could not be transcoded.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The key cannot be stored in the OS environment table.
    #[error("invalid environment key '{key}': {reason}")]
    InvalidKey { key: Box<str>, reason: &'static str },

    /// The value cannot be stored in the OS environment table.
    #[error("invalid value for environment key '{key}': {reason}")]
    InvalidValue { key: Box<str>, reason: &'static str },

    /// Index past the end of the argument vector.
    #[error("invalid arguments subscript {index} (len {len})")]
    OutOfRange { index: usize, len: usize },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error from the operating system.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl SessionError {
    /// Wraps `cause` as the root of a failed environment snapshot.
    #[must_use]
    pub fn snapshot(cause: impl Into<Self>) -> Self {
        Self::Snapshot {
            source: Box::new(cause.into()),
        }
    }

    pub(crate) fn invalid_key(key: &str, reason: &'static str) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason,
        }
    }

    pub(crate) fn invalid_value(key: &str, reason: &'static str) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Box::new(err))
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(Box::new(err))
    }
}

// --- Encoding Errors ---

/// Direction of a failed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Native block to API string.
    Narrow,
    /// API string to native block.
    Widen,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Narrow => write!(f, "narrow"),
            Self::Widen => write!(f, "widen"),
        }
    }
}

/// Transcoding failure carrying the native error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {direction} environment string (os error {code})")]
pub struct EncodingError {
    pub code: i32,
    pub direction: Direction,
}

impl EncodingError {
    #[must_use]
    pub const fn no_translation(direction: Direction) -> Self {
        Self {
            code: NO_UNICODE_TRANSLATION,
            direction,
        }
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

#[cfg(test)]
mod tests;
