// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process argument vector.
//!
//! ```text
//! init(args)   --+
//!                +--> OnceLock<Arguments> (first capture wins, immutable)
//! arguments() ---+    default: std::env::args_os() --NativeCodec--> String
//! ```

use std::ffi::OsString;
use std::ops::Index;
use std::sync::OnceLock;

use crate::error::{SessionError, SessionResult};
use crate::utility::encoding::{EnvCodec, NativeCodec};

static ARGUMENTS: OnceLock<Arguments> = OnceLock::new();

/// Captures `args` as the process argument vector.
///
/// Only needed when the arguments must come from somewhere other than the
/// process itself. Returns `false` if the vector was already captured, in
/// which case `args` is ignored.
pub fn init<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut captured = Some(args.into_iter().collect::<Arguments>());
    ARGUMENTS.get_or_init(|| captured.take().unwrap_or_default());
    captured.is_none()
}

/// The process argument vector, captured on first access.
///
/// # Errors
///
/// Returns an error if an argument cannot be converted to UTF-8 on first
/// capture.
pub fn arguments() -> SessionResult<&'static Arguments> {
    if let Some(args) = ARGUMENTS.get() {
        return Ok(args);
    }
    let captured = Arguments::capture()?;
    Ok(ARGUMENTS.get_or_init(|| captured))
}

/// An immutable argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    argv: Vec<String>,
}

impl Arguments {
    /// Reads the arguments of the current process.
    ///
    /// # Errors
    ///
    /// Returns an error if an argument cannot be converted to UTF-8.
    pub fn capture() -> SessionResult<Self> {
        let argv = std::env::args_os()
            .map(|arg| narrow_arg(&arg))
            .collect::<SessionResult<Vec<_>>>()?;
        tracing::debug!(argc = argv.len(), "captured arguments");
        Ok(Self { argv })
    }

    /// The argument at `index`, `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.argv.get(index).map(String::as_str)
    }

    /// The argument at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfRange`] past the end.
    pub fn at(&self, index: usize) -> SessionResult<&str> {
        self.get(index).ok_or(SessionError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    #[must_use]
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    #[must_use]
    pub fn argc(&self) -> usize {
        self.argv.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.argv.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.argv.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Arguments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            argv: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Index<usize> for Arguments {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.argv[index]
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.argv
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}

#[cfg(unix)]
fn narrow_arg(arg: &OsString) -> SessionResult<String> {
    use std::os::unix::ffi::OsStrExt;
    Ok(NativeCodec::narrow(arg.as_bytes())?)
}

#[cfg(windows)]
fn narrow_arg(arg: &OsString) -> SessionResult<String> {
    use std::os::windows::ffi::OsStrExt;
    let wide: Vec<u16> = arg.encode_wide().collect();
    Ok(NativeCodec::narrow(&wide)?)
}

#[cfg(not(any(unix, windows)))]
fn narrow_arg(arg: &OsString) -> SessionResult<String> {
    Ok(NativeCodec::narrow(arg.to_string_lossy().as_bytes())?)
}
