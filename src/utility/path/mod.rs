// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path-like variable splitting and joining.
//!
//! ```text
//! "a:b::c:"  --split(':')-->  ["a", "b", "", "c", ""]
//! ""         --split(':')-->  []
//! ["a", "b"] --join(':')-->   "a:b"
//! ```

use std::iter::FusedIterator;

/// Separator used by `PATH`-like variables on the build target.
pub const PATH_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Splits `value` on `separator`.
///
/// Consecutive separators yield empty segments, a trailing separator yields
/// a trailing empty segment, and an empty `value` yields nothing.
#[must_use]
pub fn split(value: &str, separator: char) -> Segments<'_> {
    Segments {
        value,
        separator,
        offset: (!value.is_empty()).then_some(0),
    }
}

/// Forward iterator over the segments of a string.
///
/// Cloning the iterator restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    value: &'a str,
    separator: char,
    /// Start of the next segment; `None` once exhausted.
    offset: Option<usize>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset?;
        let rest = &self.value[start..];

        match rest.find(self.separator) {
            Some(pos) => {
                self.offset = Some(start + pos + self.separator.len_utf8());
                Some(&rest[..pos])
            }
            None => {
                self.offset = None;
                Some(rest)
            }
        }
    }
}

impl FusedIterator for Segments<'_> {}

/// A path-like value split on a separator.
///
/// Owns a copy of the value taken when it was created, so later changes to
/// the variable do not affect it. Every call to [`PathSplit::iter`] replays
/// the same segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSplit {
    value: String,
    separator: char,
}

impl PathSplit {
    #[must_use]
    pub fn new(value: impl Into<String>, separator: char) -> Self {
        Self {
            value: value.into(),
            separator,
        }
    }

    /// The value that was split.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[must_use]
    pub fn iter(&self) -> Segments<'_> {
        split(&self.value, self.separator)
    }

    /// Collects the segments into owned strings.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_owned).collect()
    }
}

impl<'a> IntoIterator for &'a PathSplit {
    type Item = &'a str;
    type IntoIter = Segments<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Joins segments with `separator`.
///
/// A single trailing separator left by a final empty segment is dropped.
///
/// # Example
/// ```
/// use session_rs::utility::path::join_paths;
///
/// assert_eq!(join_paths(["/usr/bin", "/bin"], ':'), "/usr/bin:/bin");
/// assert_eq!(join_paths(["/usr/bin", ""], ':'), "/usr/bin");
/// ```
pub fn join_paths<I, S>(segments: I, separator: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            joined.push(separator);
        }
        joined.push_str(segment.as_ref());
    }

    if joined.ends_with(separator) {
        joined.pop();
    }
    joined
}

#[cfg(test)]
mod tests;
