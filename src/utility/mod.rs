// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   EnvCodec         NarrowCodec (u8) / WideCodec (u16)
//!   bytes_to_utf8()  UTF-8 / CP1252 --> UTF-8
//!   block_entries()  "A=1\0B=2\0\0" --> ["A=1", "B=2"]
//! path
//!   split()          "a:b::c:" --> a, b, "", c, ""
//!   join_paths()     [a, b] --> "a:b"
//! ```

pub mod encoding;
pub mod path;
