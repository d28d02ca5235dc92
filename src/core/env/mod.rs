// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Environment (Arc<EnvCache>) --> Variable (key only)
//!      |
//!   EnvCache: Mutex<Vec<Entry>> mirror, lookup-triggered reconciliation
//!      |
//!   OsEnv (SystemEnv | MemoryEnv)
//! ```
//!
//! - **Case-insensitive on Windows**: [`KeyPolicy::native`]
//! - **Write-through**: `set`/`erase` hit the OS table immediately
//! - **UTF-8 internal**: Encoding at the OS boundary only

mod cache;
pub mod container;
pub mod types;
pub mod variable;


pub use container::{Entries, Environment};
pub use types::{EnvOptions, Entry, KeyPolicy};
pub use variable::Variable;
