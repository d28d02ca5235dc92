// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment and argument access.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env        os       args
//!     |         |         |
//! Environment OsEnv    Arguments
//! Variable    SystemEnv OnceLock
//! EnvCache    MemoryEnv (immutable)
//! ```

pub mod args;
pub mod env;
pub mod os;
