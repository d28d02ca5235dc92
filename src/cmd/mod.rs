// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   args, config, env (list / get / split)
//! ```
//!
//! Each handler has a `format_*` counterpart returning the printed lines.

pub mod args;
pub mod config;
pub mod env;

#[cfg(test)]
mod tests;
