// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Argument vector command.

use crate::cli::env::ArgsArgs;
use crate::core::args::{self, Arguments};
use crate::error::Result;

/// Formats `arguments` as `index: value` lines.
#[must_use]
pub fn format_args(args: &ArgsArgs, arguments: &Arguments) -> Vec<String> {
    let lines = arguments
        .iter()
        .enumerate()
        .map(|(i, arg)| format!("{i}: {arg}"));
    if args.reverse {
        lines.rev().collect()
    } else {
        lines.collect()
    }
}

/// Prints the process argument vector.
///
/// # Errors
///
/// Returns an error if the arguments cannot be converted to UTF-8.
pub fn run_args_command(args: &ArgsArgs) -> Result<()> {
    let arguments = args::arguments()?;
    for line in format_args(args, arguments) {
        println!("{line}");
    }
    Ok(())
}
