// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for session-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! session [global options] <command>
//! version
//! options
//! configs
//! args [--reverse]
//! list [--keys | --values] [--json]
//! get KEY
//! split [KEY] [--separator C]
//! ```

pub mod env;
pub mod global;


use crate::cli::env::{ArgsArgs, GetArgs, ListArgs, SplitArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Process environment and argument inspector.
#[derive(Debug, Parser)]
#[command(
    name = "session",
    author,
    version,
    about = "Process environment and argument inspector",
    long_about = "session-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads the process environment through a synchronized cache\n\
                  and prints entries, single variables or path-like values.",
    after_help = "CONFIG FILES:\n\n\
                  session looks for `session.toml` in the current directory.\n\
                  Additional files can be given with --config, those are loaded\n\
                  after it. SESSION_<SECTION>__<KEY> variables and --set\n\
                  override values from files."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Configs,

    /// Prints the argument vector.
    Args(ArgsArgs),

    /// Lists environment entries.
    List(ListArgs),

    /// Prints the value of a variable.
    Get(GetArgs),

    /// Prints a path-like variable one segment per line.
    Split(SplitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
