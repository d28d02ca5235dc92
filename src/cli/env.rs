// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment and argument command arguments.

use clap::{ArgGroup, Args};

/// Arguments for the `args` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ArgsArgs {
    /// Prints the arguments last to first.
    #[arg(short, long)]
    pub reverse: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
#[command(group(ArgGroup::new("part").args(["keys", "values"])))]
pub struct ListArgs {
    /// Prints only keys.
    #[arg(short, long)]
    pub keys: bool,

    /// Prints only values.
    #[arg(long)]
    pub values: bool,

    /// Prints a JSON array instead of lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, Default, Args)]
pub struct GetArgs {
    /// Variable name.
    #[arg(value_name = "KEY")]
    pub key: String,
}

/// Arguments for the `split` command.
#[derive(Debug, Clone, Args)]
pub struct SplitArgs {
    /// Variable name.
    #[arg(value_name = "KEY", default_value = "PATH")]
    pub key: String,

    /// Separator, defaults to the configured path separator.
    #[arg(long, value_name = "C")]
    pub separator: Option<char>,
}
