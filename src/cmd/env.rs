// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment commands: list, get, split.

use anyhow::{Context, anyhow};

use crate::cli::env::{GetArgs, ListArgs, SplitArgs};
use crate::core::env::{Entry, Environment};
use crate::core::os::OsEnv;
use crate::error::Result;
use crate::utility::path::PathSplit;

/// Formats the entries of `env` for the `list` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_list<O: OsEnv>(args: &ListArgs, env: &Environment<O>) -> Result<Vec<String>> {
    let items: Vec<String> = if args.keys {
        env.keys().collect()
    } else if args.values {
        env.values().collect()
    } else {
        env.iter().map(Entry::into_string).collect()
    };

    if args.json {
        let json = serde_json::to_string_pretty(&items).context("failed to serialize entries")?;
        Ok(vec![json])
    } else {
        Ok(items)
    }
}

/// Formats the value of a variable for the `get` command.
///
/// # Errors
///
/// Returns an error if the variable is not set.
pub fn format_get<O: OsEnv>(args: &GetArgs, env: &Environment<O>) -> Result<String> {
    env.var(args.key.as_str())
        .get()?
        .ok_or_else(|| anyhow!("{} is not set", args.key))
}

/// Formats the segments of a path-like variable for the `split` command.
///
/// An unset variable has no segments.
///
/// # Errors
///
/// Returns an error if the value cannot be read from the OS.
pub fn format_split<O: OsEnv>(args: &SplitArgs, env: &Environment<O>) -> Result<Vec<String>> {
    let split = match args.separator {
        Some(separator) => PathSplit::new(env.get(&args.key)?, separator),
        None => env.split(&args.key)?,
    };
    Ok(split.to_vec())
}

/// Main handler for the `list` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_list_command<O: OsEnv>(args: &ListArgs, env: &Environment<O>) -> Result<()> {
    for line in format_list(args, env)? {
        println!("{line}");
    }
    Ok(())
}

/// Main handler for the `get` command.
///
/// # Errors
///
/// Returns an error if the variable is not set.
pub fn run_get_command<O: OsEnv>(args: &GetArgs, env: &Environment<O>) -> Result<()> {
    println!("{}", format_get(args, env)?);
    Ok(())
}

/// Main handler for the `split` command.
///
/// # Errors
///
/// Returns an error if the value cannot be read from the OS.
pub fn run_split_command<O: OsEnv>(args: &SplitArgs, env: &Environment<O>) -> Result<()> {
    for segment in format_split(args, env)? {
        println!("{segment}");
    }
    Ok(())
}
