// session-rs: Process Environment and Arguments
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for session-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. session.toml (cwd, optional)
//! 3. --config (repeatable)
//! 4. SESSION_* env vars
//! 5. CLI overrides (--set, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SESSION_GLOBAL__OUTPUT_LOG_LEVEL=4  → global.output_log_level = 4
//! SESSION_ENV__PATH_SEPARATOR=;       → env.path_separator = ";"
//! ```
//!
//! # Example
//!
//! ```toml
//! [global]
//! output_log_level = 3
//!
//! [env]
//! path_separator = ";"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::EnvOptions;
use crate::error::Result;

use loader::ConfigLoader;
use types::{EnvConfig, GlobalConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Global options.
    pub global: GlobalConfig,
    /// Environment cache options.
    pub env: EnvConfig,
}

impl SessionConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use session_rs::config::SessionConfig;
    ///
    /// let config = SessionConfig::builder()
    ///     .add_toml_file_optional("session.toml")
    ///     .with_env_prefix("SESSION")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `SessionConfig` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `SessionConfig` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Options for an [`Environment`](crate::core::env::Environment) built
    /// from this configuration.
    #[must_use]
    pub fn environment_options(&self) -> EnvOptions {
        EnvOptions::builder()
            .maybe_with_path_separator(self.env.path_separator)
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered and aligned on `=`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_env_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(ref log_file) = self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_env_options(&self, options: &mut BTreeMap<String, String>) {
        let resolved = self.environment_options();
        options.insert(
            "env.path_separator".into(),
            format!("{:?}", resolved.path_separator()),
        );
    }
}
