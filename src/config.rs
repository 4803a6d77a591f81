// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, lowest first: built-in defaults, the TOML config file, then
//! `GRAPHKIT_*` environment variables. CLI flags are applied on top by
//! the binary.

use crate::graph::GraphOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Build directed graphs from edge lists
    pub directed: bool,
    /// Build weighted graphs from edge lists
    pub weighted: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Default export format (dot, json)
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        let options = GraphOptions::default();
        Self {
            directed: options.directed,
            weighted: options.weighted,
            log_level: "info".to_string(),
            format: "dot".to_string(),
        }
    }
}

impl Config {
    /// Graph options implied by this configuration
    #[must_use]
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            directed: self.directed,
            weighted: self.weighted,
        }
    }

    /// Render as TOML
    ///
    /// # Errors
    ///
    /// Fails if serialisation fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .context("Failed to serialize configuration")
    }
}

/// Platform default location of the config file
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "graphkit")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration from `path` (or the default location) and the environment
///
/// # Errors
///
/// Fails if an explicit `path` is missing or any layer holds invalid values.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();
    let mut builder = ::config::Config::builder()
        .set_default("directed", defaults.directed)?
        .set_default("weighted", defaults.weighted)?
        .set_default("log_level", defaults.log_level)?
        .set_default("format", defaults.format)?;

    match path {
        // an explicit file must exist
        Some(p) => builder = builder.add_source(::config::File::from(p).required(true)),
        None => {
            if let Some(p) = default_path() {
                builder = builder.add_source(::config::File::from(p).required(false));
            }
        }
    }

    builder
        .add_source(::config::Environment::with_prefix("GRAPHKIT"))
        .build()
        .context("Failed to load configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}
