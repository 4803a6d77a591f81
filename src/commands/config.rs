// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - shows the effective configuration

use crate::config::{self, Config};
use anyhow::Result;

/// Print the effective configuration as TOML
///
/// # Errors
///
/// Fails if the configuration cannot be rendered.
pub fn run(config: &Config) -> Result<()> {
    if let Some(path) = config::default_path() {
        println!("# default file: {}", path.display());
    }
    print!("{}", config.to_toml()?);
    Ok(())
}
