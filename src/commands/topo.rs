// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Topo command

use crate::graph::GraphOptions;
use anyhow::Result;
use std::path::Path;

/// Print a topological order, one label per line
///
/// # Errors
///
/// Fails if the input cannot be loaded, is undirected, or has a cycle.
pub fn run(input: &Path, options: GraphOptions) -> Result<()> {
    let graph = super::load_input(input, options)?;
    let order = graph.topological_order()?;

    for label in super::labels(&graph, &order) {
        println!("{label}");
    }
    Ok(())
}
