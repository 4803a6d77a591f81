// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Show command - prints the adjacency list of a graph

use crate::graph::GraphOptions;
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// Run the show command
///
/// # Errors
///
/// Fails if the input cannot be loaded.
pub fn run(input: &Path, options: GraphOptions) -> Result<()> {
    info!("Showing {}", input.display());
    let graph = super::load_input(input, options)?;

    print!("{graph}");
    println!(
        "({} vertices, {} edges, {}, {})",
        graph.vertex_count(),
        graph.edge_count(),
        if graph.is_directed() { "directed" } else { "undirected" },
        if graph.is_weighted() { "weighted" } else { "unweighted" },
    );
    Ok(())
}
