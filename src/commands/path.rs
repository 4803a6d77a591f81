// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path command - cheapest path between two vertices

use crate::graph::GraphOptions;
use crate::types::VertexLabel;
use anyhow::Result;
use std::path::Path;

/// Run the path command
///
/// # Errors
///
/// Fails if the input cannot be loaded, a vertex is unknown, or a weight is
/// negative.
pub fn run(input: &Path, from: &str, to: &str, options: GraphOptions) -> Result<()> {
    let graph = super::load_input(input, options)?;

    match graph.shortest_path(&VertexLabel::parse(from), &VertexLabel::parse(to))? {
        Some((cost, ids)) => {
            println!("cost: {cost}");
            println!("{}", super::labels(&graph, &ids).join(" -> "));
        }
        None => println!("No path from {from} to {to}"),
    }
    Ok(())
}
