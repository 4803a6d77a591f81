// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Traverse command - prints visit order from a start vertex

use crate::graph::GraphOptions;
use crate::types::VertexLabel;
use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

/// Traversal strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// Breadth-first
    Bfs,
    /// Depth-first
    Dfs,
}

/// Run the traverse command
///
/// # Errors
///
/// Fails if the input cannot be loaded or `from` is not a vertex.
pub fn run(input: &Path, from: &str, order: Order, options: GraphOptions) -> Result<()> {
    let graph = super::load_input(input, options)?;
    let start = VertexLabel::parse(from);

    let ids = match order {
        Order::Bfs => graph.bfs(&start)?,
        Order::Dfs => graph.dfs(&start)?,
    };

    for label in super::labels(&graph, &ids) {
        println!("{label}");
    }
    Ok(())
}
