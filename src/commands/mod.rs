// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod export;
pub mod matrix;
pub mod path;
pub mod show;
pub mod topo;
pub mod traverse;

use crate::edge_list;
use crate::graph::{Graph, GraphOptions};
use crate::types::VertexId;
use anyhow::Result;
use std::path::Path;

/// Load the input graph, warning when it is empty
fn load_input(input: &Path, options: GraphOptions) -> Result<Graph> {
    let graph = edge_list::load(input, options)?;
    if graph.is_empty() {
        eprintln!("Warning: {} contains no edges.", input.display());
    }
    Ok(graph)
}

/// Labels of a list of vertex ids
fn labels(graph: &Graph, ids: &[VertexId]) -> Vec<String> {
    ids.iter()
        .map(|&id| match graph.label(id) {
            Some(label) => label.to_string(),
            None => format!("#{id}"),
        })
        .collect()
}
