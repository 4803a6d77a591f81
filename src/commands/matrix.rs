// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Matrix command - prints a graph as an adjacency or incidence structure

use crate::graph::GraphOptions;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;

/// Representation to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatrixKind {
    /// Vertices x vertices
    Adjacency,
    /// Vertices x edges
    Incidence,
    /// Incident edges per vertex
    IncidenceList,
}

/// Run the matrix command
///
/// # Errors
///
/// Fails if the input cannot be loaded or converted.
pub fn run(input: &Path, kind: MatrixKind, options: GraphOptions) -> Result<()> {
    let graph = super::load_input(input, options)?;

    let rendered = match kind {
        MatrixKind::Adjacency => graph.to_adjacency_matrix()?.to_string(),
        MatrixKind::Incidence => graph
            .to_incidence_matrix()
            .context("Cannot build incidence matrix")?
            .to_string(),
        MatrixKind::IncidenceList => graph.to_incidence_list()?.to_string(),
    };

    println!("{}", rendered.trim_end());
    Ok(())
}
