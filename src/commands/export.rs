// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Export command - exports a graph to various formats

use crate::edge_list;
use crate::graph::GraphOptions;
use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Graphviz DOT format
    Dot,
    /// JSON graph document
    Json,
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("Unknown export format: {other}. Supported: dot, json"),
        }
    }
}

impl ExportFormat {
    /// Get file extension for format
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Json => "json",
        }
    }
}

/// Run the export command
///
/// # Errors
///
/// Fails on an unknown format, an unreadable input, or a failed write.
pub fn run(
    input: &Path,
    format: &str,
    output: Option<PathBuf>,
    options: GraphOptions,
) -> Result<()> {
    let export_format: ExportFormat = format.parse()?;
    info!(
        "Exporting {} as {}",
        input.display(),
        export_format.extension()
    );

    let graph = super::load_input(input, options)?;

    match (export_format, output) {
        (format, Some(path)) => {
            edge_list::write_file(&path, &render(&graph, format)?)?;
            println!("Exported to {}", path.display());
        }
        (format, None) => {
            let content = render(&graph, format)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

fn render(graph: &crate::Graph, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Dot => Ok(graph.to_dot()),
        ExportFormat::Json => edge_list::to_json(graph),
    }
}
