// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Reading and writing graphs
//!
//! Two input formats are understood: plain edge lists (`from to [weight]`
//! per line) and JSON graph documents. Documents are also the save format.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphOptions};
use crate::types::{GraphDocument, VertexLabel};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parse an edge list.
///
/// Blank lines and `#` comments are skipped. Canonical integer tokens
/// become integer labels; see [`VertexLabel::parse`].
///
/// # Errors
///
/// Returns [`GraphError::Parse`] with the 1-based line of the first bad
/// line or rejected edge.
pub fn parse(text: &str, options: GraphOptions) -> Result<Graph> {
    let mut graph = Graph::with_options(options);

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = content.split_whitespace().collect();
        let (from, to, weight) = match tokens.as_slice() {
            [from, to] => (*from, *to, None),
            [from, to, weight] => {
                let w = weight.parse::<f64>().map_err(|_| GraphError::Parse {
                    line,
                    message: format!("invalid weight '{weight}'"),
                })?;
                (*from, *to, Some(w))
            }
            _ => {
                return Err(GraphError::Parse {
                    line,
                    message: format!("expected 'from to [weight]', got {} fields", tokens.len()),
                })
            }
        };

        graph
            .put_edge(VertexLabel::parse(from), VertexLabel::parse(to), weight)
            .map_err(|e| GraphError::Parse {
                line,
                message: e.to_string(),
            })?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Load a graph from disk.
///
/// `.json` files are graph documents and carry their own options; any
/// other file is read as an edge list with `options`.
///
/// # Errors
///
/// Fails if the file cannot be read or its content is not a valid graph.
pub fn load(path: &Path, options: GraphOptions) -> anyhow::Result<Graph> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let graph = if is_json {
        let doc: GraphDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Graph::from_document(&doc)
            .with_context(|| format!("Invalid graph in {}", path.display()))?
    } else {
        parse(&content, options)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };

    info!(path = %path.display(), vertices = graph.vertex_count(), "loaded graph");
    Ok(graph)
}

/// Save a graph as a pretty-printed JSON document
///
/// # Errors
///
/// Fails if serialisation or writing fails.
pub fn save(graph: &Graph, path: &Path) -> anyhow::Result<()> {
    write_file(path, &to_json(graph)?)
}

/// Write `content` to `path`, creating missing parent directories
///
/// # Errors
///
/// Fails if a directory cannot be created or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Serialise a graph document to pretty JSON
///
/// # Errors
///
/// Fails if the document cannot be serialised.
pub fn to_json(graph: &Graph) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&graph.to_document())
        .context("Failed to serialize graph to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Neighbor;
    use tempfile::TempDir;

    #[test]
    fn test_parse_mixed_labels() {
        let text = "# sample\n1 2\n\n2 3   # trailing comment\nA B\n";
        let graph = parse(text, GraphOptions::default()).unwrap();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(
            graph.to_string(),
            "1: 1 -> [2]\n2: 2 -> [3]\n3: 3 -> []\n4: A -> [5]\n5: B -> []\n"
        );
    }

    #[test]
    fn test_parse_only_canonical_integers() {
        let graph = parse("7 007\n+7 7\n-0 0\n", GraphOptions::default()).unwrap();

        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.vertex_id(&VertexLabel::Index(7)), Some(1));
        assert_eq!(graph.vertex_id(&"007".into()), Some(2));
        assert_eq!(graph.vertex_id(&"+7".into()), Some(3));
        assert_eq!(graph.vertex_id(&"-0".into()), Some(4));
        assert_eq!(graph.vertex_id(&VertexLabel::Index(0)), Some(5));
    }

    #[test]
    fn test_parse_weights() {
        let options = GraphOptions {
            directed: true,
            weighted: true,
        };
        let graph = parse("A B 2.5\n", options).unwrap();
        assert_eq!(&graph[1], &[Neighbor::weighted(2, 2.5)]);
    }

    #[test]
    fn test_parse_errors_carry_line() {
        let err = parse("A B\nA\n", GraphOptions::default()).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }));

        let weighted = GraphOptions {
            directed: true,
            weighted: true,
        };
        let err = parse("A B x\n", weighted).unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 1, .. }));

        // weight on an unweighted graph
        let err = parse("A B 1.0\n", GraphOptions::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("line 1: {}", GraphError::WeightNotEnabled)
        );

        let err = parse("-1 B\n", GraphOptions::default()).unwrap_err();
        assert!(err.to_string().contains("less than zero"));
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("graph.json");

        let mut graph = Graph::new(false, true);
        graph.put_edge("A", 7, Some(1.25)).unwrap();
        save(&graph, &path).unwrap();

        // options in the document win over the ones passed in
        let loaded = load(&path, GraphOptions::default()).unwrap();
        assert!(!loaded.is_directed());
        assert!(loaded.is_weighted());
        assert_eq!(loaded.to_string(), graph.to_string());
    }

    #[test]
    fn test_load_edge_list_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("edges.txt");
        fs::write(&path, "A B\nB C\n").unwrap();

        let undirected = GraphOptions {
            directed: false,
            weighted: false,
        };
        let graph = load(&path, undirected).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(&graph[2], &[Neighbor::new(1), Neighbor::new(3)]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/graph.txt"), GraphOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
