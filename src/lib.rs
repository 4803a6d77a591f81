// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphkit library - graph theory with adjacency and incidence representations
//!
//! This crate builds directed or undirected, weighted or unweighted graphs
//! from labelled vertices and exposes them as adjacency lists, adjacency
//! matrices, incidence matrices and incidence lists.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod adjacency;
pub mod commands;
pub mod config;
pub mod edge_list;
pub mod error;
pub mod graph;
pub mod graph_list;
pub mod incidence;
mod matrix;

pub use error::{GraphError, Result};
pub use graph::{Graph, GraphOptions};

/// Core value types shared by every representation
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::fmt;

    /// Position of a vertex in a graph, assigned from 1 in insertion order
    pub type VertexId = usize;

    // =========================================================================
    // Vertex labels
    // =========================================================================

    /// User-facing name of a vertex.
    ///
    /// Integer and string labels never compare equal, so `1` and `"1"` are
    /// two distinct vertices.
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum VertexLabel {
        /// Integer label
        Index(i64),
        /// Named label (e.g., "A", "B")
        Name(String),
    }

    impl VertexLabel {
        /// Parse a token.
        ///
        /// Only canonical integers (`7`, `-3`) become integer labels; `007`,
        /// `+7` and `-0` stay names so distinct tokens stay distinct vertices.
        #[must_use]
        pub fn parse(token: &str) -> Self {
            match token.parse::<i64>() {
                Ok(i) if i.to_string() == token => Self::Index(i),
                _ => Self::Name(token.to_string()),
            }
        }
    }

    impl fmt::Display for VertexLabel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Index(i) => write!(f, "{i}"),
                Self::Name(name) => f.write_str(name),
            }
        }
    }

    impl From<i64> for VertexLabel {
        fn from(value: i64) -> Self {
            Self::Index(value)
        }
    }

    impl From<i32> for VertexLabel {
        fn from(value: i32) -> Self {
            Self::Index(i64::from(value))
        }
    }

    impl From<&str> for VertexLabel {
        fn from(value: &str) -> Self {
            Self::Name(value.to_string())
        }
    }

    impl From<String> for VertexLabel {
        fn from(value: String) -> Self {
            Self::Name(value)
        }
    }

    // =========================================================================
    // Adjacency entries
    // =========================================================================

    /// One entry of an adjacency list: the arrival vertex and its weight
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct Neighbor {
        /// Arrival vertex
        pub vertex: VertexId,
        /// Edge weight, present only in weighted graphs
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub weight: Option<f64>,
    }

    impl Neighbor {
        /// Unweighted entry
        #[must_use]
        pub fn new(vertex: VertexId) -> Self {
            Self {
                vertex,
                weight: None,
            }
        }

        /// Weighted entry
        #[must_use]
        pub fn weighted(vertex: VertexId, weight: f64) -> Self {
            Self {
                vertex,
                weight: Some(weight),
            }
        }
    }

    impl fmt::Display for Neighbor {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self.weight {
                Some(w) => write!(f, "({}, {w:?})", self.vertex),
                None => write!(f, "{}", self.vertex),
            }
        }
    }

    /// Display helper for a slice of neighbours: `[2, 3]` or `[(2, 2.5)]`
    pub struct NeighborList<'a>(pub &'a [Neighbor]);

    impl fmt::Display for NeighborList<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("[")?;
            for (i, n) in self.0.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{n}")?;
            }
            f.write_str("]")
        }
    }

    // =========================================================================
    // Vertices and edges
    // =========================================================================

    /// A vertex row of the adjacency list
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Vertex {
        /// Identifier, from 1
        pub id: VertexId,
        /// User-facing label
        pub name: VertexLabel,
        /// Outgoing arcs in insertion order
        pub adj: Vec<Neighbor>,
    }

    /// A single `put_edge` call, by vertex id
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct EdgeRecord {
        /// Start vertex
        pub from: VertexId,
        /// Arrival vertex
        pub to: VertexId,
        /// Weight, if the graph is weighted
        pub weight: Option<f64>,
    }

    /// Serialisable edge with label endpoints
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct DocumentEdge {
        /// Start vertex label
        pub from: VertexLabel,
        /// Arrival vertex label
        pub to: VertexLabel,
        /// Weight, if the graph is weighted
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub weight: Option<f64>,
    }

    /// On-disk form of a graph
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct GraphDocument {
        /// Directed graph?
        #[serde(default = "default_directed")]
        pub directed: bool,
        /// Weighted graph?
        #[serde(default)]
        pub weighted: bool,
        /// Edges in insertion order
        #[serde(default)]
        pub edges: Vec<DocumentEdge>,
    }

    fn default_directed() -> bool {
        true
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::adjacency::{Adjacency, AdjacencyList, AdjacencyMatrix};
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::{Graph, GraphOptions};
    pub use crate::incidence::{Incidence, IncidenceList, IncidenceMatrix};
    pub use crate::types::*;
}
