// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for graph construction and queries

use crate::types::VertexId;
use thiserror::Error;

/// Errors raised by graph operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Integer vertex labels must be non-negative
    #[error("vertex {0} cannot be less than zero")]
    NegativeVertex(i64),

    /// A weight was supplied to an unweighted graph
    #[error("cannot insert a weight for an edge of an unweighted graph")]
    WeightNotEnabled,

    /// A weighted graph was given an edge without a weight
    #[error("an edge of a weighted graph requires a weight")]
    WeightRequired,

    /// NaN or infinite weight
    #[error("edge weight must be finite, got {0}")]
    InvalidWeight(f64),

    /// Index outside a fixed-size representation
    #[error("vertex {vertex} out of range for {size} vertices")]
    VertexOutOfRange {
        /// Offending index
        vertex: usize,
        /// Number of vertices available
        size: usize,
    },

    /// Edge column outside an incidence matrix
    #[error("edge {edge} out of range for {size} edges")]
    EdgeOutOfRange {
        /// Offending column
        edge: usize,
        /// Number of edge columns
        size: usize,
    },

    /// Label or id not present in the graph
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// Every edge column of an incidence matrix is already used
    #[error("incidence matrix is full ({0} edge columns)")]
    IncidenceFull(usize),

    /// Oriented incidence cannot encode a loop
    #[error("self-loop on vertex {0} cannot be oriented")]
    DirectedSelfLoop(usize),

    /// Shortest path search found a negative weight
    #[error("negative edge weight {0} is not supported by shortest path search")]
    NegativeWeight(f64),

    /// Topological order requested on a cyclic graph
    #[error("graph contains a cycle through vertex {0}")]
    Cycle(VertexId),

    /// Operation only defined on directed graphs
    #[error("{0} requires a directed graph")]
    RequiresDirected(&'static str),

    /// Malformed edge-list input
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },
}

/// Result alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
