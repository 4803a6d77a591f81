// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Incidence representations: vertices against edges
//!
//! Directed edges are oriented: the tail gets `-w`, the head `+w`.
//! Undirected edges get `w` at both ends and `2w` for a loop. Unweighted
//! edges use `w = 1`.

use crate::error::{GraphError, Result};
use crate::matrix::Matrix;
use std::fmt;
use tracing::trace;

/// Common interface of incidence structures
pub trait Incidence {
    /// `(vertices, edges)`
    fn shape(&self) -> (usize, usize);

    /// Number of edges connected so far
    fn edge_count(&self) -> usize;

    /// Connect `from` and `to` with a new edge and return its index
    ///
    /// # Errors
    ///
    /// Fails when an endpoint is out of range or the weight is not finite.
    fn connect(&mut self, from: usize, to: usize, weight: Option<f64>) -> Result<usize>;
}

fn check_vertex(vertex: usize, size: usize) -> Result<()> {
    if vertex < size {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange { vertex, size })
    }
}

fn check_edge(edge: usize, size: usize) -> Result<()> {
    if edge < size {
        Ok(())
    } else {
        Err(GraphError::EdgeOutOfRange { edge, size })
    }
}

fn magnitude(weight: Option<f64>) -> Result<f64> {
    match weight {
        Some(w) if !w.is_finite() => Err(GraphError::InvalidWeight(w)),
        Some(w) => Ok(w),
        None => Ok(1.0),
    }
}

// =============================================================================
// Incidence matrix
// =============================================================================

/// `vertices x edges` matrix with a fixed number of edge columns
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    directed: bool,
    used: usize,
    data: Matrix,
}

impl IncidenceMatrix {
    /// Zeroed matrix of the given `(vertices, edges)` shape
    #[must_use]
    pub fn new(shape: (usize, usize), directed: bool) -> Self {
        Self {
            directed,
            used: 0,
            data: Matrix::zeros(shape.0, shape.1),
        }
    }

    /// Whether columns are oriented
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Row of a vertex (one value per edge column)
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for a missing row.
    pub fn row(&self, vertex: usize) -> Result<&[f64]> {
        check_vertex(vertex, self.data.shape().0)?;
        Ok(self.data.row(vertex))
    }

    /// Column of an edge (one value per vertex)
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeOutOfRange`] for a missing column.
    pub fn column(&self, edge: usize) -> Result<Vec<f64>> {
        check_edge(edge, self.data.shape().1)?;
        Ok(self.data.column(edge))
    }

    /// Value at `(vertex, edge)`
    ///
    /// # Errors
    ///
    /// Fails when either index is outside the matrix.
    pub fn get(&self, vertex: usize, edge: usize) -> Result<f64> {
        let (vertices, edges) = self.data.shape();
        check_vertex(vertex, vertices)?;
        check_edge(edge, edges)?;
        Ok(self.data.get(vertex, edge))
    }
}

impl Incidence for IncidenceMatrix {
    fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    fn edge_count(&self) -> usize {
        self.used
    }

    fn connect(&mut self, from: usize, to: usize, weight: Option<f64>) -> Result<usize> {
        let (vertices, edges) = self.data.shape();
        check_vertex(from, vertices)?;
        check_vertex(to, vertices)?;
        if self.used == edges {
            return Err(GraphError::IncidenceFull(edges));
        }
        let w = magnitude(weight)?;

        let edge = self.used;
        if from == to {
            if self.directed {
                return Err(GraphError::DirectedSelfLoop(from));
            }
            self.data.set(from, edge, 2.0 * w);
        } else if self.directed {
            self.data.set(from, edge, -w);
            self.data.set(to, edge, w);
        } else {
            self.data.set(from, edge, w);
            self.data.set(to, edge, w);
        }
        self.used += 1;
        trace!(edge, from, to, "incidence column filled");
        Ok(edge)
    }
}

impl fmt::Display for IncidenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

// =============================================================================
// Incidence list
// =============================================================================

/// Endpoints of an edge in an [`IncidenceList`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncidentEdge {
    /// Tail (or first endpoint)
    pub from: usize,
    /// Head (or second endpoint)
    pub to: usize,
    /// Weight, if any
    pub weight: Option<f64>,
}

/// Per-vertex lists of incident edge indices
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceList {
    directed: bool,
    incident: Vec<Vec<usize>>,
    edges: Vec<IncidentEdge>,
}

impl IncidenceList {
    /// Empty lists for `vertices` vertices
    #[must_use]
    pub fn new(vertices: usize, directed: bool) -> Self {
        Self {
            directed,
            incident: vec![Vec::new(); vertices],
            edges: Vec::new(),
        }
    }

    /// Whether edges are oriented
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Edge indices touching a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn incident(&self, vertex: usize) -> Result<&[usize]> {
        check_vertex(vertex, self.incident.len())?;
        Ok(&self.incident[vertex])
    }

    /// Endpoints of an edge
    #[must_use]
    pub fn endpoints(&self, edge: usize) -> Option<IncidentEdge> {
        self.edges.get(edge).copied()
    }

    /// Edges leaving a vertex: all incident edges when undirected
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn outgoing(&self, vertex: usize) -> Result<Vec<usize>> {
        let incident = self.incident(vertex)?;
        Ok(incident
            .iter()
            .copied()
            .filter(|&e| !self.directed || self.edges[e].from == vertex)
            .collect())
    }
}

impl Incidence for IncidenceList {
    fn shape(&self) -> (usize, usize) {
        (self.incident.len(), self.edges.len())
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn connect(&mut self, from: usize, to: usize, weight: Option<f64>) -> Result<usize> {
        let size = self.incident.len();
        check_vertex(from, size)?;
        check_vertex(to, size)?;
        if let Some(w) = weight {
            magnitude(Some(w))?;
        }

        let edge = self.edges.len();
        self.edges.push(IncidentEdge { from, to, weight });
        self.incident[from].push(edge);
        if to != from {
            self.incident[to].push(edge);
        }
        Ok(edge)
    }
}

impl fmt::Display for IncidenceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        for (vertex, edges) in self.incident.iter().enumerate() {
            let parts: Vec<String> = edges
                .iter()
                .map(|&e| {
                    let edge = self.edges[e];
                    format!("e{e}({} {arrow} {})", edge.from, edge.to)
                })
                .collect();
            writeln!(f, "{vertex}: [{}]", parts.join(", "))?;
        }
        Ok(())
    }
}
