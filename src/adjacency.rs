// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Fixed-size adjacency representations
//!
//! Both types are sized up front and indexed from 0, unlike [`crate::Graph`]
//! which grows as labels arrive and numbers vertices from 1.

use crate::error::{GraphError, Result};
use crate::matrix::Matrix;
use crate::types::{Neighbor, NeighborList};
use std::fmt;

/// Common interface of adjacency structures
pub trait Adjacency {
    /// `(vertices, vertices)`
    fn shape(&self) -> (usize, usize);

    /// Whether the structure stores weights
    fn is_weighted(&self) -> bool;

    /// Record an arc from `vertex` to `arrival`.
    ///
    /// Weighted structures require a weight; unweighted ones ignore it.
    ///
    /// # Errors
    ///
    /// Fails when an index is out of range, or a weighted structure gets
    /// a missing or non-finite weight.
    fn set(&mut self, vertex: usize, arrival: usize, weight: Option<f64>) -> Result<()>;

    /// Number of vertices
    fn vertex_count(&self) -> usize {
        self.shape().0
    }
}

/// Validate indices and weight, returning the value to store
fn checked_entry(
    size: usize,
    weighted: bool,
    vertex: usize,
    arrival: usize,
    weight: Option<f64>,
) -> Result<Option<f64>> {
    for v in [vertex, arrival] {
        if v >= size {
            return Err(GraphError::VertexOutOfRange { vertex: v, size });
        }
    }
    if !weighted {
        return Ok(None);
    }
    match weight {
        None => Err(GraphError::WeightRequired),
        Some(w) if !w.is_finite() => Err(GraphError::InvalidWeight(w)),
        Some(w) => Ok(Some(w)),
    }
}

// =============================================================================
// Adjacency matrix
// =============================================================================

/// Square matrix where cell `(v, w)` holds the weight (or `1`) of arc `v -> w`
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    weighted: bool,
    data: Matrix,
}

impl AdjacencyMatrix {
    /// Zeroed `n x n` matrix
    #[must_use]
    pub fn new(vertices: usize, weighted: bool) -> Self {
        Self {
            weighted,
            data: Matrix::zeros(vertices, vertices),
        }
    }

    /// Row of a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for a missing row.
    pub fn row(&self, vertex: usize) -> Result<&[f64]> {
        self.check(vertex)?;
        Ok(self.data.row(vertex))
    }

    /// Value of cell `(vertex, arrival)`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either index is outside.
    pub fn get(&self, vertex: usize, arrival: usize) -> Result<f64> {
        self.check(vertex)?;
        self.check(arrival)?;
        Ok(self.data.get(vertex, arrival))
    }

    /// True when the matrix equals its transpose
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_symmetric(&self) -> bool {
        let n = self.vertex_count();
        for v in 0..n {
            for w in v + 1..n {
                if self.data.get(v, w) != self.data.get(w, v) {
                    return false;
                }
            }
        }
        true
    }

    fn check(&self, vertex: usize) -> Result<()> {
        let size = self.vertex_count();
        if vertex < size {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex, size })
        }
    }
}

impl Adjacency for AdjacencyMatrix {
    fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn set(&mut self, vertex: usize, arrival: usize, weight: Option<f64>) -> Result<()> {
        let stored = checked_entry(self.vertex_count(), self.weighted, vertex, arrival, weight)?;
        self.data.set(vertex, arrival, stored.unwrap_or(1.0));
        Ok(())
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

// =============================================================================
// Adjacency list
// =============================================================================

/// One neighbour row per vertex
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyList {
    weighted: bool,
    rows: Vec<Vec<Neighbor>>,
}

impl AdjacencyList {
    /// `n` empty rows
    #[must_use]
    pub fn new(vertices: usize, weighted: bool) -> Self {
        Self {
            weighted,
            rows: vec![Vec::new(); vertices],
        }
    }

    /// Neighbours of a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for a missing row.
    pub fn row(&self, vertex: usize) -> Result<&[Neighbor]> {
        self.rows
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or(GraphError::VertexOutOfRange {
                vertex,
                size: self.rows.len(),
            })
    }

    /// Total number of arcs
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl Adjacency for AdjacencyList {
    fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.len())
    }

    fn is_weighted(&self) -> bool {
        self.weighted
    }

    fn set(&mut self, vertex: usize, arrival: usize, weight: Option<f64>) -> Result<()> {
        let stored = checked_entry(self.rows.len(), self.weighted, vertex, arrival, weight)?;
        self.rows[vertex].push(Neighbor {
            vertex: arrival,
            weight: stored,
        });
        Ok(())
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, row) in self.rows.iter().enumerate() {
            writeln!(f, "{vertex}: {}", NeighborList(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_set_and_get() {
        let mut adj = AdjacencyMatrix::new(6, false);
        assert_eq!(adj.shape(), (6, 6));

        adj.set(1, 2, None).unwrap();
        assert_eq!(adj.row(1).unwrap()[2], 1.0);
        assert_eq!(adj.get(2, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_matrix_set_with_weight() {
        let mut adj = AdjacencyMatrix::new(10, true);
        adj.set(1, 2, Some(0.5)).unwrap();
        assert_eq!(adj.row(1).unwrap()[2], 0.5);
    }

    #[test]
    fn test_matrix_unweighted_ignores_weight() {
        let mut adj = AdjacencyMatrix::new(3, false);
        adj.set(0, 1, Some(7.0)).unwrap();
        assert_eq!(adj.get(0, 1).unwrap(), 1.0);
    }

    #[test]
    fn test_matrix_weight_required() {
        let mut adj = AdjacencyMatrix::new(3, true);
        assert_eq!(adj.set(0, 1, None), Err(GraphError::WeightRequired));
        assert!(matches!(
            adj.set(0, 1, Some(f64::NAN)),
            Err(GraphError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_matrix_out_of_range() {
        let mut adj = AdjacencyMatrix::new(2, false);
        assert_eq!(
            adj.set(0, 2, None),
            Err(GraphError::VertexOutOfRange { vertex: 2, size: 2 })
        );
        assert!(adj.row(5).is_err());
    }

    #[test]
    fn test_matrix_display() {
        let mut adj = AdjacencyMatrix::new(2, false);
        adj.set(0, 1, None).unwrap();
        insta::assert_snapshot!(adj.to_string(), @r"
        [[0. 1.]
         [0. 0.]]
        ");
    }

    #[test]
    fn test_matrix_symmetry() {
        let mut adj = AdjacencyMatrix::new(3, false);
        adj.set(0, 1, None).unwrap();
        assert!(!adj.is_symmetric());
        adj.set(1, 0, None).unwrap();
        assert!(adj.is_symmetric());
    }

    #[test]
    fn test_list_set() {
        let mut adj = AdjacencyList::new(3, true);
        adj.set(0, 2, Some(1.5)).unwrap();
        adj.set(0, 1, Some(2.0)).unwrap();

        assert_eq!(
            adj.row(0).unwrap(),
            &[Neighbor::weighted(2, 1.5), Neighbor::weighted(1, 2.0)]
        );
        assert_eq!(adj.arc_count(), 2);
        assert_eq!(adj.to_string(), "0: [(2, 1.5), (1, 2.0)]\n1: []\n2: []\n");
    }

    #[test]
    fn test_list_unweighted_drops_weight() {
        let mut adj = AdjacencyList::new(2, false);
        adj.set(1, 0, Some(4.0)).unwrap();
        assert_eq!(adj.row(1).unwrap(), &[Neighbor::new(0)]);
        assert_eq!(
            adj.set(2, 0, None),
            Err(GraphError::VertexOutOfRange { vertex: 2, size: 2 })
        );
    }
}
