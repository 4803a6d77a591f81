// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Adjacency-list storage backing [`crate::Graph`]
//!
//! Labels are interned into vertex ids on first sight. Ids start at 1 and
//! follow insertion order, so vertex `id` lives at position `id - 1`.

use crate::error::{GraphError, Result};
use crate::types::{Neighbor, NeighborList, Vertex, VertexId, VertexLabel};
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;
use tracing::trace;

/// A graph stored as one adjacency row per vertex
#[derive(Clone, Default)]
pub struct GraphList {
    weighted: bool,
    vertices: Vec<Vertex>,
    /// Map from label to vertex id
    ids: HashMap<VertexLabel, VertexId>,
}

impl GraphList {
    /// Create an empty adjacency list
    #[must_use]
    pub fn new(weighted: bool) -> Self {
        Self {
            weighted,
            vertices: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Number of vertices (rows)
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All vertex rows in id order
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Whether entries carry weights
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Look up the id of a label
    #[must_use]
    pub fn vertex_id(&self, label: &VertexLabel) -> Option<VertexId> {
        self.ids.get(label).copied()
    }

    /// Get a vertex row by id
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        id.checked_sub(1).and_then(|pos| self.vertices.get(pos))
    }

    /// Return the id for `label`, adding a new row if it is unseen
    pub fn intern(&mut self, label: VertexLabel) -> VertexId {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }
        let id = self.vertices.len() + 1;
        trace!(id, %label, "adding vertex row");
        self.ids.insert(label.clone(), id);
        self.vertices.push(Vertex {
            id,
            name: label,
            adj: Vec::new(),
        });
        id
    }

    /// Append an arc from `start` to `arrival`, creating either vertex as needed.
    ///
    /// Returns the ids of both endpoints. Weight validation is the caller's job.
    pub fn put(
        &mut self,
        start: VertexLabel,
        arrival: VertexLabel,
        weight: Option<f64>,
    ) -> (VertexId, VertexId) {
        let from = self.intern(start);
        let to = self.intern(arrival);
        self.push_arc(from, to, weight);
        (from, to)
    }

    /// Append an arc between two existing ids
    pub(crate) fn push_arc(&mut self, from: VertexId, to: VertexId, weight: Option<f64>) {
        let neighbor = match weight {
            Some(w) => Neighbor::weighted(to, w),
            None => Neighbor::new(to),
        };
        self.vertices[from - 1].adj.push(neighbor);
    }

    /// Adjacency row of a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `id` is not a vertex.
    pub fn neighbors(&self, id: VertexId) -> Result<&[Neighbor]> {
        self.vertex(id)
            .map(|v| v.adj.as_slice())
            .ok_or_else(|| GraphError::UnknownVertex(format!("#{id}")))
    }
}

impl Index<VertexId> for GraphList {
    type Output = [Neighbor];

    /// # Panics
    ///
    /// Panics if `id` is 0 or greater than the vertex count.
    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id - 1].adj
    }
}

impl fmt::Debug for GraphList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphList")
            .field("weighted", &self.weighted)
            .field("vertices", &self.vertices.len())
            .finish()
    }
}

impl fmt::Display for GraphList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            writeln!(
                f,
                "{}: {} -> {}",
                vertex.id,
                vertex.name,
                NeighborList(&vertex.adj)
            )?;
        }
        Ok(())
    }
}
