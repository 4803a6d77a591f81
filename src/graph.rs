// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! The [`Graph`] facade and its algorithms
//!
//! A graph is an adjacency list plus the log of edges that built it. The
//! list answers neighbourhood queries; the edge log feeds representations
//! that count each edge once (incidence, DOT, documents).

use crate::adjacency::{Adjacency, AdjacencyList, AdjacencyMatrix};
use crate::error::{GraphError, Result};
use crate::graph_list::GraphList;
use crate::incidence::{Incidence, IncidenceList, IncidenceMatrix};
use crate::types::{
    DocumentEdge, EdgeRecord, GraphDocument, Neighbor, Vertex, VertexId, VertexLabel,
};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::ops::Index;
use tracing::debug;

/// Shape of a graph: directedness and weightedness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Arcs go one way only
    pub directed: bool,
    /// Every edge carries a weight
    pub weighted: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            weighted: false,
        }
    }
}

/// A labelled graph backed by an adjacency list
#[derive(Clone)]
pub struct Graph {
    options: GraphOptions,
    list: GraphList,
    edges: Vec<EdgeRecord>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::with_options(GraphOptions::default())
    }
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_options(GraphOptions { directed, weighted })
    }

    /// Create an empty graph from options
    #[must_use]
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            list: GraphList::new(options.weighted),
            edges: Vec::new(),
        }
    }

    /// Options this graph was built with
    #[must_use]
    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// Whether the graph is directed
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    /// Whether edges carry weights
    #[must_use]
    pub fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    /// Number of vertices
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.list.vertex_count()
    }

    /// Number of `put_edge` calls that succeeded
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no vertices
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.vertex_count() == 0
    }

    /// Vertex rows in id order
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        self.list.vertices()
    }

    /// Edge log in insertion order
    #[must_use]
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Id of a label, if present
    #[must_use]
    pub fn vertex_id(&self, label: &VertexLabel) -> Option<VertexId> {
        self.list.vertex_id(label)
    }

    /// Label of an id, if present
    #[must_use]
    pub fn label(&self, id: VertexId) -> Option<&VertexLabel> {
        self.list.vertex(id).map(|v| &v.name)
    }

    /// Adjacency row of a vertex
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `id` is not a vertex.
    pub fn neighbors(&self, id: VertexId) -> Result<&[Neighbor]> {
        self.list.neighbors(id)
    }

    /// Add an edge from `start` to `arrival`, creating missing vertices.
    ///
    /// Undirected graphs also get the reverse arc, except for self-loops
    /// which are stored once.
    ///
    /// # Errors
    ///
    /// Fails on a negative integer label, a weight on an unweighted graph,
    /// a missing weight on a weighted graph, or a non-finite weight. The
    /// graph is left unchanged.
    pub fn put_edge(
        &mut self,
        start: impl Into<VertexLabel>,
        arrival: impl Into<VertexLabel>,
        weight: Option<f64>,
    ) -> Result<()> {
        let start = start.into();
        let arrival = arrival.into();

        for label in [&start, &arrival] {
            if let VertexLabel::Index(i) = label {
                if *i < 0 {
                    return Err(GraphError::NegativeVertex(*i));
                }
            }
        }

        match (weight, self.is_weighted()) {
            (Some(_), false) => return Err(GraphError::WeightNotEnabled),
            (None, true) => return Err(GraphError::WeightRequired),
            (Some(w), true) if !w.is_finite() => return Err(GraphError::InvalidWeight(w)),
            _ => {}
        }

        let (from, to) = self.list.put(start, arrival, weight);
        if !self.is_directed() && from != to {
            self.list.push_arc(to, from, weight);
        }
        self.edges.push(EdgeRecord { from, to, weight });

        debug!(from, to, ?weight, "edge added");
        Ok(())
    }

    fn require(&self, label: &VertexLabel) -> Result<VertexId> {
        self.vertex_id(label)
            .ok_or_else(|| GraphError::UnknownVertex(label.to_string()))
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Breadth-first visit order starting at `start`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn bfs(&self, start: &VertexLabel) -> Result<Vec<VertexId>> {
        let start = self.require(start)?;
        let mut seen = vec![false; self.vertex_count() + 1];
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);
        seen[start] = true;

        while let Some(id) = queue.pop_front() {
            order.push(id);
            for n in &self.list[id] {
                if !seen[n.vertex] {
                    seen[n.vertex] = true;
                    queue.push_back(n.vertex);
                }
            }
        }
        Ok(order)
    }

    /// Depth-first (preorder) visit order starting at `start`
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn dfs(&self, start: &VertexLabel) -> Result<Vec<VertexId>> {
        let start = self.require(start)?;
        let mut seen = vec![false; self.vertex_count() + 1];
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            if seen[id] {
                continue;
            }
            seen[id] = true;
            order.push(id);
            // reversed so the first stored neighbour is visited first
            for n in self.list[id].iter().rev() {
                if !seen[n.vertex] {
                    stack.push(n.vertex);
                }
            }
        }
        Ok(order)
    }

    /// Cheapest path from `from` to `to` as `(cost, ids)`.
    ///
    /// Unweighted edges cost 1. Returns `Ok(None)` when `to` is unreachable.
    ///
    /// # Errors
    ///
    /// Fails if either endpoint is unknown or any edge has a negative weight.
    pub fn shortest_path(
        &self,
        from: &VertexLabel,
        to: &VertexLabel,
    ) -> Result<Option<(f64, Vec<VertexId>)>> {
        let start = self.require(from)?;
        let goal = self.require(to)?;

        for edge in &self.edges {
            if let Some(w) = edge.weight.filter(|w| *w < 0.0) {
                return Err(GraphError::NegativeWeight(w));
            }
        }

        let graph = self.to_petgraph();
        let goal_idx = NodeIndex::new(goal - 1);
        let found = petgraph::algo::astar(
            &graph,
            NodeIndex::new(start - 1),
            |n| n == goal_idx,
            |e| *e.weight(),
            |_| 0.0,
        );

        Ok(found.map(|(cost, path)| {
            (cost, path.into_iter().map(|n| n.index() + 1).collect())
        }))
    }

    /// Vertices ordered so every arc points forward
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::RequiresDirected`] on an undirected graph and
    /// [`GraphError::Cycle`] if the graph has a cycle.
    pub fn topological_order(&self) -> Result<Vec<VertexId>> {
        if !self.is_directed() {
            return Err(GraphError::RequiresDirected("topological order"));
        }
        petgraph::algo::toposort(&self.to_petgraph(), None)
            .map(|nodes| nodes.into_iter().map(|n| n.index() + 1).collect())
            .map_err(|cycle| GraphError::Cycle(cycle.node_id().index() + 1))
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Petgraph view: node `i` is vertex `i + 1`, edge weights default to 1
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<VertexLabel, f64> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.edges.len());
        for vertex in self.vertices() {
            graph.add_node(vertex.name.clone());
        }
        for vertex in self.vertices() {
            for n in &vertex.adj {
                graph.add_edge(
                    NodeIndex::new(vertex.id - 1),
                    NodeIndex::new(n.vertex - 1),
                    n.weight.unwrap_or(1.0),
                );
            }
        }
        graph
    }

    /// Square adjacency matrix, row `id - 1` per vertex
    ///
    /// # Errors
    ///
    /// Propagates [`Adjacency::set`] failures.
    pub fn to_adjacency_matrix(&self) -> Result<AdjacencyMatrix> {
        let mut matrix = AdjacencyMatrix::new(self.vertex_count(), self.is_weighted());
        self.fill_adjacency(&mut matrix)?;
        Ok(matrix)
    }

    /// Fixed-size adjacency list, row `id - 1` per vertex
    ///
    /// # Errors
    ///
    /// Propagates [`Adjacency::set`] failures.
    pub fn to_adjacency_list(&self) -> Result<AdjacencyList> {
        let mut list = AdjacencyList::new(self.vertex_count(), self.is_weighted());
        self.fill_adjacency(&mut list)?;
        Ok(list)
    }

    fn fill_adjacency(&self, target: &mut impl Adjacency) -> Result<()> {
        for vertex in self.vertices() {
            for n in &vertex.adj {
                target.set(vertex.id - 1, n.vertex - 1, n.weight)?;
            }
        }
        Ok(())
    }

    /// Incidence matrix with one column per edge record
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DirectedSelfLoop`] if a directed graph has a loop.
    pub fn to_incidence_matrix(&self) -> Result<IncidenceMatrix> {
        let mut matrix =
            IncidenceMatrix::new((self.vertex_count(), self.edges.len()), self.is_directed());
        self.fill_incidence(&mut matrix)?;
        Ok(matrix)
    }

    /// Incidence list with one entry per edge record
    ///
    /// # Errors
    ///
    /// Propagates [`Incidence::connect`] failures.
    pub fn to_incidence_list(&self) -> Result<IncidenceList> {
        let mut list = IncidenceList::new(self.vertex_count(), self.is_directed());
        self.fill_incidence(&mut list)?;
        Ok(list)
    }

    fn fill_incidence(&self, target: &mut impl Incidence) -> Result<()> {
        for edge in &self.edges {
            target.connect(edge.from - 1, edge.to - 1, edge.weight)?;
        }
        Ok(())
    }

    /// Serialisable form with label endpoints
    #[must_use]
    pub fn to_document(&self) -> GraphDocument {
        let label = |id: VertexId| self.vertices()[id - 1].name.clone();
        GraphDocument {
            directed: self.is_directed(),
            weighted: self.is_weighted(),
            edges: self
                .edges
                .iter()
                .map(|e| DocumentEdge {
                    from: label(e.from),
                    to: label(e.to),
                    weight: e.weight,
                })
                .collect(),
        }
    }

    /// Rebuild a graph by replaying a document's edges
    ///
    /// # Errors
    ///
    /// Fails on the first edge [`Graph::put_edge`] rejects.
    pub fn from_document(doc: &GraphDocument) -> Result<Self> {
        let mut graph = Self::new(doc.directed, doc.weighted);
        for edge in &doc.edges {
            graph.put_edge(edge.from.clone(), edge.to.clone(), edge.weight)?;
        }
        Ok(graph)
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (kind, arrow) = if self.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let mut dot = format!("{kind} G {{\n");
        dot.push_str("  node [shape=circle];\n\n");

        // fmt::Write for String never fails
        for vertex in self.vertices() {
            let label = dot_escape(&vertex.name.to_string());
            let _ = writeln!(dot, "  {} [label=\"{label}\"];", vertex.id);
        }

        if !self.edges.is_empty() {
            dot.push('\n');
        }

        for edge in &self.edges {
            let _ = write!(dot, "  {} {arrow} {}", edge.from, edge.to);
            if let Some(w) = edge.weight {
                let _ = write!(dot, " [label=\"{w}\"]");
            }
            dot.push_str(";\n");
        }

        dot.push_str("}\n");
        dot
    }
}

/// Escape a label for a double-quoted DOT string
fn dot_escape(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

impl Index<VertexId> for Graph {
    type Output = [Neighbor];

    /// # Panics
    ///
    /// Panics if `id` is not a vertex of the graph; see [`Graph::neighbors`].
    fn index(&self, id: VertexId) -> &Self::Output {
        &self.list[id]
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.is_directed())
            .field("weighted", &self.is_weighted())
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
