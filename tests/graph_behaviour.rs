// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Behaviour of the public graph API

use graphkit::prelude::*;

// =============================================================================
// Test Helpers
// =============================================================================

fn graph() -> Graph {
    Graph::default()
}

fn graph_weighted() -> Graph {
    Graph::new(true, true)
}

fn vertex(id: VertexId, name: impl Into<VertexLabel>, adj: Vec<Neighbor>) -> Vertex {
    Vertex {
        id,
        name: name.into(),
        adj,
    }
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_graph_creation() {
    let g = graph();
    assert!(g.is_directed());
    assert!(!g.is_weighted());
    assert_eq!(g.vertex_count(), 0);
    assert!(g.vertices().is_empty());

    let g = Graph::new(false, true);
    assert!(!g.is_directed());
    assert!(g.is_weighted());
}

#[test]
fn test_graph_put_edge() {
    let mut g = graph();
    g.put_edge(1, 2, None).unwrap();

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(
        g.vertices(),
        &[
            vertex(1, 1, vec![Neighbor::new(2)]),
            vertex(2, 2, vec![]),
        ]
    );
    assert_eq!(&g[1], &[Neighbor::new(2)]);
    assert!(g[2].is_empty());
}

#[test]
fn test_graph_put_edge_with_weight() {
    let mut g = graph_weighted();
    g.put_edge("A", "B", Some(2.5)).unwrap();

    assert_eq!(g.vertex_count(), 2);
    assert_eq!(
        g.vertices(),
        &[
            vertex(1, "A", vec![Neighbor::weighted(2, 2.5)]),
            vertex(2, "B", vec![]),
        ]
    );
    assert_eq!(&g[1], &[Neighbor::weighted(2, 2.5)]);
    assert!(g[2].is_empty());
}

#[test]
fn test_graph_put_edge_invalid_vertex() {
    let mut g = graph();
    assert_eq!(g.put_edge(-1, 2, None), Err(GraphError::NegativeVertex(-1)));
    assert_eq!(
        g.put_edge("A", -2, None),
        Err(GraphError::NegativeVertex(-2))
    );
    assert!(g.is_empty());
}

#[test]
fn test_graph_put_edge_invalid_weight() {
    let mut g = graph();
    assert_eq!(
        g.put_edge(1, 2, Some(3.2)),
        Err(GraphError::WeightNotEnabled)
    );
    assert_eq!(
        g.put_edge("A", "B", Some(2.5)),
        Err(GraphError::WeightNotEnabled)
    );

    let mut w = graph_weighted();
    assert_eq!(w.put_edge("A", "B", None), Err(GraphError::WeightRequired));
}

#[test]
fn test_neighbors_checked_access() {
    let mut g = graph();
    g.put_edge("A", "B", None).unwrap();

    assert_eq!(g.neighbors(1).unwrap(), &[Neighbor::new(2)]);
    assert!(g.neighbors(0).is_err());
    assert!(g.neighbors(3).is_err());
    assert_eq!(g.label(2), Some(&VertexLabel::from("B")));
    assert_eq!(g.vertex_id(&"A".into()), Some(1));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_graph_str_representation() {
    let mut g = graph();
    g.put_edge(1, 2, None).unwrap();
    g.put_edge(2, 3, None).unwrap();
    g.put_edge("A", "B", None).unwrap();

    insta::assert_snapshot!(g.to_string(), @r"
    1: 1 -> [2]
    2: 2 -> [3]
    3: 3 -> []
    4: A -> [5]
    5: B -> []
    ");
}

#[test]
fn test_weighted_str_representation() {
    let mut g = Graph::new(false, true);
    g.put_edge("A", "B", Some(3.0)).unwrap();
    assert_eq!(g.to_string(), "1: A -> [(2, 3.0)]\n2: B -> [(1, 3.0)]\n");
}

// =============================================================================
// Fixed-size representations
// =============================================================================

#[test]
fn test_adjacency_matrix_set_and_get() {
    let mut adj = AdjacencyMatrix::new(6, false);
    assert_eq!(adj.shape(), (6, 6));
    assert!(!adj.is_weighted());

    adj.set(1, 2, None).unwrap();
    assert_eq!(adj.row(1).unwrap()[2], 1.0);
}

#[test]
fn test_adjacency_matrix_set_and_get_with_weight() {
    let mut adj = AdjacencyMatrix::new(10, true);
    adj.set(1, 2, Some(0.5)).unwrap();
    assert_eq!(adj.row(1).unwrap()[2], 0.5);
}

#[test]
fn test_representations_agree_on_small_graph() {
    let mut g = graph();
    g.put_edge("A", "B", None).unwrap();
    g.put_edge("B", "C", None).unwrap();
    g.put_edge("C", "A", None).unwrap();

    let matrix = g.to_adjacency_matrix().unwrap();
    let list = g.to_adjacency_list().unwrap();
    let incidence = g.to_incidence_matrix().unwrap();

    for v in 0..3 {
        let from_list: Vec<usize> = list.row(v).unwrap().iter().map(|n| n.vertex).collect();
        let from_matrix: Vec<usize> = (0..3)
            .filter(|&w| matrix.get(v, w).unwrap() != 0.0)
            .collect();
        assert_eq!(from_list, from_matrix);
    }

    insta::assert_snapshot!(incidence.to_string(), @r"
    [[-1.  0.  1.]
     [ 1. -1.  0.]
     [ 0.  1. -1.]]
    ");
}
