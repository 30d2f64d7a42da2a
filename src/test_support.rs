//! Shared fixtures for unit tests.

use crate::distance::DistanceMatrix;
use crate::models::RoutingProblem;
use crate::network::{Graph, GraphBuilder, Stop};

/// Builds a graph over stop ids `0..n` from `(from, to, weight)` triples.
pub(crate) fn graph(n: u32, edges: &[(u32, u32, f64)]) -> Graph {
    let mut b = GraphBuilder::new();
    for id in 0..n {
        b.add_stop(Stop::bare(id)).expect("unique ids");
    }
    for &(u, v, w) in edges {
        b.add_edge(u, v, w).expect("valid edge");
    }
    b.build()
}

/// Four stops on a two-way ring, every segment 5, depot 0.
pub(crate) fn ring_graph() -> Graph {
    graph(
        4,
        &[
            (0, 1, 5.0),
            (1, 2, 5.0),
            (2, 3, 5.0),
            (3, 0, 5.0),
            (1, 0, 5.0),
            (2, 1, 5.0),
            (3, 2, 5.0),
            (0, 3, 5.0),
        ],
    )
}

pub(crate) fn ring_problem(vehicles: usize, capacity: usize) -> RoutingProblem {
    RoutingProblem::new(DistanceMatrix::from_graph(&ring_graph()), vehicles, 0, capacity)
        .expect("valid problem")
}

/// Depot 0 and stops 1..=3 on a line, `d(i, j) = |i - j|`.
pub(crate) fn line_problem(vehicles: usize, capacity: usize) -> RoutingProblem {
    let rows: Vec<Vec<i64>> = (0..4i64)
        .map(|i| (0..4i64).map(|j| (i - j).abs()).collect())
        .collect();
    let dm = DistanceMatrix::from_rows(&rows).expect("square");
    RoutingProblem::new(dm, vehicles, 0, capacity).expect("valid problem")
}

/// A ring plus stop 4 with no edges at all.
pub(crate) fn isolated_problem(vehicles: usize, capacity: usize) -> RoutingProblem {
    let mut b = GraphBuilder::new();
    for id in 0..5 {
        b.add_stop(Stop::bare(id)).expect("unique ids");
    }
    for (u, v) in [(0, 1), (1, 2), (2, 3), (3, 0), (1, 0), (2, 1), (3, 2), (0, 3)] {
        b.add_edge(u, v, 5.0).expect("valid edge");
    }
    RoutingProblem::new(DistanceMatrix::from_graph(&b.build()), vehicles, 0, capacity)
        .expect("valid problem")
}

/// Eight stops scattered on a grid with a sparse two-way street network.
pub(crate) fn grid_problem(vehicles: usize, capacity: usize) -> RoutingProblem {
    // 0 1 2
    // 3 4 5
    // 6 7 8
    let streets = [
        (0, 1, 4.0),
        (1, 2, 3.0),
        (3, 4, 2.0),
        (4, 5, 6.0),
        (6, 7, 5.0),
        (7, 8, 2.0),
        (0, 3, 3.0),
        (3, 6, 4.0),
        (1, 4, 5.0),
        (4, 7, 3.0),
        (2, 5, 2.0),
        (5, 8, 7.0),
    ];
    let mut edges = Vec::new();
    for &(u, v, w) in &streets {
        edges.push((u, v, w));
        edges.push((v, u, w + 1.0));
    }
    let g = graph(9, &edges);
    RoutingProblem::new(DistanceMatrix::from_graph(&g), vehicles, 4, capacity)
        .expect("valid problem")
}
