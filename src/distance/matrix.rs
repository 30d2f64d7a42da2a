//! Dense travel-time matrix.

use tracing::debug;

use crate::error::{Result, RoutingError};
use crate::network::Graph;

/// Cost of travelling between two stops that have no connecting path.
///
/// Large but finite, so sums of arc costs stay well inside `i64` and an
/// unreachable arc is never cheaper than any real detour.
pub const UNREACHABLE: i64 = 1_000_000;

/// A dense n×n integral travel-time matrix stored in row-major order.
///
/// Built from a sparse [`Graph`] with all-pairs shortest paths, or from
/// explicit rows. Entries are non-negative; pairs with no path hold
/// [`UNREACHABLE`].
///
/// # Examples
///
/// ```
/// use depot_routing::network::{GraphBuilder, Stop};
/// use depot_routing::distance::{DistanceMatrix, UNREACHABLE};
///
/// let mut b = GraphBuilder::new();
/// for id in 0..3 {
///     b.add_stop(Stop::bare(id)).unwrap();
/// }
/// b.add_edge(0, 1, 4.0).unwrap();
/// b.add_edge(1, 2, 6.0).unwrap();
/// let dm = DistanceMatrix::from_graph(&b.build());
///
/// assert_eq!(dm.get(0, 2), 10);
/// assert_eq!(dm.get(2, 0), UNREACHABLE);
/// assert_eq!(dm.get(1, 1), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes shortest travel times between every ordered pair of stops.
    ///
    /// Floyd–Warshall over the explicit edges, O(n³). Results are rounded to
    /// the nearest integer and capped just below [`UNREACHABLE`], so a real
    /// path always stays distinguishable from a missing one.
    pub fn from_graph(graph: &Graph) -> Self {
        let n = graph.num_stops();
        let mut dist = vec![f64::INFINITY; n * n];
        for i in 0..n {
            dist[i * n + i] = 0.0;
        }
        for edge in graph.edges() {
            let slot = &mut dist[edge.from * n + edge.to];
            if edge.weight < *slot {
                *slot = edge.weight;
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i * n + k];
                if d_ik.is_infinite() {
                    continue;
                }
                for j in 0..n {
                    let through = d_ik + dist[k * n + j];
                    if through < dist[i * n + j] {
                        dist[i * n + j] = through;
                    }
                }
            }
        }

        let data: Vec<i64> = dist
            .iter()
            .map(|&d| {
                if d.is_finite() {
                    (d.round() as i64).min(UNREACHABLE - 1)
                } else {
                    UNREACHABLE
                }
            })
            .collect();
        let dm = Self { data, size: n };
        debug!(
            stops = n,
            edges = graph.num_edges(),
            unreachable_pairs = dm.unreachable_pairs(),
            "distance matrix computed"
        );
        dm
    }

    /// Creates a matrix from explicit rows.
    ///
    /// Rows must form a square matrix of non-negative entries. Entries at or
    /// above [`UNREACHABLE`] are normalized to it.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(RoutingError::MatrixNotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &v) in row.iter().enumerate() {
                if v < 0 {
                    return Err(RoutingError::NegativeCost { from: i, to: j });
                }
                data.push(v.min(UNREACHABLE));
            }
        }
        Ok(Self { data, size: n })
    }

    /// Returns the travel time from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if a path from `from` to `to` exists.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to) < UNREACHABLE
    }

    /// Sum of travel times over consecutive pairs of `path`.
    pub fn path_cost(&self, path: &[usize]) -> i64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Rows as nested vectors, for export.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        self.data.chunks(self.size.max(1)).map(<[i64]>::to_vec).collect()
    }

    fn unreachable_pairs(&self) -> usize {
        self.data.iter().filter(|&&v| v >= UNREACHABLE).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{GraphBuilder, Stop};

    fn graph(n: u32, edges: &[(u32, u32, f64)]) -> Graph {
        let mut b = GraphBuilder::new();
        for id in 0..n {
            b.add_stop(Stop::bare(id)).expect("unique");
        }
        for &(u, v, w) in edges {
            b.add_edge(u, v, w).expect("valid");
        }
        b.build()
    }

    #[test]
    fn test_diagonal_zero() {
        let dm = DistanceMatrix::from_graph(&graph(4, &[(0, 1, 3.0)]));
        for i in 0..4 {
            assert_eq!(dm.get(i, i), 0);
        }
    }

    #[test]
    fn test_shortest_path_beats_direct_edge() {
        let g = graph(3, &[(0, 2, 10.0), (0, 1, 2.0), (1, 2, 3.0)]);
        let dm = DistanceMatrix::from_graph(&g);
        assert_eq!(dm.get(0, 2), 5);
    }

    #[test]
    fn test_directed() {
        let dm = DistanceMatrix::from_graph(&graph(2, &[(0, 1, 3.0)]));
        assert_eq!(dm.get(0, 1), 3);
        assert_eq!(dm.get(1, 0), UNREACHABLE);
        assert!(dm.is_reachable(0, 1));
        assert!(!dm.is_reachable(1, 0));
    }

    #[test]
    fn test_rounding() {
        let g = graph(3, &[(0, 1, 1.4), (1, 2, 1.4), (0, 2, 2.6)]);
        let dm = DistanceMatrix::from_graph(&g);
        assert_eq!(dm.get(0, 1), 1);
        // Rounding happens after the search: 2.6 beats 1.4 + 1.4 = 2.8
        // even though both legs round to 1.
        assert_eq!(dm.get(0, 2), 3);
    }

    #[test]
    fn test_disconnected() {
        let dm = DistanceMatrix::from_graph(&graph(3, &[(0, 1, 1.0), (1, 0, 1.0)]));
        assert_eq!(dm.get(0, 2), UNREACHABLE);
        assert_eq!(dm.get(2, 1), UNREACHABLE);
        assert_eq!(dm.unreachable_pairs(), 4);
    }

    #[test]
    fn test_idempotent() {
        let g = graph(4, &[(0, 1, 2.0), (1, 2, 2.0), (2, 3, 2.0), (3, 0, 2.0)]);
        assert_eq!(DistanceMatrix::from_graph(&g), DistanceMatrix::from_graph(&g));
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 5], vec![7, 0]]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 7);
        assert_eq!(dm.to_rows(), vec![vec![0, 5], vec![7, 0]]);
    }

    #[test]
    fn test_from_rows_invalid() {
        assert!(matches!(
            DistanceMatrix::from_rows(&[vec![0, 1], vec![0]]),
            Err(RoutingError::MatrixNotSquare { row: 1, .. })
        ));
        assert!(matches!(
            DistanceMatrix::from_rows(&[vec![0, -1], vec![0, 0]]),
            Err(RoutingError::NegativeCost { from: 0, to: 1 })
        ));
    }

    #[test]
    fn test_path_cost() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 2, 9], vec![2, 0, 3], vec![9, 3, 0]])
            .expect("valid");
        assert_eq!(dm.path_cost(&[0, 1, 2, 0]), 14);
        assert_eq!(dm.path_cost(&[0, 0]), 0);
        assert_eq!(dm.path_cost(&[0]), 0);
    }
}
