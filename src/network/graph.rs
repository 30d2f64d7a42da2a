//! Sparse directed road graph.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::debug;

use super::Stop;
use crate::error::{Result, RoutingError};

/// A directed, weighted edge between two stop indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source stop index.
    pub from: usize,
    /// Target stop index.
    pub to: usize,
    /// Travel time, strictly positive.
    pub weight: f64,
}

/// Sparse directed graph over stops.
///
/// Stops are stored contiguously and addressed by index `0..N`; edges are
/// keyed by `(from, to)` index pairs. Only explicitly known road segments are
/// present. A `Graph` is produced by [`GraphBuilder`] and is immutable.
///
/// # Examples
///
/// ```
/// use depot_routing::network::{GraphBuilder, Stop};
///
/// let mut builder = GraphBuilder::new();
/// builder.add_stop(Stop::bare(10)).unwrap();
/// builder.add_stop(Stop::bare(20)).unwrap();
/// builder.add_edge(10, 20, 7.0).unwrap();
/// let graph = builder.build();
///
/// assert_eq!(graph.num_stops(), 2);
/// assert_eq!(graph.index_of(20), Some(1));
/// assert_eq!(graph.weight(0, 1), Some(7.0));
/// assert_eq!(graph.weight(1, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    stops: Vec<Stop>,
    index: HashMap<u32, usize>,
    edges: BTreeMap<(usize, usize), f64>,
}

impl Graph {
    /// Number of stops (nodes).
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Number of directed edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// All stops in index order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The stop at `index`.
    pub fn stop(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// Index of the stop with identifier `id`.
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Identifier of the stop at `index`.
    pub fn id_of(&self, index: usize) -> Option<u32> {
        self.stops.get(index).map(Stop::id)
    }

    /// Weight of the direct edge `from -> to`, if one exists.
    pub fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.edges.get(&(from, to)).copied()
    }

    /// Iterates over all edges in `(from, to)` order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().map(|(&(from, to), &weight)| Edge { from, to, weight })
    }

    /// Outgoing edges of `from`.
    pub fn successors(&self, from: usize) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .range((from, 0)..=(from, usize::MAX))
            .map(|(&(from, to), &weight)| Edge { from, to, weight })
    }
}

/// Incremental builder for [`Graph`].
///
/// Rejects malformed data instead of coercing it: duplicate stop ids, unknown
/// endpoints, non-finite or negative weights, and repeated ordered pairs are
/// all errors. Zero weights and self-loops carry no routing information and
/// are skipped, but still count as a definition of their pair.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    stops: Vec<Stop>,
    index: HashMap<u32, usize>,
    edges: BTreeMap<(usize, usize), f64>,
    seen: HashSet<(usize, usize)>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop, returning its index.
    pub fn add_stop(&mut self, stop: Stop) -> Result<usize> {
        if self.index.contains_key(&stop.id()) {
            return Err(RoutingError::DuplicateStop { id: stop.id() });
        }
        if !stop.has_finite_position() {
            return Err(RoutingError::InvalidCoordinate { id: stop.id() });
        }
        let idx = self.stops.len();
        self.index.insert(stop.id(), idx);
        self.stops.push(stop);
        Ok(idx)
    }

    /// Adds the directed edge `from -> to` between stop identifiers.
    ///
    /// Returns `Ok(false)` when the edge was skipped (zero weight or
    /// self-loop) and `Ok(true)` when it was recorded.
    pub fn add_edge(&mut self, from: u32, to: u32, weight: f64) -> Result<bool> {
        let u = self.resolve(from)?;
        let v = self.resolve(to)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(RoutingError::InvalidWeight { from, to, weight });
        }
        if !self.seen.insert((u, v)) {
            return Err(RoutingError::DuplicateEdge { from, to });
        }
        if u == v || weight == 0.0 {
            return Ok(false);
        }
        self.edges.insert((u, v), weight);
        Ok(true)
    }

    /// Finishes the graph.
    pub fn build(self) -> Graph {
        debug!(
            stops = self.stops.len(),
            edges = self.edges.len(),
            "graph built"
        );
        Graph {
            stops: self.stops,
            index: self.index,
            edges: self.edges,
        }
    }

    fn resolve(&self, id: u32) -> Result<usize> {
        self.index
            .get(&id)
            .copied()
            .ok_or(RoutingError::UnknownStop { id })
    }
}
