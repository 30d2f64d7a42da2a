//! Route type.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;

/// An ordered sequence of stop indices driven by one vehicle.
///
/// The first and last node are the depot. A vehicle with nothing to do has
/// the route `[depot, depot]`.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::models::Route;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 3, 4],
///     vec![3, 0, 5],
///     vec![4, 5, 0],
/// ]).unwrap();
/// let route = Route::new(0, vec![0, 1, 2, 0], &dm);
/// assert_eq!(route.cost(), 12);
/// assert_eq!(route.stops(), &[1, 2]);
/// assert_eq!(route.load(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    vehicle: usize,
    nodes: Vec<usize>,
    cost: i64,
}

impl Route {
    /// Creates a route from its full node sequence, computing its cost.
    pub fn new(vehicle: usize, nodes: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let cost = matrix.path_cost(&nodes);
        Self {
            vehicle,
            nodes,
            cost,
        }
    }

    /// Creates a route `depot -> stops... -> depot`.
    pub fn closed(vehicle: usize, depot: usize, stops: &[usize], matrix: &DistanceMatrix) -> Self {
        let mut nodes = Vec::with_capacity(stops.len() + 2);
        nodes.push(depot);
        nodes.extend_from_slice(stops);
        nodes.push(depot);
        Self::new(vehicle, nodes, matrix)
    }

    /// Vehicle that drives this route.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Full node sequence, depot at both ends.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Non-depot stops in visit order.
    pub fn stops(&self) -> &[usize] {
        match self.nodes.len() {
            0..=2 => &[],
            n => &self.nodes[1..n - 1],
        }
    }

    /// Number of non-depot stops.
    pub fn num_stops(&self) -> usize {
        self.stops().len()
    }

    /// Returns `true` if the vehicle visits no stop.
    pub fn is_empty(&self) -> bool {
        self.stops().is_empty()
    }

    /// Nodes counted against capacity (depot once).
    pub fn load(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Sum of arc travel times along the route.
    pub fn cost(&self) -> i64 {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dm() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[vec![0, 3, 4], vec![3, 0, 5], vec![4, 5, 0]])
            .expect("valid")
    }

    #[test]
    fn test_route_empty() {
        let r = Route::closed(1, 0, &[], &dm());
        assert_eq!(r.nodes(), &[0, 0]);
        assert!(r.is_empty());
        assert_eq!(r.cost(), 0);
        assert_eq!(r.load(), 1);
        assert_eq!(r.vehicle(), 1);
    }

    #[test]
    fn test_route_closed() {
        let r = Route::closed(0, 0, &[2, 1], &dm());
        assert_eq!(r.nodes(), &[0, 2, 1, 0]);
        assert_eq!(r.stops(), &[2, 1]);
        assert_eq!(r.num_stops(), 2);
        assert_eq!(r.cost(), 4 + 5 + 3);
    }

    #[test]
    fn test_route_non_zero_depot() {
        let r = Route::closed(0, 2, &[0], &dm());
        assert_eq!(r.nodes(), &[2, 0, 2]);
        assert_eq!(r.cost(), 8);
        assert_eq!(r.load(), 2);
    }
}
