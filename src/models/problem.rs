//! Routing problem definition.

use crate::distance::{DistanceMatrix, UNREACHABLE};
use crate::error::{Result, RoutingError};

/// An immutable single-depot, homogeneous-fleet routing instance.
///
/// Every vehicle starts and ends at the depot. Capacity limits the number of
/// nodes a route visits, counting the depot once: a route
/// `[depot, a, b, c, depot]` has load 4. Capacity is not checked against the
/// instance size; a capacity that is too small just makes every strategy
/// infeasible.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::models::RoutingProblem;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 5, 9],
///     vec![5, 0, 4],
///     vec![9, 4, 0],
/// ]).unwrap();
/// let problem = RoutingProblem::new(dm, 2, 0, 3).unwrap();
///
/// assert_eq!(problem.num_stops(), 3);
/// assert_eq!(problem.customers().collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(problem.max_stops_per_route(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoutingProblem {
    matrix: DistanceMatrix,
    num_vehicles: usize,
    depot: usize,
    capacity: usize,
}

impl RoutingProblem {
    /// Creates a problem over `matrix`.
    ///
    /// Fails if the depot is not a stop index or the fleet is empty.
    pub fn new(
        matrix: DistanceMatrix,
        num_vehicles: usize,
        depot: usize,
        capacity: usize,
    ) -> Result<Self> {
        if depot >= matrix.size() {
            return Err(RoutingError::DepotOutOfRange {
                depot,
                num_stops: matrix.size(),
            });
        }
        if num_vehicles == 0 {
            return Err(RoutingError::NoVehicles);
        }
        Ok(Self {
            matrix,
            num_vehicles,
            depot,
            capacity,
        })
    }

    /// Number of stops, depot included.
    pub fn num_stops(&self) -> usize {
        self.matrix.size()
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Depot stop index.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Per-vehicle capacity in visited nodes (depot counted once).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The travel-time matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Travel time of the arc `from -> to`.
    pub fn cost(&self, from: usize, to: usize) -> i64 {
        self.matrix.get(from, to)
    }

    /// Returns `true` if the arc `from -> to` may appear in a route.
    pub fn is_arc_usable(&self, from: usize, to: usize) -> bool {
        self.matrix.get(from, to) < UNREACHABLE
    }

    /// All stop indices except the depot, ascending.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_stops()).filter(move |&i| i != self.depot)
    }

    /// Number of non-depot stops.
    pub fn num_customers(&self) -> usize {
        self.num_stops() - 1
    }

    /// Maximum number of non-depot stops one route may hold.
    pub fn max_stops_per_route(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    /// Load of a route holding `stops` non-depot stops.
    pub fn load_of(stops: usize) -> usize {
        stops + 1
    }

    /// Cost of `depot -> stops... -> depot`.
    pub fn route_cost(&self, stops: &[usize]) -> i64 {
        let mut prev = self.depot;
        let mut cost = 0;
        for &s in stops {
            cost += self.cost(prev, s);
            prev = s;
        }
        cost + self.cost(prev, self.depot)
    }

    /// Returns `true` if every arc of `depot -> stops... -> depot` is usable.
    pub fn is_route_reachable(&self, stops: &[usize]) -> bool {
        let mut prev = self.depot;
        for &s in stops {
            if !self.is_arc_usable(prev, s) {
                return false;
            }
            prev = s;
        }
        self.is_arc_usable(prev, self.depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0, 5, 9, UNREACHABLE],
            vec![5, 0, 4, 1],
            vec![9, 4, 0, 2],
            vec![UNREACHABLE, 1, 2, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_new() {
        let p = RoutingProblem::new(matrix(), 2, 1, 3).expect("valid");
        assert_eq!(p.num_stops(), 4);
        assert_eq!(p.num_vehicles(), 2);
        assert_eq!(p.depot(), 1);
        assert_eq!(p.capacity(), 3);
        assert_eq!(p.customers().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(p.num_customers(), 3);
    }

    #[test]
    fn test_depot_out_of_range() {
        assert_eq!(
            RoutingProblem::new(matrix(), 1, 4, 3).err(),
            Some(RoutingError::DepotOutOfRange {
                depot: 4,
                num_stops: 4
            })
        );
    }

    #[test]
    fn test_no_vehicles() {
        assert_eq!(
            RoutingProblem::new(matrix(), 0, 0, 3).err(),
            Some(RoutingError::NoVehicles)
        );
    }

    #[test]
    fn test_capacity_counts_depot_once() {
        let p = RoutingProblem::new(matrix(), 1, 0, 4).expect("valid");
        assert_eq!(p.max_stops_per_route(), 3);
        assert_eq!(RoutingProblem::load_of(3), 4);
        let p0 = RoutingProblem::new(matrix(), 1, 0, 0).expect("valid");
        assert_eq!(p0.max_stops_per_route(), 0);
    }

    #[test]
    fn test_route_cost_and_reachability() {
        let p = RoutingProblem::new(matrix(), 1, 0, 4).expect("valid");
        assert_eq!(p.route_cost(&[]), 0);
        assert_eq!(p.route_cost(&[1, 2]), 5 + 4 + 9);
        assert!(p.is_route_reachable(&[1, 2]));
        assert!(!p.is_route_reachable(&[1, 3]));
        assert!(!p.is_arc_usable(0, 3));
    }
}
