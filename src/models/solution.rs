//! Solution type.

use serde::{Deserialize, Serialize};

use super::{FirstSolutionStrategy, Route};

/// A complete route plan produced by one strategy.
///
/// Holds exactly one [`Route`] per vehicle, in vehicle order. Immutable once
/// built; `total_cost` is the sum of the route costs.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::models::{FirstSolutionStrategy, Route, Solution};
///
/// let dm = DistanceMatrix::from_rows(&[vec![0, 2], vec![3, 0]]).unwrap();
/// let sol = Solution::new(
///     FirstSolutionStrategy::Savings,
///     vec![Route::closed(0, 0, &[1], &dm), Route::closed(1, 0, &[], &dm)],
/// );
/// assert_eq!(sol.total_cost(), 5);
/// assert_eq!(sol.route_costs(), vec![5, 0]);
/// assert_eq!(sol.num_served(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    strategy: FirstSolutionStrategy,
    routes: Vec<Route>,
    total_cost: i64,
}

impl Solution {
    /// Creates a solution from per-vehicle routes.
    pub fn new(strategy: FirstSolutionStrategy, routes: Vec<Route>) -> Self {
        let total_cost = routes.iter().map(Route::cost).sum();
        Self {
            strategy,
            routes,
            total_cost,
        }
    }

    /// Strategy that produced this solution.
    pub fn strategy(&self) -> FirstSolutionStrategy {
        self.strategy
    }

    /// Routes, one per vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (equals the fleet size).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Cost of each route, parallel to [`Self::routes`].
    pub fn route_costs(&self) -> Vec<i64> {
        self.routes.iter().map(Route::cost).collect()
    }

    /// Sum of all route costs.
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    /// Total number of non-depot stops served.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::num_stops).sum()
    }

    /// Stop sequences without the depot, one per vehicle.
    pub fn stop_sequences(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(|r| r.stops().to_vec()).collect()
    }
}
