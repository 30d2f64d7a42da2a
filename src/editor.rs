//! Manual route editing.

use crate::error::{Result, RoutingError};
use crate::models::{Route, RoutingProblem, Solution};

/// Routes built stop by stop by hand, one per vehicle.
///
/// Every stop appears on at most one route and the depot is implicit at
/// both ends. Costs use the same matrix as the solver.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::editor::ManualPlan;
/// use depot_routing::models::RoutingProblem;
/// use depot_routing::RoutingError;
///
/// let dm = DistanceMatrix::from_rows(&[vec![0, 2, 3], vec![2, 0, 1], vec![3, 1, 0]]).unwrap();
/// let problem = RoutingProblem::new(dm, 2, 0, 3).unwrap();
///
/// let mut plan = ManualPlan::new(&problem);
/// plan.append_stop(0, 2).unwrap();
/// plan.append_stop(0, 1).unwrap();
/// assert_eq!(plan.route_cost(0), Some(6));
/// assert_eq!(
///     plan.append_stop(1, 2),
///     Err(RoutingError::StopAlreadyPlaced { stop: 2, route: 0 })
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ManualPlan<'a> {
    problem: &'a RoutingProblem,
    routes: Vec<Vec<usize>>,
    placed: Vec<Option<usize>>,
}

impl<'a> ManualPlan<'a> {
    /// One empty route per vehicle.
    pub fn new(problem: &'a RoutingProblem) -> Self {
        Self {
            problem,
            routes: vec![Vec::new(); problem.num_vehicles()],
            placed: vec![None; problem.num_stops()],
        }
    }

    /// Starts from the routes of an existing solution.
    pub fn from_solution(problem: &'a RoutingProblem, solution: &Solution) -> Result<Self> {
        let mut plan = Self::new(problem);
        for (k, route) in solution.routes().iter().enumerate() {
            for &stop in route.stops() {
                plan.append_stop(k, stop)?;
            }
        }
        Ok(plan)
    }

    /// Appends `stop` to the end of route `route`, before the return to the
    /// depot.
    pub fn append_stop(&mut self, route: usize, stop: usize) -> Result<()> {
        if route >= self.routes.len() {
            return Err(RoutingError::RouteOutOfRange {
                route,
                num_routes: self.routes.len(),
            });
        }
        if stop >= self.problem.num_stops() {
            return Err(RoutingError::StopOutOfRange { stop });
        }
        if stop == self.problem.depot() {
            return Err(RoutingError::DepotNotAllowed);
        }
        if let Some(on) = self.placed[stop] {
            return Err(RoutingError::StopAlreadyPlaced { stop, route: on });
        }
        self.placed[stop] = Some(route);
        self.routes[route].push(stop);
        Ok(())
    }

    /// Stops of each route, depot excluded.
    pub fn routes(&self) -> &[Vec<usize>] {
        &self.routes
    }

    /// Stops not yet on any route, ascending.
    pub fn unplaced(&self) -> Vec<usize> {
        self.problem
            .customers()
            .filter(|&s| self.placed[s].is_none())
            .collect()
    }

    /// Cost of route `k` closed at the depot.
    pub fn route_cost(&self, k: usize) -> Option<i64> {
        self.routes.get(k).map(|r| self.problem.route_cost(r))
    }

    /// Sum of all route costs.
    pub fn total_cost(&self) -> i64 {
        self.routes.iter().map(|r| self.problem.route_cost(r)).sum()
    }

    /// Closed routes, one per vehicle.
    pub fn into_routes(self) -> Vec<Route> {
        let depot = self.problem.depot();
        let matrix = self.problem.matrix();
        self.routes
            .iter()
            .enumerate()
            .map(|(v, stops)| Route::closed(v, depot, stops, matrix))
            .collect()
    }
}
