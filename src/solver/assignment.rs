//! Successor-link search state and solution extraction.

use crate::error::{Result, RoutingError};
use crate::models::{FirstSolutionStrategy, Route, RoutingProblem, Solution};

/// Successor links over stops plus a start and an end marker per vehicle.
///
/// Indices `0..num_stops` are stops, `num_stops + v` is the start marker of
/// vehicle `v` and `num_stops + num_vehicles + v` its end marker. Both
/// markers stand for the depot.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::models::{FirstSolutionStrategy, RoutingProblem};
/// use depot_routing::solver::Assignment;
///
/// let dm = DistanceMatrix::from_rows(&[vec![0, 2, 3], vec![2, 0, 1], vec![3, 1, 0]]).unwrap();
/// let problem = RoutingProblem::new(dm, 2, 0, 3).unwrap();
///
/// let assignment = Assignment::from_routes(&problem, &[vec![1, 2], vec![]]);
/// let solution = assignment.extract(&problem, FirstSolutionStrategy::Savings).unwrap();
/// assert_eq!(solution.routes()[0].nodes(), &[0, 1, 2, 0]);
/// assert_eq!(solution.routes()[1].nodes(), &[0, 0]);
/// assert_eq!(solution.total_cost(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    next: Vec<Option<usize>>,
    num_stops: usize,
    num_vehicles: usize,
}

impl Assignment {
    /// Creates an assignment with no links.
    pub fn new(num_stops: usize, num_vehicles: usize) -> Self {
        Self {
            next: vec![None; num_stops + 2 * num_vehicles],
            num_stops,
            num_vehicles,
        }
    }

    /// Links each vehicle's start marker through its stops to its end marker.
    ///
    /// Vehicles beyond `plan.len()` go straight from start to end.
    pub fn from_routes(problem: &RoutingProblem, plan: &[Vec<usize>]) -> Self {
        let mut assignment = Self::new(problem.num_stops(), problem.num_vehicles());
        for v in 0..problem.num_vehicles() {
            let mut prev = assignment.start(v);
            for &s in plan.get(v).map(Vec::as_slice).unwrap_or_default() {
                assignment.set_next(prev, s);
                prev = s;
            }
            assignment.set_next(prev, assignment.end(v));
        }
        assignment
    }

    /// Start marker index of vehicle `v`.
    pub fn start(&self, vehicle: usize) -> usize {
        self.num_stops + vehicle
    }

    /// End marker index of vehicle `v`.
    pub fn end(&self, vehicle: usize) -> usize {
        self.num_stops + self.num_vehicles + vehicle
    }

    /// Successor of `index`, if linked.
    pub fn next(&self, index: usize) -> Option<usize> {
        self.next.get(index).copied().flatten()
    }

    /// Links `from -> to`. Out-of-range indices are ignored.
    pub fn set_next(&mut self, from: usize, to: usize) {
        if let Some(slot) = self.next.get_mut(from) {
            *slot = Some(to);
        }
    }

    /// Walks every vehicle from its start to its end marker and builds the
    /// portable solution.
    ///
    /// Fails with [`RoutingError::CorruptAssignment`] on a missing link, a
    /// jump into another vehicle's markers, a stop visited twice or an
    /// assignment sized for another problem.
    pub fn extract(
        &self,
        problem: &RoutingProblem,
        strategy: FirstSolutionStrategy,
    ) -> Result<Solution> {
        if self.num_stops != problem.num_stops() || self.num_vehicles != problem.num_vehicles() {
            return Err(RoutingError::CorruptAssignment {
                vehicle: 0,
                reason: "assignment size does not match the problem",
            });
        }
        let depot = problem.depot();
        let mut visited = vec![false; self.num_stops];
        let mut routes = Vec::with_capacity(self.num_vehicles);

        for v in 0..self.num_vehicles {
            let corrupt =
                |reason: &'static str| RoutingError::CorruptAssignment { vehicle: v, reason };
            let mut nodes = vec![depot];
            let mut node = self.start(v);
            loop {
                let next = self.next(node).ok_or_else(|| corrupt("missing successor"))?;
                if next == self.end(v) {
                    break;
                }
                if next >= self.num_stops {
                    return Err(corrupt("successor is a marker of another vehicle"));
                }
                if next == depot {
                    return Err(corrupt("depot inside a route"));
                }
                if visited[next] {
                    return Err(corrupt("stop visited twice"));
                }
                visited[next] = true;
                nodes.push(next);
                node = next;
            }
            nodes.push(depot);
            routes.push(Route::new(v, nodes, problem.matrix()));
        }
        Ok(Solution::new(strategy, routes))
    }
}
