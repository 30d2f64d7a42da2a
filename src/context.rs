//! Run context: one routing session over a road network.

use tracing::info;

use crate::config::SolverConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::models::{FirstSolutionStrategy, RoutingProblem, Solution};
use crate::network::{Graph, NetworkInput};
use crate::solver;

/// Owns the network, its distance matrix, the problem built over it and the
/// solutions of the last run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_routing::{RunContext, SolverConfig};
/// use depot_routing::network::{GraphBuilder, Stop};
///
/// let mut b = GraphBuilder::new();
/// for id in [10, 20, 30] {
///     b.add_stop(Stop::bare(id)).unwrap();
/// }
/// for (u, v) in [(10, 20), (20, 30), (30, 10), (20, 10), (30, 20), (10, 30)] {
///     b.add_edge(u, v, 4.0).unwrap();
/// }
/// let config = SolverConfig::default().with_time_budget(Duration::from_millis(200));
/// let mut ctx = RunContext::new(b.build(), 10, 1, 3, config).unwrap();
///
/// let best = ctx.solve_all().unwrap().total_cost();
/// assert_eq!(best, 12);
/// assert_eq!(ctx.solutions().len(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct RunContext {
    graph: Graph,
    problem: RoutingProblem,
    config: SolverConfig,
    solutions: Vec<Solution>,
}

impl RunContext {
    /// Computes the distance matrix of `graph` and defines the problem.
    ///
    /// `depot_id` is a stop identifier, not an index.
    pub fn new(
        graph: Graph,
        depot_id: u32,
        num_vehicles: usize,
        capacity: usize,
        config: SolverConfig,
    ) -> Result<Self> {
        let depot = graph
            .index_of(depot_id)
            .ok_or(RoutingError::UnknownDepot { id: depot_id })?;
        let matrix = DistanceMatrix::from_graph(&graph);
        let problem = RoutingProblem::new(matrix, num_vehicles, depot, capacity)?;
        Ok(Self {
            graph,
            problem,
            config,
            solutions: Vec::new(),
        })
    }

    /// Like [`Self::new`], with capacity from [`Self::default_capacity`].
    pub fn with_default_capacity(
        graph: Graph,
        depot_id: u32,
        num_vehicles: usize,
        config: SolverConfig,
    ) -> Result<Self> {
        let capacity = Self::default_capacity(graph.num_stops(), num_vehicles);
        Self::new(graph, depot_id, num_vehicles, capacity, config)
    }

    /// Validates `input` into a graph and builds the context over it.
    pub fn from_input(
        input: NetworkInput,
        depot_id: u32,
        num_vehicles: usize,
        config: SolverConfig,
    ) -> Result<Self> {
        Self::with_default_capacity(input.into_graph()?, depot_id, num_vehicles, config)
    }

    /// Per-vehicle capacity leaving 20% slack over an even split:
    /// `ceil(num_stops * 1.2 / num_vehicles)`.
    ///
    /// ```
    /// use depot_routing::RunContext;
    ///
    /// assert_eq!(RunContext::default_capacity(10, 3), 4);
    /// assert_eq!(RunContext::default_capacity(5, 1), 6);
    /// assert_eq!(RunContext::default_capacity(5, 0), 0);
    /// ```
    pub fn default_capacity(num_stops: usize, num_vehicles: usize) -> usize {
        if num_vehicles == 0 {
            return 0;
        }
        // 1.2 = 6 / 5, kept in integers.
        (num_stops * 6).div_ceil(num_vehicles * 5)
    }

    /// The road network this context was built from.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The routing instance solved by this context.
    pub fn problem(&self) -> &RoutingProblem {
        &self.problem
    }

    /// Travel times between every pair of stops.
    pub fn matrix(&self) -> &DistanceMatrix {
        self.problem.matrix()
    }

    /// Solver parameters used by every run.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solutions of the last run, in catalog order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Runs every catalog strategy and returns the cheapest solution.
    ///
    /// Fails with [`RoutingError::NoFeasiblePlan`] if no strategy succeeds.
    pub fn solve_all(&mut self) -> Result<&Solution> {
        self.solve_with(&FirstSolutionStrategy::CATALOG)
    }

    /// Runs the given strategies and returns the cheapest solution.
    pub fn solve_with(&mut self, strategies: &[FirstSolutionStrategy]) -> Result<&Solution> {
        self.solutions = solver::run_strategies(&self.problem, strategies, &self.config);
        info!(
            stops = self.problem.num_stops(),
            vehicles = self.problem.num_vehicles(),
            solutions = self.solutions.len(),
            "run complete"
        );
        solver::best(&self.solutions).ok_or(RoutingError::NoFeasiblePlan)
    }

    /// Presentation labels of the current solutions, e.g.
    /// `"Solution 3 - Savings"`.
    pub fn labels(&self) -> Vec<String> {
        let names = FirstSolutionStrategy::display_names();
        self.solutions
            .iter()
            .map(|s| names[s.strategy().catalog_index()].clone())
            .collect()
    }

    /// Stop identifiers along a route, depot at both ends.
    pub fn route_ids(&self, solution: &Solution, vehicle: usize) -> Option<Vec<u32>> {
        solution
            .routes()
            .get(vehicle)?
            .nodes()
            .iter()
            .map(|&i| self.graph.id_of(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_support::{graph, ring_graph};

    fn config() -> SolverConfig {
        SolverConfig::default()
            .with_time_budget(Duration::from_secs(5))
            .with_max_rounds(10)
    }

    #[test]
    fn test_unknown_depot() {
        assert_eq!(
            RunContext::new(ring_graph(), 9, 1, 4, config()).err(),
            Some(RoutingError::UnknownDepot { id: 9 })
        );
    }

    #[test]
    fn test_no_vehicles() {
        assert_eq!(
            RunContext::new(ring_graph(), 0, 0, 4, config()).err(),
            Some(RoutingError::NoVehicles)
        );
    }

    #[test]
    fn test_solve_ring() {
        let mut ctx = RunContext::new(ring_graph(), 0, 1, 4, config()).expect("valid");
        let best = ctx.solve_all().expect("feasible").clone();
        assert_eq!(best.total_cost(), 20);
        assert_eq!(ctx.solutions().len(), 12);
        let labels = ctx.labels();
        assert_eq!(labels[0], "Solution 1 - Path Cheapest Arc");
        assert_eq!(labels[11], "Solution 12 - Automatic");
        assert_eq!(ctx.route_ids(&best, 0).map(|ids| ids.len()), Some(5));
        assert_eq!(ctx.route_ids(&best, 1), None);
    }

    #[test]
    fn test_no_feasible_plan() {
        // Stop 2 has no edges at all.
        let g = graph(3, &[(0, 1, 1.0), (1, 0, 1.0)]);
        let mut ctx = RunContext::new(g, 0, 2, 3, config()).expect("valid");
        assert_eq!(ctx.solve_all().err(), Some(RoutingError::NoFeasiblePlan));
        assert!(ctx.solutions().is_empty());
        assert!(ctx.labels().is_empty());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(RunContext::default_capacity(4, 1), 5);
        assert_eq!(RunContext::default_capacity(4, 2), 3);
        assert_eq!(RunContext::default_capacity(1, 4), 1);
        let ctx = RunContext::with_default_capacity(ring_graph(), 0, 2, config()).expect("valid");
        assert_eq!(ctx.problem().capacity(), 3);
    }

    #[test]
    fn test_from_input_ids() {
        let json = r#"{
            "stops": [
                {"id": 7, "label": "Depot", "latitude": 0.0, "longitude": 0.0},
                {"id": 8, "label": "A", "latitude": 0.0, "longitude": 1.0}
            ],
            "connections": [
                {"from": 7, "to": 8, "weight": 3.0},
                {"from": 8, "to": 7, "weight": 4.0}
            ]
        }"#;
        let input = NetworkInput::from_json(json).expect("valid json");
        let mut ctx = RunContext::from_input(input, 7, 1, config()).expect("valid");
        let best = ctx
            .solve_with(&[FirstSolutionStrategy::Savings])
            .expect("feasible")
            .clone();
        assert_eq!(best.total_cost(), 7);
        assert_eq!(ctx.route_ids(&best, 0), Some(vec![7, 8, 7]));
        assert_eq!(ctx.matrix().get(0, 1), 3);
    }
}
