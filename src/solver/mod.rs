//! Strategy-parameterized solver and multi-strategy runner.
//!
//! One solve is construction, then guided local search, then extraction
//! of the search state into a [`Solution`]. The runner repeats that for
//! several strategies and keeps the feasible results in catalog order.

mod assignment;
mod runner;

use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::constructive::construct;
use crate::local_search::guided_local_search;
use crate::models::{FirstSolutionStrategy, RoutingProblem, Solution};

pub use assignment::Assignment;
pub use runner::{best, run_all, run_strategies};

/// Solves `problem` starting from the given construction strategy.
///
/// Returns `None` when the strategy finds no feasible plan.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_routing::SolverConfig;
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::models::{FirstSolutionStrategy, RoutingProblem};
/// use depot_routing::solver::solve;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 5, 10, 5],
///     vec![5, 0, 5, 10],
///     vec![10, 5, 0, 5],
///     vec![5, 10, 5, 0],
/// ]).unwrap();
/// let problem = RoutingProblem::new(dm, 1, 0, 4).unwrap();
/// let config = SolverConfig::default().with_time_budget(Duration::from_secs(1));
///
/// let solution = solve(&problem, FirstSolutionStrategy::PathCheapestArc, &config).unwrap();
/// assert_eq!(solution.routes()[0].nodes(), &[0, 1, 2, 3, 0]);
/// assert_eq!(solution.total_cost(), 20);
/// ```
pub fn solve(
    problem: &RoutingProblem,
    strategy: FirstSolutionStrategy,
    config: &SolverConfig,
) -> Option<Solution> {
    let plan = construct(problem, strategy)?;
    let outcome = guided_local_search(problem, plan, config);
    debug!(
        %strategy,
        cost = outcome.cost,
        rounds = outcome.rounds,
        moves = outcome.moves,
        "strategy solved"
    );
    match Assignment::from_routes(problem, &outcome.plan).extract(problem, strategy) {
        Ok(solution) => Some(solution),
        Err(error) => {
            warn!(%strategy, %error, "discarding corrupt search state");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::SolutionChecker;
    use crate::test_support::{grid_problem, isolated_problem, ring_problem};

    fn config() -> SolverConfig {
        SolverConfig::default()
            .with_time_budget(Duration::from_secs(10))
            .with_max_rounds(20)
    }

    #[test]
    fn test_ring_single_vehicle() {
        let p = ring_problem(1, 4);
        let sol = solve(&p, FirstSolutionStrategy::PathCheapestArc, &config()).expect("feasible");
        assert_eq!(sol.routes()[0].nodes(), &[0, 1, 2, 3, 0]);
        assert_eq!(sol.total_cost(), 20);
        for strategy in FirstSolutionStrategy::CATALOG {
            let sol = solve(&p, strategy, &config()).expect("feasible");
            assert_eq!(sol.total_cost(), 20, "{strategy}");
            assert_eq!(sol.strategy(), strategy);
        }
    }

    #[test]
    fn test_ring_two_vehicles() {
        let p = ring_problem(2, 3);
        for strategy in FirstSolutionStrategy::CATALOG {
            let sol = solve(&p, strategy, &config()).expect("feasible");
            assert!(SolutionChecker::new(&p).is_feasible(&sol), "{strategy}");
            assert!(sol.total_cost() <= 30, "{strategy}");
            assert_eq!(sol.num_served(), 3);
        }
    }

    #[test]
    fn test_isolated_stop() {
        let p = isolated_problem(2, 5);
        for strategy in FirstSolutionStrategy::CATALOG {
            assert!(solve(&p, strategy, &config()).is_none(), "{strategy}");
        }
    }

    #[test]
    fn test_no_stops_besides_depot() {
        let dm = DistanceMatrix::from_rows(&[vec![0]]).expect("valid");
        let p = RoutingProblem::new(dm, 3, 0, 2).expect("valid");
        let sol = solve(&p, FirstSolutionStrategy::Savings, &config()).expect("feasible");
        assert_eq!(sol.num_routes(), 3);
        assert!(sol.routes().iter().all(|r| r.nodes() == [0, 0]));
        assert_eq!(sol.total_cost(), 0);
    }

    #[test]
    fn test_grid_solutions_feasible() {
        let p = grid_problem(3, 4);
        let checker = SolutionChecker::new(&p);
        for strategy in FirstSolutionStrategy::CATALOG {
            let sol = solve(&p, strategy, &config()).expect("feasible");
            assert!(checker.check(&sol).is_empty(), "{strategy}");
        }
    }
}
