//! Multi-strategy runner.

use rayon::prelude::*;
use tracing::info;

use crate::config::SolverConfig;
use crate::models::{FirstSolutionStrategy, RoutingProblem, Solution};

use super::solve;

/// Solves with every catalog strategy; infeasible ones are skipped.
///
/// Results keep catalog order whether or not the run is parallel.
pub fn run_all(problem: &RoutingProblem, config: &SolverConfig) -> Vec<Solution> {
    run_strategies(problem, &FirstSolutionStrategy::CATALOG, config)
}

/// Solves with each of `strategies`, in order, skipping infeasible ones.
pub fn run_strategies(
    problem: &RoutingProblem,
    strategies: &[FirstSolutionStrategy],
    config: &SolverConfig,
) -> Vec<Solution> {
    let attempt = |&strategy: &FirstSolutionStrategy| {
        let solution = solve(problem, strategy, config);
        if solution.is_none() {
            info!(%strategy, "no feasible plan, strategy skipped");
        }
        solution
    };
    let results: Vec<Option<Solution>> = if config.parallel {
        strategies.par_iter().map(attempt).collect()
    } else {
        strategies.iter().map(attempt).collect()
    };
    let solutions: Vec<Solution> = results.into_iter().flatten().collect();

    info!(
        attempted = strategies.len(),
        solved = solutions.len(),
        best_cost = best(&solutions).map(Solution::total_cost),
        "strategy run finished"
    );
    solutions
}

/// The cheapest solution; the earliest wins ties.
pub fn best(solutions: &[Solution]) -> Option<&Solution> {
    solutions
        .iter()
        .reduce(|best, s| if s.total_cost() < best.total_cost() { s } else { best })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::evaluation::SolutionChecker;
    use crate::models::Route;
    use crate::test_support::{grid_problem, isolated_problem, ring_problem};

    fn config() -> SolverConfig {
        SolverConfig::default()
            .with_time_budget(Duration::from_secs(10))
            .with_max_rounds(15)
    }

    #[test]
    fn test_run_all_catalog_order() {
        let p = ring_problem(2, 3);
        let solutions = run_all(&p, &config());
        let strategies: Vec<_> = solutions.iter().map(Solution::strategy).collect();
        assert_eq!(strategies, FirstSolutionStrategy::CATALOG.to_vec());
        let checker = SolutionChecker::new(&p);
        assert!(solutions.iter().all(|s| checker.is_feasible(s)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let p = grid_problem(3, 4);
        let parallel = run_all(&p, &config());
        let sequential = run_all(&p, &config().with_parallel(false));
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_isolated_stop_yields_nothing() {
        let p = isolated_problem(2, 5);
        assert!(run_all(&p, &config()).is_empty());
    }

    #[test]
    fn test_run_subset() {
        let p = ring_problem(1, 4);
        let subset = [
            FirstSolutionStrategy::Savings,
            FirstSolutionStrategy::PathCheapestArc,
        ];
        let solutions = run_strategies(&p, &subset, &config());
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].strategy(), FirstSolutionStrategy::Savings);
        assert_eq!(solutions[1].strategy(), FirstSolutionStrategy::PathCheapestArc);
    }

    #[test]
    fn test_best_first_wins_ties() {
        let dm = DistanceMatrix::from_rows(&[vec![0, 2], vec![3, 0]]).expect("valid");
        let served = |strategy| Solution::new(strategy, vec![Route::closed(0, 0, &[1], &dm)]);
        let idle = Solution::new(
            FirstSolutionStrategy::Automatic,
            vec![Route::closed(0, 0, &[], &dm)],
        );
        let solutions = vec![
            served(FirstSolutionStrategy::Savings),
            idle.clone(),
            Solution::new(FirstSolutionStrategy::Christofides, idle.routes().to_vec()),
        ];
        assert_eq!(
            best(&solutions).map(Solution::strategy),
            Some(FirstSolutionStrategy::Automatic)
        );
        assert!(best(&[]).is_none());
    }
}
