//! Construction heuristics for building initial route plans.
//!
//! Every heuristic returns one stop sequence per vehicle (depot excluded) or
//! `None` when some stop cannot be placed within capacity on usable arcs.
//!
//! - [`path`]: cheapest-arc family and the input-order baseline, O(n²)
//! - [`clarke_wright`]: directed Clarke-Wright savings (1964), O(n² log n)
//! - [`christofides`]: spanning-tree tour split over the fleet, O(n²)
//! - [`insertion`]: cheapest insertion variants, O(n³)

mod christofides;
mod clarke_wright;
mod insertion;
mod path;

use tracing::debug;

use crate::models::{FirstSolutionStrategy, RoutingProblem};

/// Stop sequences per vehicle, depot excluded.
pub type Plan = Vec<Vec<usize>>;

/// Builds a first plan with the given strategy.
///
/// The result respects capacity and uses only reachable arcs. Returns `None`
/// if the strategy cannot place every stop.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::models::{FirstSolutionStrategy, RoutingProblem};
/// use depot_routing::constructive::construct;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 1, 2, 3],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let problem = RoutingProblem::new(dm, 2, 0, 3).unwrap();
///
/// let plan = construct(&problem, FirstSolutionStrategy::PathCheapestArc).unwrap();
/// assert_eq!(plan, vec![vec![1, 2], vec![3]]);
/// ```
pub fn construct(problem: &RoutingProblem, strategy: FirstSolutionStrategy) -> Option<Plan> {
    if problem.capacity() < RoutingProblem::load_of(0) {
        debug!(%strategy, "capacity cannot hold an empty route");
        return None;
    }
    let plan = match strategy {
        FirstSolutionStrategy::PathCheapestArc => path::path_cheapest_arc(problem),
        FirstSolutionStrategy::PathMostConstrainedArc => path::path_most_constrained_arc(problem),
        FirstSolutionStrategy::Savings => clarke_wright::clarke_wright_savings(problem),
        FirstSolutionStrategy::Christofides => christofides::spanning_tree_tour(problem),
        FirstSolutionStrategy::AllUnperformed => insertion::all_unperformed(problem),
        FirstSolutionStrategy::BestInsertion => insertion::best_insertion_all(problem),
        FirstSolutionStrategy::ParallelCheapestInsertion => {
            insertion::parallel_cheapest_insertion(problem)
        }
        FirstSolutionStrategy::LocalCheapestInsertion => {
            insertion::local_cheapest_insertion(problem)
        }
        FirstSolutionStrategy::GlobalCheapestArc => path::global_cheapest_arc(problem),
        FirstSolutionStrategy::LocalCheapestArc => path::local_cheapest_arc(problem),
        FirstSolutionStrategy::FirstUnboundMinValue => path::first_unbound_min_value(problem),
        FirstSolutionStrategy::Automatic => automatic(problem),
    };
    if plan.is_none() {
        debug!(%strategy, "construction found no feasible plan");
    }
    plan
}

/// Cost of a plan: every route closed at the depot.
pub fn plan_cost(problem: &RoutingProblem, plan: &Plan) -> i64 {
    plan.iter().map(|r| problem.route_cost(r)).sum()
}

/// Cheapest of path-cheapest-arc, savings and best insertion.
fn automatic(problem: &RoutingProblem) -> Option<Plan> {
    [
        path::path_cheapest_arc(problem),
        clarke_wright::clarke_wright_savings(problem),
        insertion::best_insertion_all(problem),
    ]
    .into_iter()
    .flatten()
    .min_by_key(|plan| plan_cost(problem, plan))
}

fn tail_of(problem: &RoutingProblem, route: &[usize]) -> usize {
    route.last().copied().unwrap_or(problem.depot())
}

/// Pops stops off the end until the route can return to the depot.
fn close_route(problem: &RoutingProblem, route: &mut Vec<usize>, unassigned: &mut Vec<usize>) {
    while let Some(&last) = route.last() {
        if problem.is_arc_usable(last, problem.depot()) {
            break;
        }
        route.pop();
        unassigned.push(last);
    }
}

/// Closes every route and repairs leftovers by cheapest insertion.
fn finish(problem: &RoutingProblem, mut routes: Plan, mut unassigned: Vec<usize>) -> Option<Plan> {
    for route in routes.iter_mut() {
        close_route(problem, route, &mut unassigned);
    }
    unassigned.sort_unstable();
    insertion::global_cheapest_insertion(problem, &mut routes, unassigned)?;
    Some(routes)
}
