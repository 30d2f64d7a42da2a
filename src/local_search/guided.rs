//! Guided local search.
//!
//! # Algorithm
//!
//! 1. Descend to a local optimum of the augmented cost
//!    `d(a) + λ·p(a)`, applying operators first-improvement until none moves.
//! 2. Keep the plan if its true cost beats the best seen.
//! 3. Penalize the arcs of the current plan with maximal utility
//!    `d(a) / (1 + p(a))` and reshuffle the route scan order.
//! 4. Repeat until the time budget runs out, the round cap is hit, the best
//!    stalls for `max_stalled_rounds` rounds, or no arc has positive utility.
//!
//! `λ` is fixed at the first local optimum to
//! `max(1, round(coefficient · cost / arcs))`.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its application
//! to the traveling salesman problem", *European Journal of Operational
//! Research* 113(2), 469-499.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::constructive::{plan_cost, Plan};
use crate::models::RoutingProblem;

use super::{exchange, or_opt, plan_arcs, relocate, two_opt, ArcCosts, Budget};

/// Result of one guided local search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best plan found, by true cost.
    pub plan: Plan,
    /// True cost of `plan`.
    pub cost: i64,
    /// Penalty rounds performed.
    pub rounds: usize,
    /// Improving moves applied across all descents.
    pub moves: usize,
    /// `true` if the search stopped because the time budget ran out.
    pub timed_out: bool,
}

/// Improves a feasible plan within `config.time_budget`.
///
/// The returned plan is never worse than `plan`, serves the same stops,
/// respects capacity and uses only usable arcs.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_routing::SolverConfig;
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::local_search::guided_local_search;
/// use depot_routing::models::RoutingProblem;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 1, 2, 3],
///     vec![1, 0, 1, 2],
///     vec![2, 1, 0, 1],
///     vec![3, 2, 1, 0],
/// ]).unwrap();
/// let problem = RoutingProblem::new(dm, 2, 0, 4).unwrap();
/// let config = SolverConfig::default()
///     .with_time_budget(Duration::from_secs(5))
///     .with_max_rounds(10);
///
/// let outcome = guided_local_search(&problem, vec![vec![1, 3], vec![2]], &config);
/// assert_eq!(outcome.cost, 6);
/// ```
pub fn guided_local_search(
    problem: &RoutingProblem,
    plan: Plan,
    config: &SolverConfig,
) -> SearchOutcome {
    let budget = Budget::start(config.time_budget);
    let limit = problem.max_stops_per_route();
    let mut costs = ArcCosts::new(problem);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..plan.len()).collect();

    let mut best_cost = plan_cost(problem, &plan);
    let mut best = plan.clone();
    let mut current = plan;
    let mut rounds = 0;
    let mut moves = 0;
    let mut stalled = 0;

    loop {
        moves += descend(&mut current, &costs, limit, &order, &budget);
        let cost = plan_cost(problem, &current);
        if cost < best_cost {
            best_cost = cost;
            best.clone_from(&current);
            stalled = 0;
        } else if rounds > 0 {
            stalled += 1;
        }
        trace!(
            rounds,
            cost,
            augmented = costs.plan_cost(&current),
            best_cost,
            "local optimum"
        );

        if budget.exhausted() {
            break;
        }
        if config.max_rounds.is_some_and(|max| rounds >= max) {
            break;
        }
        if stalled >= config.max_stalled_rounds {
            break;
        }
        if rounds == 0 {
            costs.set_lambda(initial_lambda(
                config.lambda_coefficient,
                cost,
                plan_arcs(problem.depot(), &current).len(),
            ));
        }
        if !costs.penalize(&current) {
            break;
        }
        rounds += 1;
        order.shuffle(&mut rng);
    }

    let timed_out = budget.exhausted();
    debug!(
        rounds,
        moves,
        best_cost,
        lambda = costs.lambda(),
        timed_out,
        "guided local search finished"
    );
    SearchOutcome {
        plan: best,
        cost: best_cost,
        rounds,
        moves,
        timed_out,
    }
}

/// Applies improving moves until none is left or time runs out.
fn descend(
    plan: &mut Plan,
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
    budget: &Budget,
) -> usize {
    let mut moves = 0;
    while !budget.exhausted() {
        let moved = relocate::relocate(plan, costs, limit, order)
            || exchange::swap(plan, costs, order)
            || two_opt::two_opt(plan, costs, order)
            || or_opt::or_opt(plan, costs, limit, order)
            || exchange::cross(plan, costs, limit, order);
        if !moved {
            break;
        }
        moves += 1;
    }
    moves
}

fn initial_lambda(coefficient: f64, cost: i64, arcs: usize) -> i64 {
    if arcs == 0 {
        return 1;
    }
    let lambda = (coefficient * cost as f64 / arcs as f64).round() as i64;
    lambda.max(1)
}
