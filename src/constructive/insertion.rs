//! Insertion heuristics.
//!
//! All variants share the same move: put a stop between two consecutive
//! nodes of a route (depot included at both ends) where the detour
//!
//! ```text
//! delta = d(prev, s) + d(s, next) - d(prev, next)
//! ```
//!
//! is smallest. They differ in which stop is inserted next:
//!
//! - global cheapest: the (stop, position) pair with minimal delta overall
//! - sequential: stops in a fixed order, each at its own cheapest position
//! - parallel: every vehicle is seeded with one stop first, then global
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::models::RoutingProblem;

use super::Plan;

/// Finds the cheapest feasible position for `stop` across all routes.
///
/// Returns `(route_index, position, delta)`. A position is feasible if the
/// route has room and both new arcs are usable. Ties keep the first route and
/// earliest position.
pub(crate) fn best_insertion(
    problem: &RoutingProblem,
    routes: &Plan,
    stop: usize,
) -> Option<(usize, usize, i64)> {
    let depot = problem.depot();
    let limit = problem.max_stops_per_route();
    let mut best: Option<(usize, usize, i64)> = None;

    for (ri, route) in routes.iter().enumerate() {
        if route.len() >= limit {
            continue;
        }
        for pos in 0..=route.len() {
            let prev = if pos == 0 { depot } else { route[pos - 1] };
            let next = if pos == route.len() { depot } else { route[pos] };
            if !problem.is_arc_usable(prev, stop) || !problem.is_arc_usable(stop, next) {
                continue;
            }
            let delta = problem.cost(prev, stop) + problem.cost(stop, next)
                - problem.cost(prev, next);
            if best.is_none_or(|b| delta < b.2) {
                best = Some((ri, pos, delta));
            }
        }
    }

    best
}

/// Repeatedly inserts the globally cheapest (stop, position) pair.
///
/// Returns `None` if some pending stop has no feasible position left.
pub(crate) fn global_cheapest_insertion(
    problem: &RoutingProblem,
    routes: &mut Plan,
    mut pending: Vec<usize>,
) -> Option<()> {
    while !pending.is_empty() {
        let mut best: Option<(usize, usize, usize, i64)> = None;
        for (pi, &stop) in pending.iter().enumerate() {
            if let Some((ri, pos, delta)) = best_insertion(problem, routes, stop) {
                if best.is_none_or(|b| delta < b.3) {
                    best = Some((pi, ri, pos, delta));
                }
            }
        }
        let (pi, ri, pos, _) = best?;
        let stop = pending.remove(pi);
        routes[ri].insert(pos, stop);
    }
    Some(())
}

/// Inserts stops in the given order, each at its cheapest position.
///
/// Stops that find no position on their turn are retried with global
/// cheapest insertion once the pass is over.
pub(crate) fn sequential_insertion(
    problem: &RoutingProblem,
    routes: &mut Plan,
    order: &[usize],
) -> Option<()> {
    let mut failed = Vec::new();
    for &stop in order {
        match best_insertion(problem, routes, stop) {
            Some((ri, pos, _)) => routes[ri].insert(pos, stop),
            None => failed.push(stop),
        }
    }
    global_cheapest_insertion(problem, routes, failed)
}

/// All stops start unperformed and are inserted in input order.
pub(crate) fn all_unperformed(problem: &RoutingProblem) -> Option<Plan> {
    let mut routes = vec![Vec::new(); problem.num_vehicles()];
    let order: Vec<usize> = problem.customers().collect();
    sequential_insertion(problem, &mut routes, &order)?;
    Some(routes)
}

/// Global cheapest insertion from empty routes.
pub(crate) fn best_insertion_all(problem: &RoutingProblem) -> Option<Plan> {
    let mut routes = vec![Vec::new(); problem.num_vehicles()];
    global_cheapest_insertion(problem, &mut routes, problem.customers().collect())?;
    Some(routes)
}

/// Farthest stops (by depot round trip) first, each at its cheapest position.
pub(crate) fn local_cheapest_insertion(problem: &RoutingProblem) -> Option<Plan> {
    let mut routes = vec![Vec::new(); problem.num_vehicles()];
    let order = by_round_trip_desc(problem);
    sequential_insertion(problem, &mut routes, &order)?;
    Some(routes)
}

/// Seeds every vehicle with one of the farthest stops, then inserts the rest
/// by global cheapest insertion.
pub(crate) fn parallel_cheapest_insertion(problem: &RoutingProblem) -> Option<Plan> {
    let mut routes = vec![Vec::new(); problem.num_vehicles()];
    let mut order = by_round_trip_desc(problem);

    if problem.max_stops_per_route() > 0 {
        let depot = problem.depot();
        let mut seeded = 0;
        order.retain(|&s| {
            let round_trip = problem.is_arc_usable(depot, s) && problem.is_arc_usable(s, depot);
            if seeded < routes.len() && round_trip {
                routes[seeded].push(s);
                seeded += 1;
                false
            } else {
                true
            }
        });
    }

    global_cheapest_insertion(problem, &mut routes, order)?;
    Some(routes)
}

/// Stops sorted by decreasing `d(depot, s) + d(s, depot)`, index on ties.
fn by_round_trip_desc(problem: &RoutingProblem) -> Vec<usize> {
    let depot = problem.depot();
    let mut order: Vec<usize> = problem.customers().collect();
    order.sort_by_key(|&s| {
        std::cmp::Reverse(problem.cost(depot, s) + problem.cost(s, depot))
    });
    order
}
