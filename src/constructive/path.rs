//! Arc-following construction heuristics.
//!
//! Routes grow from their tail: the last stop (or the depot) is connected to
//! an unassigned stop. Variants differ in which tail moves next and which
//! stop it picks:
//!
//! - path cheapest arc: vehicles are filled one at a time
//! - path most constrained arc: as above, preferring stops with few usable
//!   entry arcs and a high regret
//! - global cheapest arc: every tail competes for the globally cheapest arc
//! - local cheapest arc: tails take turns
//! - first unbound min value: stops in index order, vehicles in turn
//!
//! A route that ends on a stop with no usable arc back to the depot gives
//! stops back until it can close; leftovers are repaired by cheapest
//! insertion.
//!
//! # Complexity
//!
//! O(n²) for the cheapest-arc variants, O(n³) for most-constrained.

use crate::models::RoutingProblem;

use super::{close_route, finish, tail_of, Plan};

/// Fills one vehicle at a time along the cheapest outgoing arc.
pub(crate) fn path_cheapest_arc(problem: &RoutingProblem) -> Option<Plan> {
    sequential_paths(problem, |_, tail, candidates| {
        candidates
            .iter()
            .copied()
            .min_by_key(|&s| (problem.cost(tail, s), s))
    })
}

/// Fills one vehicle at a time, preferring the most constrained stop.
///
/// A stop is more constrained when fewer unassigned stops (or the depot) can
/// reach it; among equals, the one whose next-cheapest entry arc is most
/// expensive relative to the tail arc wins, then the cheaper arc.
pub(crate) fn path_most_constrained_arc(problem: &RoutingProblem) -> Option<Plan> {
    let depot = problem.depot();
    sequential_paths(problem, |unassigned, tail, candidates| {
        candidates.iter().copied().min_by_key(|&s| {
            let mut entries = 0usize;
            let mut alternative = i64::MAX;
            for &u in unassigned.iter().chain(std::iter::once(&depot)) {
                if u == s || u == tail || !problem.is_arc_usable(u, s) {
                    continue;
                }
                entries += 1;
                alternative = alternative.min(problem.cost(u, s));
            }
            let arc = problem.cost(tail, s);
            let regret = if alternative == i64::MAX {
                i64::MAX
            } else {
                alternative - arc
            };
            (entries, std::cmp::Reverse(regret), arc, s)
        })
    })
}

/// Tails grow in parallel; each step takes the globally cheapest arc.
pub(crate) fn global_cheapest_arc(problem: &RoutingProblem) -> Option<Plan> {
    let limit = problem.max_stops_per_route();
    let mut routes: Plan = vec![Vec::new(); problem.num_vehicles()];
    let mut unassigned: Vec<usize> = problem.customers().collect();

    loop {
        let mut best: Option<(i64, usize, usize)> = None;
        for (v, route) in routes.iter().enumerate() {
            if route.len() >= limit {
                continue;
            }
            let tail = tail_of(problem, route);
            for &s in &unassigned {
                if !problem.is_arc_usable(tail, s) {
                    continue;
                }
                let c = problem.cost(tail, s);
                if best.is_none_or(|b| c < b.0) {
                    best = Some((c, v, s));
                }
            }
        }
        let Some((_, v, s)) = best else { break };
        routes[v].push(s);
        unassigned.retain(|&u| u != s);
    }

    finish(problem, routes, unassigned)
}

/// Tails take turns; each extends along its own cheapest arc.
pub(crate) fn local_cheapest_arc(problem: &RoutingProblem) -> Option<Plan> {
    let limit = problem.max_stops_per_route();
    let mut routes: Plan = vec![Vec::new(); problem.num_vehicles()];
    let mut active = vec![true; routes.len()];
    let mut unassigned: Vec<usize> = problem.customers().collect();

    while active.iter().any(|&a| a) {
        for v in 0..routes.len() {
            if !active[v] {
                continue;
            }
            if routes[v].len() >= limit {
                active[v] = false;
                continue;
            }
            let tail = tail_of(problem, &routes[v]);
            let next = unassigned
                .iter()
                .copied()
                .filter(|&s| problem.is_arc_usable(tail, s))
                .min_by_key(|&s| (problem.cost(tail, s), s));
            match next {
                Some(s) => {
                    routes[v].push(s);
                    unassigned.retain(|&u| u != s);
                }
                None => active[v] = false,
            }
        }
    }

    finish(problem, routes, unassigned)
}

/// Baseline: stops in index order fill the first vehicle, then the next.
pub(crate) fn first_unbound_min_value(problem: &RoutingProblem) -> Option<Plan> {
    let limit = problem.max_stops_per_route();
    let mut routes: Plan = vec![Vec::new(); problem.num_vehicles()];
    let mut leftover = Vec::new();
    let mut v = 0;

    for s in problem.customers() {
        while v < routes.len() && routes[v].len() >= limit {
            v += 1;
        }
        if v == routes.len() {
            leftover.push(s);
            continue;
        }
        let tail = tail_of(problem, &routes[v]);
        if problem.is_arc_usable(tail, s) {
            routes[v].push(s);
        } else {
            leftover.push(s);
        }
    }

    finish(problem, routes, leftover)
}

/// Drives one vehicle after the other; `pick` chooses the next stop among
/// candidates reachable from the tail.
fn sequential_paths<F>(problem: &RoutingProblem, pick: F) -> Option<Plan>
where
    F: Fn(&[usize], usize, &[usize]) -> Option<usize>,
{
    let limit = problem.max_stops_per_route();
    let mut routes: Plan = vec![Vec::new(); problem.num_vehicles()];
    let mut unassigned: Vec<usize> = problem.customers().collect();

    for route in routes.iter_mut() {
        while route.len() < limit && !unassigned.is_empty() {
            let tail = tail_of(problem, route);
            let candidates: Vec<usize> = unassigned
                .iter()
                .copied()
                .filter(|&s| problem.is_arc_usable(tail, s))
                .collect();
            let Some(next) = pick(&unassigned, tail, &candidates) else {
                break;
            };
            route.push(next);
            unassigned.retain(|&u| u != next);
        }
        close_route(problem, route, &mut unassigned);
    }

    finish(problem, routes, unassigned)
}
