//! Clarke-Wright savings algorithm for asymmetric travel times.
//!
//! # Algorithm
//!
//! Every stop starts on its own route (depot → stop → depot). Joining the
//! route ending in `i` to the route starting in `j` saves
//!
//! ```text
//! s(i, j) = d(i, 0) + d(0, j) - d(i, j)
//! ```
//!
//! Ordered pairs are merged in decreasing order of savings, subject to route
//! capacity. Travel times are directed, so routes are never reversed. When
//! more routes survive than there are vehicles, the smallest ones are
//! dissolved and their stops reinserted by cheapest insertion.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of stops (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::models::RoutingProblem;

use super::insertion::global_cheapest_insertion;
use super::Plan;

/// A savings value for linking the end of one route to the start of another.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: i64,
}

/// Constructs routes with the Clarke-Wright savings algorithm.
///
/// Returns `None` if some stop cannot be placed within capacity.
pub(crate) fn clarke_wright_savings(problem: &RoutingProblem) -> Option<Plan> {
    let n = problem.num_stops();
    let depot = problem.depot();
    let limit = problem.max_stops_per_route();

    let mut route_members: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut route_of = vec![usize::MAX; n];
    let mut pending = Vec::new();

    for i in problem.customers() {
        if limit > 0 && problem.is_arc_usable(depot, i) && problem.is_arc_usable(i, depot) {
            route_of[i] = i;
            route_members[i].push(i);
        } else {
            pending.push(i);
        }
    }

    let mut savings = Vec::new();
    for i in problem.customers() {
        if route_of[i] == usize::MAX {
            continue;
        }
        for j in problem.customers() {
            if i == j || route_of[j] == usize::MAX || !problem.is_arc_usable(i, j) {
                continue;
            }
            let value = problem.cost(i, depot) + problem.cost(depot, j) - problem.cost(i, j);
            savings.push(Saving { i, j, value });
        }
    }

    // Decreasing savings; stable so ties keep (i, j) order
    savings.sort_by(|a, b| b.value.cmp(&a.value));

    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];
        if ri == rj {
            continue;
        }
        if route_members[ri].len() + route_members[rj].len() > limit {
            continue;
        }
        let i_at_end = route_members[ri].last() == Some(&saving.i);
        let j_at_start = route_members[rj].first() == Some(&saving.j);
        if !(i_at_end && j_at_start) {
            continue;
        }

        let mut tail = std::mem::take(&mut route_members[rj]);
        for &cid in &tail {
            route_of[cid] = ri;
        }
        route_members[ri].append(&mut tail);
    }

    let mut routes: Vec<Vec<usize>> = route_members
        .into_iter()
        .filter(|members| !members.is_empty())
        .collect();

    // Keep the fullest routes (cheapest first among equals) for the fleet.
    routes.sort_by_key(|r| (std::cmp::Reverse(r.len()), problem.route_cost(r)));
    if routes.len() > problem.num_vehicles() {
        for dissolved in routes.split_off(problem.num_vehicles()) {
            pending.extend(dissolved);
        }
    }
    routes.resize_with(problem.num_vehicles(), Vec::new);

    pending.sort_unstable();
    global_cheapest_insertion(problem, &mut routes, pending)?;
    Some(routes)
}
