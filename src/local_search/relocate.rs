//! Stop relocation operator.
//!
//! # Algorithm
//!
//! Removes one stop from its route and reinserts it at another position,
//! in the same route or in a route with spare capacity. With `p -> s -> n`
//! becoming `p -> n` and `a -> b` becoming `a -> s -> b`:
//!
//! ```text
//! delta = c(p, n) - c(p, s) - c(s, n) + c(a, s) + c(s, b) - c(a, b)
//! ```
//!
//! # Complexity
//!
//! O(n²) per scan where n = number of stops.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{at, before, ArcCosts};

#[derive(Debug, Clone, Copy)]
struct RelocateMove {
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    /// Position in the target route after the stop was removed.
    to_pos: usize,
}

/// Applies the first improving relocation. Returns `true` if one was found.
pub(super) fn relocate(
    plan: &mut [Vec<usize>],
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
) -> bool {
    let Some(mv) = find_relocate(plan, costs, limit, order) else {
        return false;
    };
    let stop = plan[mv.from_route].remove(mv.from_pos);
    plan[mv.to_route].insert(mv.to_pos, stop);
    true
}

fn find_relocate(
    plan: &[Vec<usize>],
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
) -> Option<RelocateMove> {
    let depot = costs.depot();
    for &ra in order {
        let route = &plan[ra];
        for i in 0..route.len() {
            let s = route[i];
            let prev = before(depot, route, i);
            let next = at(depot, route, i + 1);
            let Some(bridge) = costs.arc(prev, next) else {
                continue;
            };
            let gain = costs.cost(prev, s) + costs.cost(s, next) - bridge;
            let mut reduced = route.clone();
            reduced.remove(i);

            for &rb in order {
                let target: &[usize] = if rb == ra { &reduced } else { &plan[rb] };
                if rb != ra && target.len() >= limit {
                    continue;
                }
                for j in 0..=target.len() {
                    if rb == ra && j == i {
                        continue;
                    }
                    let a = before(depot, target, j);
                    let b = at(depot, target, j);
                    let (Some(into), Some(out)) = (costs.arc(a, s), costs.arc(s, b)) else {
                        continue;
                    };
                    if into + out - costs.cost(a, b) < gain {
                        return Some(RelocateMove {
                            from_route: ra,
                            from_pos: i,
                            to_route: rb,
                            to_pos: j,
                        });
                    }
                }
            }
        }
    }
    None
}
