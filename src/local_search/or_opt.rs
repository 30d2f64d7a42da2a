//! Or-opt segment relocation.
//!
//! # Algorithm
//!
//! Moves a segment of 2 or 3 consecutive stops to another position, in the
//! same route or in a route with room for it. The segment keeps its
//! direction, so only the three boundary arcs change on each side:
//!
//! ```text
//! delta = c(p, n) - c(p, first) - c(last, n)
//!       + c(a, first) + c(last, b) - c(a, b)
//! ```
//!
//! Single stops are left to [`super::relocate`].
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::{at, before, ArcCosts};

const SEGMENT_LENGTHS: [usize; 2] = [2, 3];

/// Applies the first improving segment move. Returns `true` if one was found.
pub(super) fn or_opt(
    plan: &mut [Vec<usize>],
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
) -> bool {
    let Some((from_route, from, len, to_route, to)) = find_or_opt(plan, costs, limit, order)
    else {
        return false;
    };
    let segment: Vec<usize> = plan[from_route].drain(from..from + len).collect();
    plan[to_route].splice(to..to, segment);
    true
}

fn find_or_opt(
    plan: &[Vec<usize>],
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
) -> Option<(usize, usize, usize, usize, usize)> {
    let depot = costs.depot();
    for len in SEGMENT_LENGTHS {
        for &ra in order {
            let route = &plan[ra];
            if route.len() < len {
                continue;
            }
            for from in 0..=(route.len() - len) {
                let first = route[from];
                let last = route[from + len - 1];
                let prev = before(depot, route, from);
                let next = at(depot, route, from + len);
                let Some(bridge) = costs.arc(prev, next) else {
                    continue;
                };
                let gain = costs.cost(prev, first) + costs.cost(last, next) - bridge;
                let mut reduced = route.clone();
                reduced.drain(from..from + len);

                for &rb in order {
                    let target: &[usize] = if rb == ra { &reduced } else { &plan[rb] };
                    if rb != ra && target.len() + len > limit {
                        continue;
                    }
                    for to in 0..=target.len() {
                        if rb == ra && to == from {
                            continue;
                        }
                        let a = before(depot, target, to);
                        let b = at(depot, target, to);
                        let (Some(into), Some(out)) = (costs.arc(a, first), costs.arc(last, b))
                        else {
                            continue;
                        };
                        if into + out - costs.cost(a, b) < gain {
                            return Some((ra, from, len, rb, to));
                        }
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::plan_cost;
    use crate::distance::DistanceMatrix;
    use crate::models::RoutingProblem;
    use crate::test_support::line_problem;

    #[test]
    fn test_segment_to_other_route() {
        let p = line_problem(2, 4);
        let costs = ArcCosts::new(&p);
        let mut plan = vec![vec![2, 3], vec![1]];
        assert_eq!(plan_cost(&p, &plan), 8);
        assert!(or_opt(&mut plan, &costs, 3, &[0, 1]));
        assert_eq!(plan, vec![vec![], vec![2, 3, 1]]);
        assert_eq!(plan_cost(&p, &plan), 6);
    }

    #[test]
    fn test_segment_needs_room() {
        let p = line_problem(2, 3);
        let costs = ArcCosts::new(&p);
        let mut plan = vec![vec![2, 3], vec![1]];
        assert!(!or_opt(&mut plan, &costs, 2, &[0, 1]));
    }

    #[test]
    fn test_segment_within_route_keeps_direction() {
        // One-way circuit 0 -> 1 -> 2 -> 3 -> 0; the segment [1, 2] belongs
        // at the front.
        let rows: Vec<Vec<i64>> = (0..4)
            .map(|i: i64| (0..4).map(|j: i64| (j - i).rem_euclid(4) * 3).collect())
            .collect();
        let p = RoutingProblem::new(DistanceMatrix::from_rows(&rows).expect("valid"), 1, 0, 4)
            .expect("valid");
        let costs = ArcCosts::new(&p);
        let mut plan = vec![vec![3, 1, 2]];
        assert!(or_opt(&mut plan, &costs, 3, &[0]));
        assert_eq!(plan, vec![vec![1, 2, 3]]);
        assert_eq!(plan_cost(&p, &plan), 12);
    }
}
