//! Exchange operators: stop swap and 2-opt* tail exchange.
//!
//! # Swap
//!
//! Exchanges two stops, in one route or across two. Adjacent stops in the
//! same route are skipped; relocation covers that move.
//!
//! # 2-opt*
//!
//! Given routes A = [a₁, ..., aᵢ | aᵢ₊₁, ..., aₙ] and
//! B = [b₁, ..., bⱼ | bⱼ₊₁, ..., bₘ], produce:
//!
//! A' = [a₁, ..., aᵢ, bⱼ₊₁, ..., bₘ]
//! B' = [b₁, ..., bⱼ, aᵢ₊₁, ..., aₙ]
//!
//! Segments keep their direction, so only the two cut arcs change. Both new
//! routes must fit the capacity.
//!
//! # Complexity
//!
//! O(n²) per scan for both operators.
//!
//! # Reference
//!
//! Potvin, J.-Y. & Rousseau, J.-M. (1995). "An Exchange Heuristic for
//! Routeing Problems with Time Windows", *Journal of the Operational Research
//! Society* 46(12), 1433-1446.

use super::{at, before, ArcCosts};

/// Applies the first improving swap. Returns `true` if one was found.
pub(super) fn swap(plan: &mut [Vec<usize>], costs: &ArcCosts<'_>, order: &[usize]) -> bool {
    let Some(((ra, i), (rb, j))) = find_swap(plan, costs, order) else {
        return false;
    };
    let a = plan[ra][i];
    plan[ra][i] = plan[rb][j];
    plan[rb][j] = a;
    true
}

fn find_swap(
    plan: &[Vec<usize>],
    costs: &ArcCosts<'_>,
    order: &[usize],
) -> Option<((usize, usize), (usize, usize))> {
    let depot = costs.depot();
    // Change from putting `new` where `old` sits at `pos`.
    let replace = |route: &[usize], pos: usize, new: usize| -> Option<i64> {
        let old = route[pos];
        let p = before(depot, route, pos);
        let n = at(depot, route, pos + 1);
        let added = costs.arc(p, new)? + costs.arc(new, n)?;
        Some(added - costs.cost(p, old) - costs.cost(old, n))
    };

    for (x, &ra) in order.iter().enumerate() {
        for &rb in &order[x..] {
            let (a, b) = (&plan[ra], &plan[rb]);
            for i in 0..a.len() {
                let start = if ra == rb { i + 2 } else { 0 };
                for j in start..b.len() {
                    let Some(da) = replace(a, i, b[j]) else {
                        continue;
                    };
                    let Some(db) = replace(b, j, a[i]) else {
                        continue;
                    };
                    if da + db < 0 {
                        return Some(((ra, i), (rb, j)));
                    }
                }
            }
        }
    }
    None
}

/// Applies the first improving tail exchange between two routes. Returns
/// `true` if one was found.
pub(super) fn cross(
    plan: &mut [Vec<usize>],
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
) -> bool {
    let Some(((ra, i), (rb, j))) = find_cross(plan, costs, limit, order) else {
        return false;
    };
    let tail_a = plan[ra].split_off(i);
    let tail_b = plan[rb].split_off(j);
    plan[ra].extend(tail_b);
    plan[rb].extend(tail_a);
    true
}

fn find_cross(
    plan: &[Vec<usize>],
    costs: &ArcCosts<'_>,
    limit: usize,
    order: &[usize],
) -> Option<((usize, usize), (usize, usize))> {
    let depot = costs.depot();
    for (x, &ra) in order.iter().enumerate() {
        for &rb in &order[x + 1..] {
            let (a, b) = (&plan[ra], &plan[rb]);
            for i in 0..=a.len() {
                for j in 0..=b.len() {
                    // Swapping whole routes, or nothing at all.
                    if (i == 0 && j == 0) || (i == a.len() && j == b.len()) {
                        continue;
                    }
                    if i + (b.len() - j) > limit || j + (a.len() - i) > limit {
                        continue;
                    }
                    let (pa, na) = (before(depot, a, i), at(depot, a, i));
                    let (pb, nb) = (before(depot, b, j), at(depot, b, j));
                    let (Some(ab), Some(ba)) = (costs.arc(pa, nb), costs.arc(pb, na)) else {
                        continue;
                    };
                    if ab + ba < costs.cost(pa, na) + costs.cost(pb, nb) {
                        return Some(((ra, i), (rb, j)));
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

    /// Depot 0 and stops 1..=4 on a line, `d(i, j) = |i - j|`.
    fn line5(vehicles: usize, capacity: usize) -> RoutingProblem {
        let rows: Vec<Vec<i64>> = (0..5i64)
            .map(|i| (0..5i64).map(|j| (i - j).abs()).collect())
            .collect();
        RoutingProblem::new(DistanceMatrix::from_rows(&rows).expect("valid"), vehicles, 0, capacity)
            .expect("valid")
    }

    #[test]
    fn test_swap_across_routes() {
        let p = line5(2, 3);
        let costs = ArcCosts::new(&p);
        let mut plan = vec![vec![1, 4], vec![3, 2]];
        assert_eq!(plan_cost(&p, &plan), 14);
        assert!(swap(&mut plan, &costs, &[0, 1]));
        assert_eq!(plan, vec![vec![3, 4], vec![1, 2]]);
        assert_eq!(plan_cost(&p, &plan), 12);
    }

    #[test]
    fn test_swap_within_route_skips_neighbours() {
        let p = line5(1, 5);
        let costs = ArcCosts::new(&p);
        // Only 1 and 3 are non-adjacent, and swapping them gains nothing.
        let mut plan = vec![vec![1, 2, 3]];
        assert!(!swap(&mut plan, &costs, &[0]));
        let mut plan = vec![vec![4, 2, 3, 1]];
        assert_eq!(plan_cost(&p, &plan), 10);
        assert!(swap(&mut plan, &costs, &[0]));
        assert_eq!(plan, vec![vec![1, 2, 3, 4]]);
        assert_eq!(plan_cost(&p, &plan), 8);
    }

    #[test]
    fn test_cross_exchanges_tails() {
        let p = line5(2, 3);
        let costs = ArcCosts::new(&p);
        let mut plan = vec![vec![1, 4], vec![3, 2]];
        assert!(cross(&mut plan, &costs, 2, &[0, 1]));
        assert!(plan_cost(&p, &plan) < 14);
        assert!(plan.iter().all(|r| r.len() <= 2));
        let mut all = plan.concat();
        all.sort_unstable();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_cross_respects_capacity() {
        let p = line5(2, 2);
        let costs = ArcCosts::new(&p);
        let mut plan = vec![vec![4], vec![1]];
        assert!(!cross(&mut plan, &costs, 1, &[0, 1]));
    }
}
