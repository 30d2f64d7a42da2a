//! Intra-route 2-opt for directed costs.
//!
//! # Algorithm
//!
//! Reversing the segment `r[i..=j]` of a route replaces the arcs
//! `p -> r[i]` and `r[j] -> n` by `p -> r[j]` and `r[i] -> n`, and flips
//! every arc inside the segment. With asymmetric costs the inner arcs do not
//! cancel, so the delta carries the forward and reverse segment sums:
//!
//! ```text
//! delta = c(p, r[j]) + c(r[i], n) + rev(i, j)
//!       - c(p, r[i]) - c(r[j], n) - fwd(i, j)
//! ```
//!
//! Both sums grow by one arc as `j` advances. Once a reversed arc is not
//! usable, no longer segment from `i` can be either.
//!
//! # Complexity
//!
//! O(n²) per scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::{at, before, ArcCosts};

/// Applies the first improving segment reversal. Returns `true` if one was
/// found.
pub(super) fn two_opt(plan: &mut [Vec<usize>], costs: &ArcCosts<'_>, order: &[usize]) -> bool {
    for &r in order {
        if let Some((i, j)) = find_reversal(&plan[r], costs) {
            plan[r][i..=j].reverse();
            return true;
        }
    }
    false
}

fn find_reversal(route: &[usize], costs: &ArcCosts<'_>) -> Option<(usize, usize)> {
    let depot = costs.depot();
    for i in 0..route.len() {
        let p = before(depot, route, i);
        let mut fwd = 0;
        let mut rev = 0;
        for j in i + 1..route.len() {
            fwd += costs.cost(route[j - 1], route[j]);
            let Some(back) = costs.arc(route[j], route[j - 1]) else {
                break;
            };
            rev += back;
            let n = at(depot, route, j + 1);
            let (Some(head), Some(tail)) = (costs.arc(p, route[j]), costs.arc(route[i], n)) else {
                continue;
            };
            let old = costs.cost(p, route[i]) + costs.cost(route[j], n) + fwd;
            if head + tail + rev < old {
                return Some((i, j));
            }
        }
    }
    None
}
