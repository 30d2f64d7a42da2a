//! Spanning-tree tour construction.
//!
//! # Algorithm
//!
//! 1. Build a minimum spanning tree from the depot with Prim's algorithm over
//!    the symmetric weight `w(i, j) = min(d(i, j), d(j, i))`.
//! 2. Walk the tree in preorder (children by increasing weight) to get a
//!    giant tour over all reachable stops.
//! 3. Cut the giant tour into consecutive chunks, one per vehicle, of at most
//!    `ceil(len / vehicles)` stops and never more than route capacity.
//!
//! Stops the directed arcs of a chunk cannot follow, and stops outside the
//! tree, are placed afterwards by cheapest insertion. This is the tree
//! doubling bound that Christofides refines with a matching step, which is
//! skipped here.
//!
//! # Complexity
//!
//! O(n²) for Prim on a dense matrix.
//!
//! # Reference
//!
//! Christofides, N. (1976). "Worst-case analysis of a new heuristic for the
//! travelling salesman problem", Report 388, Carnegie-Mellon University.

use crate::models::RoutingProblem;

use super::{finish, tail_of, Plan};

/// Builds routes by splitting a preorder walk of a minimum spanning tree.
pub(crate) fn spanning_tree_tour(problem: &RoutingProblem) -> Option<Plan> {
    let tour = preorder_tour(problem);
    let mut pending: Vec<usize> = {
        let mut in_tour = vec![false; problem.num_stops()];
        for &s in &tour {
            in_tour[s] = true;
        }
        problem.customers().filter(|&s| !in_tour[s]).collect()
    };

    let vehicles = problem.num_vehicles();
    let chunk = tour
        .len()
        .div_ceil(vehicles)
        .min(problem.max_stops_per_route());
    let mut routes: Plan = vec![Vec::new(); vehicles];

    let mut v = 0;
    for &s in &tour {
        while v < vehicles && routes[v].len() >= chunk {
            v += 1;
        }
        if v == vehicles {
            pending.push(s);
            continue;
        }
        if problem.is_arc_usable(tail_of(problem, &routes[v]), s) {
            routes[v].push(s);
        } else {
            pending.push(s);
        }
    }

    finish(problem, routes, pending)
}

/// Preorder walk of Prim's tree rooted at the depot, depot excluded.
fn preorder_tour(problem: &RoutingProblem) -> Vec<usize> {
    let n = problem.num_stops();
    let depot = problem.depot();
    let weight = |i: usize, j: usize| -> Option<i64> {
        let forward = problem.is_arc_usable(i, j).then(|| problem.cost(i, j));
        let backward = problem.is_arc_usable(j, i).then(|| problem.cost(j, i));
        match (forward, backward) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    };

    let mut in_tree = vec![false; n];
    let mut best: Vec<Option<(i64, usize)>> = vec![None; n];
    let mut children: Vec<Vec<(i64, usize)>> = vec![Vec::new(); n];

    in_tree[depot] = true;
    for j in 0..n {
        if j != depot {
            best[j] = weight(depot, j).map(|w| (w, depot));
        }
    }

    loop {
        let next = (0..n)
            .filter(|&j| !in_tree[j])
            .filter_map(|j| best[j].map(|(w, _)| (w, j)))
            .min();
        let Some((w, j)) = next else { break };
        let (_, parent) = best[j].unwrap_or((w, depot));
        in_tree[j] = true;
        children[parent].push((w, j));
        for k in 0..n {
            if in_tree[k] {
                continue;
            }
            if let Some(wk) = weight(j, k) {
                if best[k].is_none_or(|(b, _)| wk < b) {
                    best[k] = Some((wk, j));
                }
            }
        }
    }

    let mut tour = Vec::with_capacity(n);
    let mut stack = vec![depot];
    while let Some(node) = stack.pop() {
        if node != depot {
            tour.push(node);
        }
        let mut kids = std::mem::take(&mut children[node]);
        kids.sort_unstable();
        // Pushed in reverse so the lightest child is visited first.
        stack.extend(kids.into_iter().rev().map(|(_, c)| c));
    }
    tour
}
