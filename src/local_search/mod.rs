//! Guided local search over route plans.
//!
//! - [`relocate`]: move one stop, within its route or to another
//! - [`or_opt`]: move a segment of 2 or 3 stops, orientation kept
//! - [`exchange`]: swap two stops, and 2-opt* tail exchange between routes
//! - [`two_opt`]: intra-route segment reversal for directed costs
//! - [`guided`]: the penalty-driven search loop
//!
//! Operators are first-improvement: each scans its neighbourhood and applies
//! the first move that lowers the augmented plan cost, reporting whether it
//! moved. Every arc a move creates must be usable, and route lengths stay
//! within capacity.

mod exchange;
mod guided;
mod or_opt;
mod relocate;
mod two_opt;

use std::time::{Duration, Instant};

use crate::models::RoutingProblem;

pub use guided::{guided_local_search, SearchOutcome};

/// Arc costs augmented with guided local search penalties.
///
/// `cost(i, j) = d(i, j) + lambda * penalty(i, j)`. Unusable arcs have no
/// cost at all.
#[derive(Debug, Clone)]
pub(crate) struct ArcCosts<'a> {
    problem: &'a RoutingProblem,
    penalties: Vec<u32>,
    lambda: i64,
}

impl<'a> ArcCosts<'a> {
    pub(crate) fn new(problem: &'a RoutingProblem) -> Self {
        let n = problem.num_stops();
        Self {
            problem,
            penalties: vec![0; n * n],
            lambda: 0,
        }
    }

    pub(crate) fn depot(&self) -> usize {
        self.problem.depot()
    }

    /// Augmented cost of a new arc, `None` if it may not be used.
    pub(crate) fn arc(&self, from: usize, to: usize) -> Option<i64> {
        self.problem
            .is_arc_usable(from, to)
            .then(|| self.cost(from, to))
    }

    /// Augmented cost of an arc already in the plan.
    pub(crate) fn cost(&self, from: usize, to: usize) -> i64 {
        self.problem.cost(from, to) + self.lambda * i64::from(self.penalty(from, to))
    }

    pub(crate) fn penalty(&self, from: usize, to: usize) -> u32 {
        self.penalties[from * self.problem.num_stops() + to]
    }

    pub(crate) fn lambda(&self) -> i64 {
        self.lambda
    }

    pub(crate) fn set_lambda(&mut self, lambda: i64) {
        self.lambda = lambda;
    }

    /// Increments the penalty of every arc in `plan` with maximal utility
    /// `d(a) / (1 + penalty(a))`.
    ///
    /// Returns `false` when no arc has positive utility.
    pub(crate) fn penalize(&mut self, plan: &[Vec<usize>]) -> bool {
        let n = self.problem.num_stops();
        // (slot, d, 1 + p): utilities compare as fractions d / (1 + p).
        let utilities: Vec<(usize, i64, i64)> = plan_arcs(self.depot(), plan)
            .into_iter()
            .map(|(i, j)| {
                let slot = i * n + j;
                (
                    slot,
                    self.problem.cost(i, j),
                    1 + i64::from(self.penalties[slot]),
                )
            })
            .collect();
        let Some(&(_, top_cost, top_weight)) = utilities
            .iter()
            .max_by(|a, b| (a.1 * b.2).cmp(&(b.1 * a.2)))
        else {
            return false;
        };
        if top_cost <= 0 {
            return false;
        }
        for &(slot, cost, weight) in &utilities {
            if cost * top_weight == top_cost * weight {
                self.penalties[slot] += 1;
            }
        }
        true
    }

    /// Augmented cost of a whole plan.
    pub(crate) fn plan_cost(&self, plan: &[Vec<usize>]) -> i64 {
        plan_arcs(self.depot(), plan)
            .into_iter()
            .map(|(i, j)| self.cost(i, j))
            .sum()
    }
}

/// Every arc of a plan, empty routes contributing none.
pub(crate) fn plan_arcs(depot: usize, plan: &[Vec<usize>]) -> Vec<(usize, usize)> {
    let mut arcs = Vec::new();
    for route in plan.iter().filter(|r| !r.is_empty()) {
        let mut prev = depot;
        for &s in route {
            arcs.push((prev, s));
            prev = s;
        }
        arcs.push((prev, depot));
    }
    arcs
}

/// Node before position `pos` (`0..=len`); the depot for `pos == 0`.
fn before(depot: usize, route: &[usize], pos: usize) -> usize {
    if pos == 0 {
        depot
    } else {
        route[pos - 1]
    }
}

/// Node at position `pos` (`0..=len`); the depot for `pos == len`.
fn at(depot: usize, route: &[usize], pos: usize) -> usize {
    route.get(pos).copied().unwrap_or(depot)
}

/// Wall-clock allowance for one search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Budget {
    started: Instant,
    limit: Duration,
}

impl Budget {
    pub(crate) fn start(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub(crate) fn exhausted(&self) -> bool {
        self.started.elapsed() >= self.limit
    }
}
