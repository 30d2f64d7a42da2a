//! Solution checker that recomputes costs and loads and verifies feasibility.

use crate::models::{RoutingProblem, Solution};

/// A type of constraint violation in a route or solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// The solution does not have one route per vehicle.
    WrongRouteCount {
        /// Fleet size.
        expected: usize,
        /// Routes found.
        actual: usize,
    },
    /// A route does not start and end at the depot.
    NotClosedAtDepot {
        /// Route index in the solution.
        route_index: usize,
    },
    /// Route load exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Nodes counted against capacity.
        load: usize,
        /// Vehicle capacity.
        capacity: usize,
    },
    /// A route uses an arc between stops with no connecting path.
    UnreachableArc {
        /// Route index in the solution.
        route_index: usize,
        /// Arc source.
        from: usize,
        /// Arc target.
        to: usize,
    },
    /// A stop is served more than once.
    DuplicateStop {
        /// Stop index.
        stop: usize,
    },
    /// A stop is not served at all.
    MissingStop {
        /// Stop index.
        stop: usize,
    },
    /// A stop index outside the instance, or the depot mid-route.
    InvalidStop {
        /// Route index in the solution.
        route_index: usize,
        /// Offending node.
        stop: usize,
    },
    /// Stored route cost differs from the recomputed one.
    CostMismatch {
        /// Route index in the solution.
        route_index: usize,
        /// Cost recorded in the route.
        stored: i64,
        /// Cost recomputed from the matrix.
        actual: i64,
    },
    /// Stored total differs from the sum of route costs.
    TotalMismatch {
        /// Total recorded in the solution.
        stored: i64,
        /// Sum of recomputed route costs.
        actual: i64,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Verifies a [`Solution`] against its [`RoutingProblem`].
///
/// Recomputes every route cost from the matrix and checks the partition
/// property, depot endpoints, capacity and arc reachability.
///
/// # Examples
///
/// ```
/// use depot_routing::distance::DistanceMatrix;
/// use depot_routing::evaluation::SolutionChecker;
/// use depot_routing::models::{FirstSolutionStrategy, Route, RoutingProblem, Solution};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 3, 4],
///     vec![3, 0, 5],
///     vec![4, 5, 0],
/// ]).unwrap();
/// let problem = RoutingProblem::new(dm.clone(), 1, 0, 3).unwrap();
/// let sol = Solution::new(
///     FirstSolutionStrategy::Savings,
///     vec![Route::closed(0, 0, &[1, 2], &dm)],
/// );
///
/// let checker = SolutionChecker::new(&problem);
/// assert!(checker.check(&sol).is_empty());
/// ```
pub struct SolutionChecker<'a> {
    problem: &'a RoutingProblem,
}

impl<'a> SolutionChecker<'a> {
    /// Creates a checker for the given problem.
    pub fn new(problem: &'a RoutingProblem) -> Self {
        Self { problem }
    }

    /// Returns every violation found; empty means feasible.
    pub fn check(&self, solution: &Solution) -> Vec<Violation> {
        let p = self.problem;
        let depot = p.depot();
        let mut violations = Vec::new();

        if solution.num_routes() != p.num_vehicles() {
            violations.push(Violation::new(ViolationType::WrongRouteCount {
                expected: p.num_vehicles(),
                actual: solution.num_routes(),
            }));
        }

        let mut seen = vec![0usize; p.num_stops()];
        let mut cost_sum = 0;

        for (idx, route) in solution.routes().iter().enumerate() {
            let nodes = route.nodes();
            if nodes.len() < 2 || nodes[0] != depot || nodes[nodes.len() - 1] != depot {
                violations.push(Violation::new(ViolationType::NotClosedAtDepot {
                    route_index: idx,
                }));
            }

            for &stop in route.stops() {
                if stop >= p.num_stops() || stop == depot {
                    violations.push(Violation::new(ViolationType::InvalidStop {
                        route_index: idx,
                        stop,
                    }));
                } else {
                    seen[stop] += 1;
                }
            }

            if route.load() > p.capacity() {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index: idx,
                    load: route.load(),
                    capacity: p.capacity(),
                }));
            }

            if nodes.iter().any(|&n| n >= p.num_stops()) {
                continue;
            }

            for w in nodes.windows(2) {
                if !p.is_arc_usable(w[0], w[1]) {
                    violations.push(Violation::new(ViolationType::UnreachableArc {
                        route_index: idx,
                        from: w[0],
                        to: w[1],
                    }));
                }
            }

            let actual = p.matrix().path_cost(nodes);
            cost_sum += actual;
            if actual != route.cost() {
                violations.push(Violation::new(ViolationType::CostMismatch {
                    route_index: idx,
                    stored: route.cost(),
                    actual,
                }));
            }
        }

        for stop in p.customers() {
            match seen[stop] {
                0 => violations.push(Violation::new(ViolationType::MissingStop { stop })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateStop { stop })),
            }
        }

        if cost_sum != solution.total_cost() {
            violations.push(Violation::new(ViolationType::TotalMismatch {
                stored: solution.total_cost(),
                actual: cost_sum,
            }));
        }

        violations
    }

    /// Returns `true` if the solution has no violations.
    pub fn is_feasible(&self, solution: &Solution) -> bool {
        self.check(solution).is_empty()
    }
}
