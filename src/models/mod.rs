//! Domain model types for depot routing.
//!
//! Provides the routing instance, routes as depot-to-depot node sequences,
//! per-strategy solutions, and the catalog of construction strategies.

mod problem;
mod route;
mod solution;
mod strategy;

pub use problem::RoutingProblem;
pub use route::Route;
pub use solution::Solution;
pub use strategy::FirstSolutionStrategy;
