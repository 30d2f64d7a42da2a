//! # depot-routing
//!
//! Single-depot capacitated vehicle routing over sparse, directed road
//! networks. Travel times come from all-pairs shortest paths; plans come from
//! a catalog of construction heuristics refined by guided local search.
//!
//! ## Modules
//!
//! - [`network`]: Stops, directed graph, and validated network input
//! - [`distance`]: Floyd–Warshall travel-time matrix with an unreachable sentinel
//! - [`models`]: Routing problem, routes, solutions, strategy catalog
//! - [`constructive`]: Construction heuristics for the 12 catalog strategies
//! - [`local_search`]: Relocate, swap, 2-opt, Or-opt, 2-opt* and guided local search
//! - [`solver`]: Per-strategy solve, solution extraction, multi-strategy runner
//! - [`evaluation`]: Independent feasibility and cost checks
//! - [`context`]: A routing session owning network, problem and results
//! - [`editor`]: Manual append-stop route editing
//! - [`config`]: Solver parameters
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use depot_routing::{RunContext, SolverConfig};
//! use depot_routing::network::NetworkInput;
//!
//! let input = NetworkInput::from_json(r#"{
//!     "stops": [
//!         {"id": 1, "label": "Depot", "latitude": 0.0, "longitude": 0.0},
//!         {"id": 2, "label": "North", "latitude": 1.0, "longitude": 0.0},
//!         {"id": 3, "label": "East", "latitude": 0.0, "longitude": 1.0}
//!     ],
//!     "connections": [
//!         {"from": 1, "to": 2, "weight": 3.0},
//!         {"from": 2, "to": 3, "weight": 2.0},
//!         {"from": 3, "to": 1, "weight": 4.0}
//!     ]
//! }"#).unwrap();
//!
//! let config = SolverConfig::default().with_time_budget(Duration::from_millis(200));
//! let mut ctx = RunContext::from_input(input, 1, 1, config).unwrap();
//! let best = ctx.solve_all().unwrap();
//! assert_eq!(best.total_cost(), 9);
//! assert_eq!(best.routes()[0].nodes(), &[0, 1, 2, 0]);
//! ```

pub mod config;
pub mod constructive;
pub mod context;
pub mod distance;
pub mod editor;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod network;
pub mod solver;

#[cfg(test)]
mod test_support;

pub use config::SolverConfig;
pub use context::RunContext;
pub use error::{Result, RoutingError};
