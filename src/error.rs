//! Crate error type.

use thiserror::Error;

/// Errors surfaced to callers of the routing engine.
///
/// Only malformed input and misuse of the editing API are errors. Unreachable
/// stop pairs are encoded in the cost matrix, and a strategy that cannot find
/// a feasible plan simply yields no solution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    /// Two stops in the input share an identifier.
    #[error("stop id {id} appears more than once")]
    DuplicateStop {
        /// The repeated identifier.
        id: u32,
    },
    /// A connection references a stop identifier that is not in the stop table.
    #[error("connection references unknown stop id {id}")]
    UnknownStop {
        /// The unresolved identifier.
        id: u32,
    },
    /// A stop position is NaN or infinite.
    #[error("stop {id} has a non-finite coordinate")]
    InvalidCoordinate {
        /// Stop identifier.
        id: u32,
    },
    /// An edge weight is NaN, infinite, or negative.
    #[error("edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight {
        /// Source stop identifier.
        from: u32,
        /// Target stop identifier.
        to: u32,
        /// Offending weight.
        weight: f64,
    },
    /// The same ordered pair was given twice.
    #[error("edge {from} -> {to} is defined more than once")]
    DuplicateEdge {
        /// Source stop identifier.
        from: u32,
        /// Target stop identifier.
        to: u32,
    },
    /// The depot index does not name a stop.
    #[error("depot index {depot} is out of range for {num_stops} stops")]
    DepotOutOfRange {
        /// Requested depot index.
        depot: usize,
        /// Number of stops in the instance.
        num_stops: usize,
    },
    /// The depot identifier is not in the graph.
    #[error("depot id {id} is not a known stop")]
    UnknownDepot {
        /// Requested depot identifier.
        id: u32,
    },
    /// A problem was defined with an empty fleet.
    #[error("at least one vehicle is required")]
    NoVehicles,
    /// Explicit matrix rows do not form a square matrix.
    #[error("matrix row {row} has {len} entries, expected {expected}")]
    MatrixNotSquare {
        /// Row index.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Expected row length.
        expected: usize,
    },
    /// An explicit matrix contains a negative entry.
    #[error("matrix entry ({from}, {to}) is negative")]
    NegativeCost {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
    },
    /// The successor relation of a search state does not describe closed routes.
    #[error("assignment for vehicle {vehicle} is corrupt: {reason}")]
    CorruptAssignment {
        /// Vehicle whose chain could not be walked.
        vehicle: usize,
        /// What went wrong.
        reason: &'static str,
    },
    /// A route index is not in `0..num_vehicles`.
    #[error("route {route} does not exist ({num_routes} routes)")]
    RouteOutOfRange {
        /// Requested route index.
        route: usize,
        /// Number of routes.
        num_routes: usize,
    },
    /// A stop index is not in `0..num_stops`.
    #[error("stop index {stop} is out of range")]
    StopOutOfRange {
        /// Requested stop index.
        stop: usize,
    },
    /// The stop is already placed on some route.
    #[error("stop {stop} is already on route {route}")]
    StopAlreadyPlaced {
        /// Stop index.
        stop: usize,
        /// Route that already holds it.
        route: usize,
    },
    /// The depot cannot be appended as an intermediate stop.
    #[error("the depot cannot be added as a stop")]
    DepotNotAllowed,
    /// No strategy produced a feasible plan.
    #[error("no feasible plan found")]
    NoFeasiblePlan,
    /// A network document could not be parsed.
    #[error("malformed network input: {0}")]
    InvalidInput(String),
    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;
