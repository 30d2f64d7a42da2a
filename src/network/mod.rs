//! Road network model.
//!
//! Stops with presentation metadata, the sparse directed graph of known road
//! segments, and the validated input boundary used to build it.

mod graph;
mod input;
mod stop;

pub use graph::{Edge, Graph, GraphBuilder};
pub use input::{Connection, NetworkInput};
pub use stop::Stop;
