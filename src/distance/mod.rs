//! Travel-time matrices.
//!
//! Turns the sparse road graph into a dense all-pairs cost matrix.

mod matrix;

pub use matrix::{DistanceMatrix, UNREACHABLE};
