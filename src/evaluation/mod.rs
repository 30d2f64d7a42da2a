//! Solution verification.

mod evaluator;

pub use evaluator::{SolutionChecker, Violation, ViolationType};
