//! Construction strategy catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Named construction heuristic used to build a first solution.
///
/// Plain configuration data: the solver dispatches on the variant.
///
/// # Examples
///
/// ```
/// use depot_routing::models::FirstSolutionStrategy;
///
/// assert_eq!(FirstSolutionStrategy::CATALOG.len(), 12);
/// assert_eq!(FirstSolutionStrategy::Savings.label(), "Savings");
/// assert_eq!(
///     FirstSolutionStrategy::display_names()[2],
///     "Solution 3 - Savings"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Fill vehicles one at a time, always following the cheapest arc.
    PathCheapestArc,
    /// Like path-cheapest-arc but prefers the stop with fewest entry arcs.
    PathMostConstrainedArc,
    /// Clarke–Wright savings.
    Savings,
    /// Spanning-tree tour split over the fleet.
    Christofides,
    /// Start with every stop unperformed and insert in input order.
    AllUnperformed,
    /// Globally cheapest (stop, position) insertion.
    BestInsertion,
    /// Seed every vehicle, then globally cheapest insertion.
    ParallelCheapestInsertion,
    /// Farthest stop first, each at its cheapest position.
    LocalCheapestInsertion,
    /// All route tails grow in parallel along the globally cheapest arc.
    GlobalCheapestArc,
    /// Route tails grow round-robin along their own cheapest arc.
    LocalCheapestArc,
    /// Assign stops in input order, filling vehicles in turn.
    FirstUnboundMinValue,
    /// Cheapest of several constructions.
    Automatic,
}

impl FirstSolutionStrategy {
    /// Every strategy, in the order runners try them.
    pub const CATALOG: [FirstSolutionStrategy; 12] = [
        Self::PathCheapestArc,
        Self::PathMostConstrainedArc,
        Self::Savings,
        Self::Christofides,
        Self::AllUnperformed,
        Self::BestInsertion,
        Self::ParallelCheapestInsertion,
        Self::LocalCheapestInsertion,
        Self::GlobalCheapestArc,
        Self::LocalCheapestArc,
        Self::FirstUnboundMinValue,
        Self::Automatic,
    ];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::PathCheapestArc => "Path Cheapest Arc",
            Self::PathMostConstrainedArc => "Path Most Constrained Arc",
            Self::Savings => "Savings",
            Self::Christofides => "Christofides",
            Self::AllUnperformed => "All Unperformed",
            Self::BestInsertion => "Best Insertion",
            Self::ParallelCheapestInsertion => "Parallel Cheapest Insertion",
            Self::LocalCheapestInsertion => "Local Cheapest Insertion",
            Self::GlobalCheapestArc => "Global Cheapest Arc",
            Self::LocalCheapestArc => "Local Cheapest Arc",
            Self::FirstUnboundMinValue => "First Unbound Min Value",
            Self::Automatic => "Automatic",
        }
    }

    /// Position in [`Self::CATALOG`].
    pub fn catalog_index(self) -> usize {
        Self::CATALOG
            .iter()
            .position(|&s| s == self)
            .unwrap_or_default()
    }

    /// Presentation labels parallel to [`Self::CATALOG`].
    pub fn display_names() -> Vec<String> {
        Self::CATALOG
            .iter()
            .enumerate()
            .map(|(i, s)| format!("Solution {} - {}", i + 1, s.label()))
            .collect()
    }
}

impl fmt::Display for FirstSolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_unique() {
        let set: HashSet<_> = FirstSolutionStrategy::CATALOG.iter().collect();
        assert_eq!(set.len(), FirstSolutionStrategy::CATALOG.len());
    }

    #[test]
    fn test_catalog_index() {
        for (i, s) in FirstSolutionStrategy::CATALOG.iter().enumerate() {
            assert_eq!(s.catalog_index(), i);
        }
    }

    #[test]
    fn test_display_names() {
        let names = FirstSolutionStrategy::display_names();
        assert_eq!(names[0], "Solution 1 - Path Cheapest Arc");
        assert_eq!(names[11], "Solution 12 - Automatic");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FirstSolutionStrategy::BestInsertion).expect("ser");
        assert_eq!(json, "\"best_insertion\"");
        let back: FirstSolutionStrategy = serde_json::from_str(&json).expect("de");
        assert_eq!(back, FirstSolutionStrategy::BestInsertion);
    }
}
