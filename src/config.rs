//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Search parameters shared by every strategy attempt.
///
/// Defaults follow the production planner: a 20 second budget per strategy
/// and strategies run in parallel.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use depot_routing::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_time_budget(Duration::from_millis(500))
///     .with_seed(7);
/// assert_eq!(config.time_budget, Duration::from_millis(500));
///
/// let parsed = SolverConfig::from_json(r#"{"time_budget": {"secs": 2, "nanos": 0}}"#).unwrap();
/// assert_eq!(parsed.time_budget, Duration::from_secs(2));
/// assert!(parsed.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Wall-clock budget for the improvement phase of one strategy.
    pub time_budget: Duration,
    /// Upper bound on guided local search penalty rounds.
    pub max_rounds: Option<usize>,
    /// Penalty rounds without a new best before the search is converged.
    pub max_stalled_rounds: usize,
    /// Penalty weight as a fraction of the average arc cost of the first
    /// local optimum.
    pub lambda_coefficient: f64,
    /// Seed for the neighbourhood scan order.
    pub seed: u64,
    /// Run strategies on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(20),
            max_rounds: None,
            max_stalled_rounds: 200,
            lambda_coefficient: 0.1,
            seed: 0,
            parallel: true,
        }
    }
}

impl SolverConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RoutingError::Config(e.to_string()))
    }

    /// Sets the per-strategy time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Caps the number of penalty rounds.
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Sets how many fruitless penalty rounds end the search.
    pub fn with_max_stalled_rounds(mut self, rounds: usize) -> Self {
        self.max_stalled_rounds = rounds;
        self
    }

    /// Sets the penalty weight coefficient.
    pub fn with_lambda_coefficient(mut self, coefficient: f64) -> Self {
        self.lambda_coefficient = coefficient;
        self
    }

    /// Sets the scan-order seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel strategy runs.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SolverConfig::default();
        assert_eq!(c.time_budget, Duration::from_secs(20));
        assert_eq!(c.max_rounds, None);
        assert_eq!(c.max_stalled_rounds, 200);
        assert!(c.parallel);
    }

    #[test]
    fn test_builder() {
        let c = SolverConfig::default()
            .with_max_rounds(10)
            .with_max_stalled_rounds(3)
            .with_lambda_coefficient(0.3)
            .with_parallel(false);
        assert_eq!(c.max_rounds, Some(10));
        assert_eq!(c.max_stalled_rounds, 3);
        assert_eq!(c.lambda_coefficient, 0.3);
        assert!(!c.parallel);
    }

    #[test]
    fn test_json_roundtrip_and_defaults() {
        let c = SolverConfig::from_json(r#"{"seed": 42, "parallel": false}"#).expect("valid");
        assert_eq!(c.seed, 42);
        assert!(!c.parallel);
        assert_eq!(c.max_stalled_rounds, 200);
        let json = serde_json::to_string(&c).expect("ser");
        assert_eq!(SolverConfig::from_json(&json).expect("valid"), c);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            SolverConfig::from_json(r#"{"seed": "abc"}"#),
            Err(RoutingError::Config(_))
        ));
    }
}
