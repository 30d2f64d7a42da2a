//! Stop type.

use serde::{Deserialize, Serialize};

/// A stop in the road network.
///
/// The identifier is what callers use to reference the stop; the label and
/// position are presentation metadata that the solver never reads.
///
/// # Examples
///
/// ```
/// use depot_routing::network::Stop;
///
/// let s = Stop::new(9, "Central garage", 41.38, 2.17);
/// assert_eq!(s.id(), 9);
/// assert_eq!(s.label(), "Central garage");
/// assert_eq!(s.position(), (41.38, 2.17));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: u32,
    label: String,
    latitude: f64,
    longitude: f64,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(id: u32, label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            label: label.into(),
            latitude,
            longitude,
        }
    }

    /// Creates an unlabelled stop at the origin.
    pub fn bare(id: u32) -> Self {
        Self::new(id, format!("ID {id}"), 0.0, 0.0)
    }

    /// Stop identifier.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `(latitude, longitude)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub(crate) fn has_finite_position(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new(3, "Market", 1.5, -2.5);
        assert_eq!(s.id(), 3);
        assert_eq!(s.label(), "Market");
        assert_eq!(s.latitude(), 1.5);
        assert_eq!(s.longitude(), -2.5);
        assert!(s.has_finite_position());
    }

    #[test]
    fn test_stop_bare() {
        let s = Stop::bare(12);
        assert_eq!(s.label(), "ID 12");
        assert_eq!(s.position(), (0.0, 0.0));
    }

    #[test]
    fn test_stop_non_finite() {
        assert!(!Stop::new(1, "x", f64::NAN, 0.0).has_finite_position());
        assert!(!Stop::new(1, "x", 0.0, f64::INFINITY).has_finite_position());
    }
}
