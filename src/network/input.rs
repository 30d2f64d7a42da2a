//! Clean network data handed over by the ingestion layer.

use serde::{Deserialize, Serialize};

use super::{Graph, GraphBuilder, Stop};
use crate::error::{Result, RoutingError};

/// One known road segment. `weight: None` means "no direct edge".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Source stop identifier.
    pub from: u32,
    /// Target stop identifier.
    pub to: u32,
    /// Travel time, or `None` for a missing entry.
    pub weight: Option<f64>,
}

/// Stop table plus partial directed adjacency.
///
/// This is the boundary with the (external) spreadsheet ingestion layer: name
/// resolution and numeric coercion happen there. Anything that still is not
/// clean when it reaches this type is rejected by [`NetworkInput::into_graph`].
///
/// # Examples
///
/// ```
/// use depot_routing::network::NetworkInput;
///
/// let json = r#"{
///     "stops": [
///         {"id": 1, "label": "Depot", "latitude": 41.0, "longitude": 2.0},
///         {"id": 2, "label": "School", "latitude": 41.1, "longitude": 2.1}
///     ],
///     "connections": [
///         {"from": 1, "to": 2, "weight": 120.0},
///         {"from": 2, "to": 1, "weight": null}
///     ]
/// }"#;
/// let input = NetworkInput::from_json(json).unwrap();
/// let graph = input.into_graph().unwrap();
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInput {
    /// All stops, in the order they will be indexed.
    pub stops: Vec<Stop>,
    /// Known directed segments.
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl NetworkInput {
    /// Parses a JSON document. Non-numeric weights fail here.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RoutingError::InvalidInput(e.to_string()))
    }

    /// Validates the data and builds the graph.
    pub fn into_graph(self) -> Result<Graph> {
        let mut builder = GraphBuilder::new();
        for stop in self.stops {
            builder.add_stop(stop)?;
        }
        for c in self.connections {
            match c.weight {
                Some(w) => {
                    builder.add_edge(c.from, c.to, w)?;
                }
                None => {
                    // Missing entries still must name known stops, once.
                    builder.add_edge(c.from, c.to, 0.0)?;
                }
            }
        }
        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NetworkInput {
        NetworkInput {
            stops: vec![Stop::bare(1), Stop::bare(2), Stop::bare(3)],
            connections: vec![
                Connection { from: 1, to: 2, weight: Some(4.0) },
                Connection { from: 2, to: 3, weight: Some(5.0) },
                Connection { from: 3, to: 1, weight: None },
            ],
        }
    }

    #[test]
    fn test_into_graph() {
        let g = input().into_graph().expect("clean input");
        assert_eq!(g.num_stops(), 3);
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.weight(1, 2), Some(5.0));
    }

    #[test]
    fn test_unresolved_endpoint_rejected() {
        let mut i = input();
        i.connections.push(Connection { from: 1, to: 42, weight: None });
        assert_eq!(i.into_graph().err(), Some(RoutingError::UnknownStop { id: 42 }));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut i = input();
        i.connections[0].weight = Some(-3.0);
        assert!(matches!(
            i.into_graph(),
            Err(RoutingError::InvalidWeight { from: 1, to: 2, .. })
        ));
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        let json = r#"{"stops":[{"id":1,"label":"a","latitude":0,"longitude":0}],
            "connections":[{"from":1,"to":1,"weight":"-"}]}"#;
        assert!(matches!(
            NetworkInput::from_json(json),
            Err(RoutingError::InvalidInput(_))
        ));
    }

    fn two_stops(connections: Vec<Connection>) -> NetworkInput {
        NetworkInput {
            stops: vec![Stop::bare(1), Stop::bare(2)],
            connections,
        }
    }

    #[test]
    fn test_pair_given_twice_with_missing_weight_rejected() {
        let duplicate = Some(RoutingError::DuplicateEdge { from: 1, to: 2 });
        let cases = [
            [Some(4.0), None],
            [Some(4.0), Some(0.0)],
            [None, Some(4.0)],
            [None, None],
        ];
        for weights in cases {
            let connections = weights
                .iter()
                .map(|&weight| Connection { from: 1, to: 2, weight })
                .collect();
            let err = two_stops(connections).into_graph().err();
            assert_eq!(err, duplicate, "{weights:?}");
        }
    }

    #[test]
    fn test_missing_connections_field() {
        let json = r#"{"stops":[{"id":1,"label":"a","latitude":0,"longitude":0}]}"#;
        let i = NetworkInput::from_json(json).expect("connections default to empty");
        assert!(i.connections.is_empty());
    }
}
