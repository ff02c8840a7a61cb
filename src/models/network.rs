//! Validated relief network.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Edge, Location};
use crate::distance::ShortestPathGraph;
use crate::error::{ReliefError, Result};

/// A validated set of locations and the undirected edges between them.
///
/// Construction checks the input contract once: at least one location,
/// distinct names, and every edge endpoint in range. Algorithms downstream
/// rely on these guarantees and do not re-check them.
///
/// # Examples
///
/// ```
/// use u_relief::models::{Edge, Location, ReliefNetwork};
///
/// let network = ReliefNetwork::new(
///     vec![Location::source("Depot", 10), Location::sink("Village", 7)],
///     vec![Edge::new(0, 1, 4)],
/// )
/// .unwrap();
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.index_of("Village"), Some(1));
/// assert_eq!(network.total_supply(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNetwork")]
pub struct ReliefNetwork {
    locations: Vec<Location>,
    edges: Vec<Edge>,
}

#[derive(Deserialize)]
struct RawNetwork {
    locations: Vec<Location>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl TryFrom<RawNetwork> for ReliefNetwork {
    type Error = ReliefError;

    fn try_from(raw: RawNetwork) -> Result<Self> {
        Self::new(raw.locations, raw.edges)
    }
}

impl ReliefNetwork {
    /// Creates a network, validating names and edge endpoints.
    pub fn new(locations: Vec<Location>, edges: Vec<Edge>) -> Result<Self> {
        if locations.is_empty() {
            return Err(ReliefError::EmptyNetwork);
        }

        let mut seen = HashSet::with_capacity(locations.len());
        for loc in &locations {
            if !seen.insert(loc.name()) {
                return Err(ReliefError::DuplicateName(loc.name().to_string()));
            }
        }

        let len = locations.len();
        for edge in &edges {
            for index in [edge.from, edge.to] {
                if index >= len {
                    return Err(ReliefError::LocationOutOfRange { index, len });
                }
            }
        }

        Ok(Self { locations, edges })
    }

    /// Builds a network from parallel per-location vectors.
    ///
    /// `edges` are `(from, to, weight)` triples over positions in `names`.
    pub fn from_parts<S: Into<String>>(
        names: Vec<S>,
        edges: Vec<(usize, usize, u32)>,
        supplies: Vec<u32>,
        demands: Vec<u32>,
    ) -> Result<Self> {
        let expected = names.len();
        for (field, found) in [("supplies", supplies.len()), ("demands", demands.len())] {
            if found != expected {
                return Err(ReliefError::LengthMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }

        let locations = names
            .into_iter()
            .zip(supplies)
            .zip(demands)
            .map(|((name, supply), demand)| Location::new(name, supply, demand))
            .collect();
        let edges = edges
            .into_iter()
            .map(|(from, to, weight)| Edge::new(from, to, weight))
            .collect();

        Self::new(locations, edges)
    }

    /// Parses and validates a network from JSON.
    ///
    /// The expected shape is
    /// `{"locations": [{"name", "supply", "demand"}...], "edges": [{"from", "to", "weight"}...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an edge between two locations identified by name.
    pub fn connect_named(&mut self, a: &str, b: &str, weight: u32) -> Result<()> {
        let from = self
            .index_of(a)
            .ok_or_else(|| ReliefError::UnknownLocation(a.to_string()))?;
        let to = self
            .index_of(b)
            .ok_or_else(|| ReliefError::UnknownLocation(b.to_string()))?;
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    /// Index of the location with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.locations.iter().position(|l| l.name() == name)
    }

    /// All locations, in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false`: a validated network has at least one location.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location names, in index order.
    pub fn names(&self) -> Vec<&str> {
        self.locations.iter().map(|l| l.name()).collect()
    }

    /// Initial supply per location.
    pub fn supplies(&self) -> Vec<u32> {
        self.locations.iter().map(|l| l.supply()).collect()
    }

    /// Demand per location.
    pub fn demands(&self) -> Vec<u32> {
        self.locations.iter().map(|l| l.demand()).collect()
    }

    /// Sum of supply across all locations.
    pub fn total_supply(&self) -> u64 {
        self.locations.iter().map(|l| u64::from(l.supply())).sum()
    }

    /// Sum of demand across all locations.
    pub fn total_demand(&self) -> u64 {
        self.locations.iter().map(|l| u64::from(l.demand())).sum()
    }

    /// Builds the shortest-path graph over this network's edges.
    pub fn graph(&self) -> ShortestPathGraph {
        let mut graph = ShortestPathGraph::new(self.len());
        for edge in &self.edges {
            graph.insert(*edge);
        }
        graph
    }
}
