//! Location and edge types.

use serde::{Deserialize, Serialize};

/// A named place in the relief network.
///
/// Each location may hold supply (units available to send), demand (units it
/// needs to receive), or both.
///
/// # Examples
///
/// ```
/// use u_relief::models::Location;
///
/// let depot = Location::source("Depot", 40);
/// assert_eq!(depot.supply(), 40);
/// assert_eq!(depot.demand(), 0);
///
/// let village = Location::sink("Riverside", 15);
/// assert_eq!(village.name(), "Riverside");
/// assert_eq!(village.demand(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    supply: u32,
    demand: u32,
}

impl Location {
    /// Creates a location with the given supply and demand.
    pub fn new(name: impl Into<String>, supply: u32, demand: u32) -> Self {
        Self {
            name: name.into(),
            supply,
            demand,
        }
    }

    /// Creates a pure supply point (demand = 0).
    pub fn source(name: impl Into<String>, supply: u32) -> Self {
        Self::new(name, supply, 0)
    }

    /// Creates a pure demand point (supply = 0).
    pub fn sink(name: impl Into<String>, demand: u32) -> Self {
        Self::new(name, 0, demand)
    }

    /// Display name, unique within a network.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units available at this location.
    pub fn supply(&self) -> u32 {
        self.supply
    }

    /// Units this location needs.
    pub fn demand(&self) -> u32 {
        self.demand
    }
}

/// An undirected weighted connection between two locations.
///
/// Parallel edges are allowed; the shortest one wins during path search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint (location index).
    pub from: usize,
    /// Other endpoint (location index).
    pub to: usize,
    /// Travel distance along this edge.
    pub weight: u32,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: usize, to: usize, weight: u32) -> Self {
        Self { from, to, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_new() {
        let l = Location::new("Hub", 12, 3);
        assert_eq!(l.name(), "Hub");
        assert_eq!(l.supply(), 12);
        assert_eq!(l.demand(), 3);
    }

    #[test]
    fn test_location_source_sink() {
        let s = Location::source("Warehouse", 50);
        assert_eq!((s.supply(), s.demand()), (50, 0));

        let d = Location::sink("Shelter", 8);
        assert_eq!((d.supply(), d.demand()), (0, 8));
    }

    #[test]
    fn test_edge_new() {
        let e = Edge::new(0, 2, 7);
        assert_eq!(e.from, 0);
        assert_eq!(e.to, 2);
        assert_eq!(e.weight, 7);
    }
}
