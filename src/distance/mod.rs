//! Shortest-path distances over a location network.
//!
//! Provides a weighted undirected graph with Dijkstra search and the dense
//! all-pairs distance matrix it produces.

mod graph;
mod matrix;

pub use graph::{Neighbor, ShortestPathGraph};
pub use matrix::{DistanceMatrix, UNREACHABLE};
