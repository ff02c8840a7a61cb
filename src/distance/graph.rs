//! Weighted undirected graph with Dijkstra shortest paths.
//!
//! # Algorithm
//!
//! Single-source distances use Dijkstra's algorithm over a binary min-heap
//! with lazy deletion: a node is pushed again each time its tentative
//! distance improves, and stale heap entries are skipped when popped.
//!
//! All-pairs distances run one search per node.
//!
//! # Complexity
//!
//! O(E log V) per source, O(V · E log V) for the full matrix.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::matrix::{DistanceMatrix, UNREACHABLE};
use crate::error::{ReliefError, Result};
use crate::models::Edge;

/// An adjacency entry: the node at the other end and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// Adjacent node.
    pub node: usize,
    /// Weight of the connecting edge.
    pub weight: u32,
}

/// A weighted undirected graph over `V` locations.
///
/// Edge weights are unsigned, so the non-negativity Dijkstra needs holds by
/// construction. Parallel edges are kept as-is.
///
/// # Examples
///
/// ```
/// use u_relief::distance::{ShortestPathGraph, UNREACHABLE};
///
/// let mut g = ShortestPathGraph::new(4);
/// g.add_edge(0, 1, 5).unwrap();
/// g.add_edge(1, 2, 3).unwrap();
///
/// let dist = g.single_source_distances(0);
/// assert_eq!(dist, vec![0, 5, 8, UNREACHABLE]);
///
/// let dm = g.all_pairs_distances();
/// assert_eq!(dm.get(2, 0), 8);
/// ```
#[derive(Debug, Clone)]
pub struct ShortestPathGraph {
    adjacency: Vec<Vec<Neighbor>>,
    num_edges: usize,
}

impl ShortestPathGraph {
    /// Creates a graph with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_nodes],
            num_edges: 0,
        }
    }

    /// Adds an undirected edge between `u` and `v`.
    ///
    /// Returns an error if either endpoint is out of range.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: u32) -> Result<()> {
        let len = self.num_nodes();
        for index in [u, v] {
            if index >= len {
                return Err(ReliefError::LocationOutOfRange { index, len });
            }
        }
        self.insert(Edge::new(u, v, weight));
        Ok(())
    }

    /// Adds an edge whose endpoints are already known to be in range.
    pub(crate) fn insert(&mut self, edge: Edge) {
        self.adjacency[edge.from].push(Neighbor {
            node: edge.to,
            weight: edge.weight,
        });
        self.adjacency[edge.to].push(Neighbor {
            node: edge.from,
            weight: edge.weight,
        });
        self.num_edges += 1;
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added (parallel edges counted separately).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Adjacency list of `u`, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `u` is out of range.
    pub fn neighbors(&self, u: usize) -> &[Neighbor] {
        &self.adjacency[u]
    }

    /// Shortest distance from `src` to every node.
    ///
    /// Unreached nodes are marked [`UNREACHABLE`].
    ///
    /// # Panics
    ///
    /// Panics if `src` is out of range.
    pub fn single_source_distances(&self, src: usize) -> Vec<u64> {
        let n = self.num_nodes();
        assert!(src < n, "source {src} out of range for {n} nodes");

        let mut dist = vec![UNREACHABLE; n];
        let mut heap = BinaryHeap::new();
        dist[src] = 0;
        heap.push(Reverse((0u64, src)));

        let mut settled = 0usize;
        while let Some(Reverse((d, u))) = heap.pop() {
            if d > dist[u] {
                continue;
            }
            settled += 1;
            for nb in &self.adjacency[u] {
                let candidate = d.saturating_add(u64::from(nb.weight));
                if candidate < dist[nb.node] {
                    dist[nb.node] = candidate;
                    heap.push(Reverse((candidate, nb.node)));
                }
            }
        }

        trace!(src, settled, "dijkstra finished");
        dist
    }

    /// Shortest distances between every pair of nodes.
    pub fn all_pairs_distances(&self) -> DistanceMatrix {
        let n = self.num_nodes();
        let mut dm = DistanceMatrix::new(n);
        for src in 0..n {
            for (dst, d) in self.single_source_distances(src).into_iter().enumerate() {
                dm.set(src, dst, d);
            }
        }
        debug!(nodes = n, edges = self.num_edges, "all-pairs distances computed");
        dm
    }
}
