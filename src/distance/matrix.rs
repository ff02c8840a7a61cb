//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::ReliefError;

/// Sentinel distance for location pairs with no connecting path.
pub const UNREACHABLE: u64 = u64::MAX;

/// A dense n×n shortest-distance matrix stored in row-major order.
///
/// Entries are path lengths in edge-weight units, or [`UNREACHABLE`].
///
/// # Examples
///
/// ```
/// use u_relief::distance::{DistanceMatrix, UNREACHABLE};
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0, 5, UNREACHABLE],
///     vec![5, 0, UNREACHABLE],
///     vec![UNREACHABLE, UNREACHABLE, 0],
/// ])
/// .unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.distance(0, 2), None);
/// assert!(dm.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

#[derive(Deserialize)]
struct RawMatrix {
    data: Vec<u64>,
    size: usize,
}

impl TryFrom<RawMatrix> for DistanceMatrix {
    type Error = ReliefError;

    fn try_from(raw: RawMatrix) -> Result<Self, ReliefError> {
        let found = raw.data.len();
        let expected = raw.size.saturating_mul(raw.size);
        Self::from_data(raw.size, raw.data).ok_or(ReliefError::LengthMismatch {
            field: "data",
            expected,
            found,
        })
    }
}

impl DistanceMatrix {
    /// Creates a matrix where every location reaches only itself.
    pub fn new(size: usize) -> Self {
        let mut data = vec![UNREACHABLE; size * size];
        for i in 0..size {
            data[i * size + i] = 0;
        }
        Self { data, size }
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<u64>) -> Option<Self> {
        if size.checked_mul(size) != Some(data.len()) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from one row per source location.
    ///
    /// Returns `None` if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
    }

    /// Returns the raw distance from `from` to `to`, possibly [`UNREACHABLE`].
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        assert!(
            from < self.size && to < self.size,
            "location ({from}, {to}) out of range for {} locations",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Returns the distance from `from` to `to`, or `None` if unreachable.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> Option<u64> {
        let d = self.get(from, to);
        (d != UNREACHABLE).then_some(d)
    }

    /// Sets the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: u64) {
        assert!(
            from < self.size && to < self.size,
            "location ({from}, {to}) out of range for {} locations",
            self.size
        );
        self.data[from * self.size + to] = distance;
    }

    /// Distances from `from` to every location.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of bounds.
    pub fn row(&self, from: usize) -> &[u64] {
        assert!(
            from < self.size,
            "location {from} out of range for {} locations",
            self.size
        );
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// All ordered pairs `(u, v)` with `u != v` joined by some path.
    pub fn reachable_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for u in 0..self.size {
            for v in 0..self.size {
                if u != v && self.get(u, v) != UNREACHABLE {
                    pairs.push((u, v));
                }
            }
        }
        pairs
    }
}
