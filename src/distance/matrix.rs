//! Dense Manhattan distance matrix.

use super::TransitCost;
use crate::error::{Result, RoutingError};
use crate::models::Geography;

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Built once from a [`Geography`] using the city-block metric and read-only
/// afterwards.
///
/// # Examples
///
/// ```
/// use grid_routing::models::{Geography, ScaleFactor};
/// use grid_routing::distance::DistanceMatrix;
///
/// let scale = ScaleFactor::new(114, 80).unwrap();
/// let geo = Geography::new(&[(4, 4), (2, 0), (8, 0)], scale, 1).unwrap();
/// let dm = DistanceMatrix::manhattan(&geo);
/// assert_eq!(dm.distance_between(0, 1), 2 * 114 + 4 * 80);
/// assert_eq!(dm.location_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Precomputes all pairwise Manhattan distances of a geography.
    pub fn manhattan(geography: &Geography) -> Self {
        let locations = geography.locations();
        let n = locations.len();
        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].manhattan_distance_to(&locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Rejects tables with the wrong length, negative entries or a non-zero
    /// diagonal.
    pub fn from_data(size: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RoutingError::InvalidConfiguration(format!(
                "expected {} distances for {size} locations, got {}",
                size * size,
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|&d| d < 0) {
            return Err(RoutingError::InvalidConfiguration(format!(
                "negative distance {} from {} to {}",
                data[pos],
                pos / size,
                pos % size
            )));
        }
        if let Some(i) = (0..size).find(|&i| data[i * size + i] != 0) {
            return Err(RoutingError::InvalidConfiguration(format!(
                "distance from location {i} to itself must be zero"
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance_between(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn location_count(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| self.distance_between(i, j) == self.distance_between(j, i))
        })
    }

    /// Longest depot round trip to a single location.
    ///
    /// No route through that location can be shorter, so a per-vehicle budget
    /// below this value cannot be satisfied.
    pub fn max_round_trip(&self, depot: usize) -> i64 {
        (0..self.size)
            .map(|i| {
                self.distance_between(depot, i)
                    .saturating_add(self.distance_between(i, depot))
            })
            .max()
            .unwrap_or(0)
    }
}

impl TransitCost for DistanceMatrix {
    fn transit(&self, from: usize, to: usize) -> i64 {
        self.distance_between(from, to)
    }

    fn node_count(&self) -> usize {
        self.size
    }
}
