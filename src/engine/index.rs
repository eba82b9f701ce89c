//! Mapping between location nodes and engine routing indices.

use crate::error::{Result, RoutingError};

/// Converts between location nodes and routing indices.
///
/// Every non-depot node gets one routing index, in ascending node order.
/// Each vehicle then gets a start index followed, after all starts, by an
/// end index; both map back to the depot node.
///
/// ```text
/// [visit 0 .. visit n-2 | start 0 .. start v-1 | end 0 .. end v-1]
/// ```
///
/// # Examples
///
/// ```
/// use grid_routing::engine::IndexManager;
///
/// let manager = IndexManager::new(3, 2, 0).unwrap();
/// assert_eq!(manager.num_indices(), 2 + 2 * 2);
/// assert_eq!(manager.index_to_node(0), 1);
/// assert_eq!(manager.index_to_node(manager.start(1)), 0);
/// assert!(manager.is_end(manager.end(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexManager {
    node_count: usize,
    vehicle_count: usize,
    depot: usize,
}

impl IndexManager {
    /// Creates an index manager.
    pub fn new(node_count: usize, vehicle_count: usize, depot: usize) -> Result<Self> {
        if depot >= node_count {
            return Err(RoutingError::InvalidConfiguration(format!(
                "depot index {depot} out of range for {node_count} nodes"
            )));
        }
        if vehicle_count == 0 {
            return Err(RoutingError::InvalidConfiguration(
                "routing model needs at least one vehicle".into(),
            ));
        }
        Ok(Self {
            node_count,
            vehicle_count,
            depot,
        })
    }

    /// Number of location nodes, depot included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Depot node.
    pub fn depot(&self) -> usize {
        self.depot
    }

    /// Number of routing indices that must be visited (non-depot nodes).
    pub fn num_visits(&self) -> usize {
        self.node_count - 1
    }

    /// Total number of routing indices.
    pub fn num_indices(&self) -> usize {
        self.num_visits() + 2 * self.vehicle_count
    }

    /// Start index of `vehicle`.
    pub fn start(&self, vehicle: usize) -> usize {
        self.num_visits() + vehicle
    }

    /// End index of `vehicle`.
    pub fn end(&self, vehicle: usize) -> usize {
        self.num_visits() + self.vehicle_count + vehicle
    }

    /// Returns `true` if `index` is a vehicle start.
    pub fn is_start(&self, index: usize) -> bool {
        (self.num_visits()..self.num_visits() + self.vehicle_count).contains(&index)
    }

    /// Returns `true` if `index` is a vehicle end.
    pub fn is_end(&self, index: usize) -> bool {
        index >= self.num_visits() + self.vehicle_count && index < self.num_indices()
    }

    /// Location node behind a routing index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn index_to_node(&self, index: usize) -> usize {
        assert!(index < self.num_indices(), "routing index {index} out of range");
        if index >= self.num_visits() {
            self.depot
        } else if index < self.depot {
            index
        } else {
            index + 1
        }
    }

    /// Routing index of a non-depot node; `None` for the depot.
    pub fn node_to_index(&self, node: usize) -> Option<usize> {
        match node {
            n if n == self.depot || n >= self.node_count => None,
            n if n < self.depot => Some(n),
            n => Some(n - 1),
        }
    }
}
