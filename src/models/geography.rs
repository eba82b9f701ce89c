//! Depot, delivery locations and fleet size.

use super::{Location, ScaleFactor};
use crate::error::{Result, RoutingError};

/// A routing instance's geography: scaled locations plus fleet size.
///
/// Location 0 is always the depot. Raw grid coordinates are scaled exactly
/// once, here; only the scaled coordinates are kept.
///
/// # Examples
///
/// ```
/// use grid_routing::models::{Geography, ScaleFactor};
///
/// let scale = ScaleFactor::new(114, 80).unwrap();
/// let geo = Geography::new(&[(4, 4), (2, 0), (8, 0)], scale, 2).unwrap();
/// assert_eq!(geo.location_count(), 3);
/// assert_eq!(geo.vehicle_count(), 2);
/// assert_eq!(geo.depot_index(), 0);
/// assert_eq!(geo.coordinate_of(1).map(|l| (l.x(), l.y())), Some((228, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct Geography {
    locations: Vec<Location>,
    vehicles: usize,
}

impl Geography {
    /// Index of the depot location.
    pub const DEPOT: usize = 0;

    /// Builds a geography from raw grid coordinates.
    ///
    /// Fails with [`RoutingError::InvalidConfiguration`] when the list is
    /// empty (no depot), the fleet is empty, a coordinate overflows, or two
    /// locations are too far apart for their distance to fit in an `i64`.
    pub fn new(raw: &[(i64, i64)], scale: ScaleFactor, vehicles: usize) -> Result<Self> {
        if raw.len() <= Self::DEPOT {
            return Err(RoutingError::InvalidConfiguration(format!(
                "depot index {} out of range for {} locations",
                Self::DEPOT,
                raw.len()
            )));
        }
        if vehicles == 0 {
            return Err(RoutingError::InvalidConfiguration(
                "fleet must contain at least one vehicle".into(),
            ));
        }

        let locations = raw
            .iter()
            .map(|&point| scale.apply(point))
            .collect::<Result<Vec<_>>>()?;
        check_extent(&locations)?;

        Ok(Self {
            locations,
            vehicles,
        })
    }

    /// Builds a geography from coordinates already expressed in meters.
    pub fn from_locations(locations: Vec<Location>, vehicles: usize) -> Result<Self> {
        let raw: Vec<(i64, i64)> = locations.iter().map(|l| (l.x(), l.y())).collect();
        Self::new(&raw, ScaleFactor::unit(), vehicles)
    }

    /// Number of locations, depot included.
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of vehicles in the fleet.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles
    }

    /// Depot location index (always 0).
    pub fn depot_index(&self) -> usize {
        Self::DEPOT
    }

    /// Scaled coordinate of location `index`, if it exists.
    pub fn coordinate_of(&self, index: usize) -> Option<Location> {
        self.locations.get(index).copied()
    }

    /// All scaled locations in index order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}

/// Rejects layouts whose bounding box has a Manhattan diameter beyond `i64`.
fn check_extent(locations: &[Location]) -> Result<()> {
    let xs = axis_span(locations.iter().map(Location::x));
    let ys = axis_span(locations.iter().map(Location::y));
    xs.zip(ys)
        .and_then(|(dx, dy)| dx.checked_add(dy))
        .map(|_| ())
        .ok_or_else(|| {
            RoutingError::InvalidConfiguration(
                "locations are too far apart to measure in meters".into(),
            )
        })
}

fn axis_span(values: impl Iterator<Item = i64> + Clone) -> Option<i64> {
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);
    max.checked_sub(min)
}
