//! Per-vehicle route record.

use serde::Serialize;

/// The tour driven by one vehicle, as read back from an assignment.
///
/// `stops` holds location indices in visit order and always begins and ends
/// at the depot.
///
/// # Examples
///
/// ```
/// use grid_routing::models::VehicleRoute;
///
/// let mut route = VehicleRoute::new(0);
/// route.push_stop(0);
/// route.push_leg(2, 684);
/// route.push_leg(0, 684);
/// assert_eq!(route.stops(), &[0, 2, 0]);
/// assert_eq!(route.distance(), 1368);
/// assert_eq!(route.num_visits(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleRoute {
    vehicle: usize,
    stops: Vec<usize>,
    distance: i64,
}

impl VehicleRoute {
    /// Creates an empty route for the given vehicle.
    pub fn new(vehicle: usize) -> Self {
        Self {
            vehicle,
            stops: Vec::new(),
            distance: 0,
        }
    }

    /// Appends a stop without travel cost (the route start).
    pub fn push_stop(&mut self, node: usize) {
        self.stops.push(node);
    }

    /// Appends a stop reached over an arc of the given cost.
    pub fn push_leg(&mut self, node: usize, cost: i64) {
        self.stops.push(node);
        self.distance += cost;
    }

    /// Vehicle driving this route.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Visited location indices, depot at both ends.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Total distance traveled in meters.
    pub fn distance(&self) -> i64 {
        self.distance
    }

    /// Number of non-depot visits.
    pub fn num_visits(&self) -> usize {
        self.stops.len().saturating_sub(2)
    }

    /// Returns `true` if the vehicle never leaves the depot.
    pub fn is_empty(&self) -> bool {
        self.num_visits() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = VehicleRoute::new(3);
        assert_eq!(r.vehicle(), 3);
        assert!(r.stops().is_empty());
        assert_eq!(r.distance(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_depot_to_depot() {
        let mut r = VehicleRoute::new(0);
        r.push_stop(0);
        r.push_leg(0, 0);
        assert_eq!(r.stops(), &[0, 0]);
        assert_eq!(r.num_visits(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn test_legs_accumulate() {
        let mut r = VehicleRoute::new(1);
        r.push_stop(0);
        r.push_leg(1, 10);
        r.push_leg(2, 15);
        r.push_leg(0, 25);
        assert_eq!(r.distance(), 50);
        assert_eq!(r.num_visits(), 2);
    }
}
