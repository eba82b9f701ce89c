//! Location and grid scale types.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A point in real-world units (meters).
///
/// # Examples
///
/// ```
/// use grid_routing::models::Location;
///
/// let a = Location::new(0, 0);
/// let b = Location::new(228, 80);
/// assert_eq!(a.manhattan_distance_to(&b), 308);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    x: i64,
    y: i64,
}

impl Location {
    /// Creates a location at the given coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// X-coordinate in meters.
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Y-coordinate in meters.
    pub fn y(&self) -> i64 {
        self.y
    }

    /// City-block distance to another location.
    pub fn manhattan_distance_to(&self, other: &Location) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Meters per grid unit along each axis.
///
/// # Examples
///
/// ```
/// use grid_routing::models::ScaleFactor;
///
/// let scale = ScaleFactor::new(114, 80).unwrap();
/// let loc = scale.apply((2, 3)).unwrap();
/// assert_eq!((loc.x(), loc.y()), (228, 240));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleFactor {
    block_width: i64,
    block_height: i64,
}

impl ScaleFactor {
    /// Creates a scale factor.
    ///
    /// Both components must be strictly positive.
    pub fn new(block_width: i64, block_height: i64) -> Result<Self> {
        if block_width <= 0 || block_height <= 0 {
            return Err(RoutingError::InvalidConfiguration(format!(
                "scale factor must be positive, got ({block_width}, {block_height})"
            )));
        }
        Ok(Self {
            block_width,
            block_height,
        })
    }

    /// Identity scale (one meter per grid unit).
    pub fn unit() -> Self {
        Self {
            block_width: 1,
            block_height: 1,
        }
    }

    /// Meters per grid unit along x.
    pub fn block_width(&self) -> i64 {
        self.block_width
    }

    /// Meters per grid unit along y.
    pub fn block_height(&self) -> i64 {
        self.block_height
    }

    /// Converts a raw grid coordinate into meters.
    pub fn apply(&self, (raw_x, raw_y): (i64, i64)) -> Result<Location> {
        let x = raw_x.checked_mul(self.block_width);
        let y = raw_y.checked_mul(self.block_height);
        match (x, y) {
            (Some(x), Some(y)) => Ok(Location::new(x, y)),
            _ => Err(RoutingError::InvalidConfiguration(format!(
                "grid coordinate ({raw_x}, {raw_y}) overflows when scaled"
            ))),
        }
    }
}
