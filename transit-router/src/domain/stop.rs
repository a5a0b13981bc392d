//! Stops and geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in metres.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A position on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in metres.
    ///
    /// Uses the spherical law of cosines. Identical points are exactly 0
    /// apart; the cosine is clamped so rounding can't push it outside the
    /// domain of `acos`.
    ///
    /// ```
    /// use transit_router::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611087, 37.20829);
    /// assert_eq!(a.distance_to(&a), 0.0);
    ///
    /// let b = Coordinates::new(55.595884, 37.209755);
    /// let d = a.distance_to(&b);
    /// assert!((d - 1693.0).abs() < 5.0);
    /// ```
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lon = (self.longitude - other.longitude).abs().to_radians();
        let cos = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();
        cos.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
    }
}

/// Dense index of a stop in catalogue enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named location in the transit network.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}
