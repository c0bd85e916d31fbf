//! WGS84 coordinates and the search window derived from them.

use geo::{Coord, Rect};

/// Half-width of the square search window, in degrees (roughly 5.5 km).
pub const SEARCH_HALF_WIDTH_DEGREES: f64 = 0.05;

/// A point on the globe in WGS84 degrees.
///
/// Values are taken as supplied by the caller; no range validation happens
/// here.
///
/// # Examples
/// ```
/// use loofinder_core::Location;
///
/// let location = Location::new(1.2834, 103.8607);
/// let bounds = location.search_bounds();
/// assert!(bounds.min().y < location.latitude);
/// assert!(bounds.max().x > location.longitude);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Location {
    /// Construct a location from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Square bounding box centred on this location.
    ///
    /// Coordinates are WGS84 with `x = longitude` and `y = latitude`, so
    /// `min()` is the south-west corner and `max()` the north-east corner.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the search window is an offset in degrees"
    )]
    pub fn search_bounds(&self) -> Rect<f64> {
        Rect::new(
            Coord {
                x: self.longitude - SEARCH_HALF_WIDTH_DEGREES,
                y: self.latitude - SEARCH_HALF_WIDTH_DEGREES,
            },
            Coord {
                x: self.longitude + SEARCH_HALF_WIDTH_DEGREES,
                y: self.latitude + SEARCH_HALF_WIDTH_DEGREES,
            },
        )
    }
}

impl From<Location> for Coord<f64> {
    fn from(location: Location) -> Self {
        Self {
            x: location.longitude,
            y: location.latitude,
        }
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.y, coord.x)
    }
}
