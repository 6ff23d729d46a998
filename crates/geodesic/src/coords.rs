//! Geographic coordinates in signed decimal degrees.

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in signed decimal degrees.
///
/// Latitude is conventionally in `[-90, 90]` and longitude in `[-180, 180]`,
/// but neither range is enforced here. Out-of-range finite values flow
/// through the distance math unchanged and produce well-defined, if
/// geographically meaningless, results. Range validation belongs to the
/// layer that acquires the coordinates.
///
/// # Examples
///
/// ```
/// use geodesic::LatLon;
///
/// let jakarta = LatLon::new(-6.2146, 106.8451);
///
/// assert!(jakarta.is_finite());
/// assert_eq!(jakarta, LatLon::from((-6.2146, 106.8451)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Degrees north of the equator; negative values are south.
    pub latitude: f64,
    /// Degrees east of the prime meridian; negative values are west.
    pub longitude: f64,
}

impl LatLon {
    /// Creates a coordinate pair from degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both coordinates are finite real numbers.
    ///
    /// A coordinate pair with a NaN or infinite component cannot be ranked;
    /// callers treat such a pair as a skippable catalog row or as a rejected
    /// query, never as a computable position.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for LatLon {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
