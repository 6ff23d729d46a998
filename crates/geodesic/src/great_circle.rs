//! Great-circle distances on a spherical Earth.

use crate::LatLon;

/// Mean Earth radius in kilometers.
///
/// This is the single authoritative radius for every distance computed in
/// this workspace. Mixing radii, or mixing spherical and ellipsoidal
/// formulas, across one dataset would make the resulting distances
/// incomparable.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two coordinates, in
/// kilometers, using the haversine formula.
///
/// The haversine formula stays numerically stable for the small separations
/// typical of site catalogs, where the spherical law of cosines loses
/// precision.
///
/// The result is exactly symmetric in its arguments, never negative for
/// finite inputs, and zero (within 1e-9 km of rounding in the trig
/// evaluation) for coincident coordinates. A NaN or infinite input
/// propagates to a non-finite result rather than an error.
///
/// # Examples
///
/// ```
/// use geodesic::{haversine, LatLon};
///
/// let tower = LatLon::new(48.8583, 2.2945);
/// let arch = LatLon::new(48.8738, 2.2950);
///
/// let distance = haversine(tower, arch);
/// assert!((distance - 1.72).abs() < 0.01);
/// ```
///
/// # References
///
/// * [Haversine formula](https://en.wikipedia.org/wiki/Haversine_formula)
#[must_use]
pub fn haversine(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `h` past 1 for near-antipodal pairs; the clamp keeps
    // `1 - h` out of negative-sqrt territory.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
