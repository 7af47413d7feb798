//! Great-circle distance between WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention used throughout the engine:
//! `x = longitude` and `y = latitude`, both in degrees.

use geo::Coord;

/// Mean Earth radius in statute miles used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Return the haversine distance between `a` and `b` in miles.
///
/// The result is symmetric and non-negative. Rounding noise that would push
/// the haversine term outside `0.0..=1.0` is clamped so antipodal inputs never
/// yield `NaN`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use basket_core::geodesy::distance_miles;
///
/// let oxford = Coord { x: -89.5192, y: 34.3668 };
/// assert_eq!(distance_miles(oxford, oxford), 0.0);
///
/// let memphis = Coord { x: -90.0490, y: 35.1495 };
/// let miles = distance_miles(oxford, memphis);
/// assert!((58.0..62.0).contains(&miles));
/// ```
#[must_use]
pub fn distance_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let half_dlat = ((b.y - a.y).to_radians() / 2.0).sin();
    let half_dlng = ((b.x - a.x).to_radians() / 2.0).sin();

    let h = half_dlat * half_dlat + lat_a.cos() * lat_b.cos() * half_dlng * half_dlng;
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}

/// Sum the great-circle legs between consecutive coordinates, in miles.
///
/// Sequences shorter than two points have no legs and sum to zero.
#[must_use]
pub fn path_length_miles(points: &[Coord<f64>]) -> f64 {
    points
        .windows(2)
        .fold(0.0, |total, leg| match leg {
            [from, to] => total + distance_miles(*from, *to),
            _ => total,
        })
}
