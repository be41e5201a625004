//! Great-circle distance, adapted from the [geo] crate's haversine
//! routines but pinned to the 6,371 km mean Earth radius used throughout
//! this workspace.
//!
//! [geo](https://github.com/georust/geo)

use geo::Point;

/// Mean Earth radius in meters.
pub(crate) const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two lon/lat points in degrees.
pub(crate) fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let k = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * k.sqrt().asin() * EARTH_RADIUS_M
}
