use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, used by the haversine computation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface in signed decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]. Values
/// outside those ranges are not rejected here; sanitising input is the
/// caller's job and the formula simply degrades for nonsense coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle surface distance between two points, in meters.
///
/// Haversine over the mean Earth radius. Identical points yield exactly 0;
/// antipodal points approach `π · EARTH_RADIUS_M`.
pub fn haversine_distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Rounds a distance to two decimals for display. Threshold comparisons must
/// happen on the unrounded value.
pub fn round_for_display(distance_m: f64) -> f64 {
    (distance_m * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn identical_points_are_zero_meters_apart() {
        let p = GeoPoint::new(18.0060, -76.7468);
        assert_eq!(haversine_distance_m(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(18.0060, -76.7468);
        let b = GeoPoint::new(18.0160, -76.7400);
        assert_eq!(haversine_distance_m(a, b), haversine_distance_m(b, a));
    }

    #[test]
    fn hundred_meters_of_latitude() {
        // 0.0009 degrees of latitude is roughly 100m on the surface.
        let a = GeoPoint::new(18.0, -76.0);
        let b = GeoPoint::new(18.0009, -76.0);
        let d = haversine_distance_m(a, b);
        assert!((d - 100.0).abs() < 5.0, "expected ~100m, got {d}");
    }

    #[test]
    fn antipodal_points_approach_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        let d = haversine_distance_m(a, b);
        assert!((d - PI * EARTH_RADIUS_M).abs() < 1.0);
    }

    #[test]
    fn kingston_campus_offset() {
        // One hundredth of a degree due north of the registered venue.
        let venue = GeoPoint::new(18.0060, -76.7468);
        let student = GeoPoint::new(18.0160, -76.7468);
        let d = haversine_distance_m(venue, student);
        assert!((1100.0..1120.0).contains(&d), "expected ~1.11km, got {d}");
    }

    #[test]
    fn display_rounding_keeps_two_decimals() {
        assert_eq!(round_for_display(142.3456), 142.35);
        assert_eq!(round_for_display(0.0), 0.0);
    }
}
