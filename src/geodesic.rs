//! Great-circle distance on a spherical Earth, plus exact unit conversions.
//!
//! Distances use the haversine formula with a mean-radius sphere. This is the
//! documented contract: a spherical approximation, not an ellipsoidal
//! (geodetic) model.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Meters per statute mile, exact by definition.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Meters per yard, exact by definition.
pub const METERS_PER_YARD: f64 = 0.9144;

/// Great-circle (surface) distance in meters between two points given as
/// latitude/longitude pairs in degrees.
///
/// Works across the antimeridian and at the poles: the haversine formula only
/// sees the longitude *difference* through `sin²(Δλ/2)`, which is periodic.
pub fn great_circle_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    // Rounding can push sqrt(a) slightly past 1 for near-antipodal pairs,
    // which would make asin return NaN. The clamp is mandatory.
    2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
}

/// Convert statute miles to meters.
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Convert meters to statute miles.
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}

/// Convert yards to meters.
pub fn yards_to_meters(yards: f64) -> f64 {
    yards * METERS_PER_YARD
}

/// Convert meters to yards.
pub fn meters_to_yards(meters: f64) -> f64 {
    meters / METERS_PER_YARD
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::algorithm::{Distance, Haversine};
    use geo::Point;

    fn assert_within_pct(actual: f64, expected: f64, pct: f64) {
        let tolerance = expected.abs() * pct / 100.0;
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} not within {pct}% of {expected}"
        );
    }

    #[test]
    fn nashville_to_los_angeles() {
        let d = great_circle_distance(36.1172, -86.6672, 33.9344, -118.4);
        assert_within_pct(d, 2_887_260.0, 0.05);
    }

    #[test]
    fn antimeridian_neighbors_are_close() {
        // Two Aleutian points straddling the ±180° seam. A naive longitude
        // subtraction would report them ~358° apart.
        let d = great_circle_distance(51.377020, 179.431888, 51.272322, -179.134396);
        assert_within_pct(d, 100_300.0, 0.05);
    }

    #[test]
    fn zero_distance() {
        assert_eq!(great_circle_distance(51.5, -0.12, 51.5, -0.12), 0.0);
    }

    #[test]
    fn near_antipodal_does_not_produce_nan() {
        let d = great_circle_distance(90.0, 0.0, -90.0, 0.0);
        assert!(d.is_finite());
        assert_within_pct(d, std::f64::consts::PI * EARTH_RADIUS_METERS, 0.05);
    }

    #[test]
    fn agrees_with_geo_haversine() {
        // geo uses a slightly different mean radius (6371008.8 m); agreement
        // should still be far tighter than the fixture tolerances.
        let pairs = [
            ((36.1172, -86.6672), (33.9344, -118.4)),
            ((51.5286416, 0.0), (51.3197790, 0.1831100)),
            ((51.377020, 179.431888), (51.272322, -179.134396)),
            ((-33.8688, 151.2093), (40.7128, -74.0060)),
        ];
        for ((lat1, lng1), (lat2, lng2)) in pairs {
            let ours = great_circle_distance(lat1, lng1, lat2, lng2);
            let theirs = Haversine.distance(Point::new(lng1, lat1), Point::new(lng2, lat2));
            assert_within_pct(ours, theirs, 0.01);
        }
    }

    #[test]
    fn exact_conversions() {
        assert_eq!(miles_to_meters(200.0), 321868.8);
        assert_eq!(yards_to_meters(200.0), 182.88);
        assert_eq!(meters_to_miles(321868.8), 200.0);
        assert_eq!(meters_to_yards(182.88), 200.0);
    }
}
