//! Projection of geographic coordinates into the indexed metric space.

use crate::geodesic::EARTH_RADIUS_METERS;
use crate::kdtree::Coordinate;
use crate::r#type::IndexScalar;

/// Dimensionality of the projected space.
pub const PROJECTED_DIMENSIONS: usize = 3;

/// Embed a latitude/longitude pair (degrees, WGS84) onto a sphere of Earth
/// radius, yielding a three-component coordinate in meters.
///
/// Straight-line (chordal) distance between projected points is strictly
/// monotonic in great-circle distance, so relative proximity ordering is
/// correct everywhere: across the ±180° longitude seam, where a raw
/// `(lat, lng)` embedding falls apart, and at the poles, where all
/// longitudes converge to the same projected point.
///
/// The chord understates the arc by `d³/24R²` (about one meter at 100 km),
/// so chordal thresholds can be treated as surface meters at the distances
/// reverse geocoding cares about. Reported distances are always recomputed
/// with [`great_circle_distance`][crate::geodesic::great_circle_distance],
/// never read off this metric.
///
/// The embedding is computed in `f64` and narrowed into `N` afterwards;
/// integer scalars quantize at one-meter resolution.
pub fn project<N: IndexScalar>(latitude: f64, longitude: f64) -> Coordinate<N> {
    let lat = latitude.to_radians();
    let lng = longitude.to_radians();

    let x = EARTH_RADIUS_METERS * lat.cos() * lng.cos();
    let y = EARTH_RADIUS_METERS * lat.cos() * lng.sin();
    let z = EARTH_RADIUS_METERS * lat.sin();

    [x, y, z]
        .into_iter()
        .map(|c| N::from(c).unwrap_or(N::max_value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdtree::sq_dist;

    #[test]
    fn produces_three_dimensions() {
        let coord = project::<f64>(51.5286416, 0.0);
        assert_eq!(coord.len(), PROJECTED_DIMENSIONS);
    }

    #[test]
    fn lies_on_the_sphere() {
        for (lat, lng) in [(0.0, 0.0), (51.5, -0.12), (-33.9, 151.2), (89.9, 45.0)] {
            let c = project::<f64>(lat, lng);
            let norm = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
            assert!((norm - EARTH_RADIUS_METERS).abs() < 1e-3);
        }
    }

    #[test]
    fn antimeridian_neighbors_project_close() {
        let a = project::<f64>(51.377020, 179.431888);
        let b = project::<f64>(51.272322, -179.134396);
        // Same pair, but with one point pulled ~3000 km along the seam.
        let far = project::<f64>(25.0, 179.0);

        let near_dist = sq_dist(&a, &b).sqrt();
        let far_dist = sq_dist(&a, &far).sqrt();
        assert!(near_dist < 101_000.0, "chord across the seam: {near_dist}");
        assert!(far_dist > 1_000_000.0);
    }

    #[test]
    fn poles_collapse_longitude() {
        let a = project::<f64>(90.0, 0.0);
        let b = project::<f64>(90.0, 137.0);
        assert!(sq_dist(&a, &b).sqrt() < 1e-6);
    }

    #[test]
    fn chord_understates_arc_only_slightly() {
        let a = project::<f64>(51.5286416, 0.0);
        let b = project::<f64>(51.3197790, 0.1831100);
        let chord = sq_dist(&a, &b).sqrt();
        let arc = crate::geodesic::great_circle_distance(51.5286416, 0.0, 51.3197790, 0.1831100);
        assert!(chord <= arc);
        assert!(arc - chord < 1.0);
    }
}
