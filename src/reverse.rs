//! Reverse geocoding over a set of located records.

use geo_traits::CoordTrait;

use crate::error::Result;
use crate::geodesic::great_circle_distance;
use crate::kdtree::KDTree;
use crate::project::{project, PROJECTED_DIMENSIONS};

/// A payload bound to a geographic position, in degrees (WGS84). Immutable
/// once indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedRecord<P> {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Arbitrary payload carried through query results.
    pub payload: P,
}

impl<P> LocatedRecord<P> {
    /// Create a record at the given position.
    pub fn new(latitude: f64, longitude: f64, payload: P) -> Self {
        Self {
            latitude,
            longitude,
            payload,
        }
    }
}

/// A query hit: the matched record and its great-circle distance from the
/// query location.
///
/// The distance is always recomputed with
/// [`great_circle_distance`][crate::geodesic::great_circle_distance], never
/// read off the index's internal metric.
#[derive(Debug)]
pub struct SearchResult<'a, P> {
    /// The matched record.
    pub record: &'a LocatedRecord<P>,
    /// Surface distance from the query location, in meters.
    pub distance_meters: f64,
}

impl<P> SearchResult<'_, P> {
    /// The matched record's payload.
    pub fn payload(&self) -> &P {
        &self.record.payload
    }
}

impl<P> Clone for SearchResult<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for SearchResult<'_, P> {}

/// An index of located records answering "which known points are near this
/// location".
///
/// Records are projected once onto a sphere of Earth radius and indexed in a
/// [`KDTree`]; chordal distance there is monotonic in great-circle distance,
/// so proximity ordering is correct across the antimeridian and at the
/// poles. Radii are given in meters; at reverse-geocoding scales the chordal
/// and surface radius differ by well under a part in ten thousand.
///
/// Typical use: bulk load, [`balance`][ReverseGeocoder::balance], then
/// query. Queries stay correct on an unbalanced index, just slower.
///
/// ```
/// use revgeo::{LocatedRecord, ReverseGeocoder};
///
/// let geocoder = ReverseGeocoder::from_records([
///     LocatedRecord::new(51.5074, -0.1278, "London"),
///     LocatedRecord::new(48.8566, 2.3522, "Paris"),
///     LocatedRecord::new(40.7128, -74.0060, "New York"),
/// ])
/// .unwrap();
///
/// // Nearest known city to Berlin.
/// let hits = geocoder.nearest_neighbors(52.5200, 13.4050, 1).unwrap();
/// assert_eq!(hits[0].payload(), &"Paris");
/// ```
pub struct ReverseGeocoder<P> {
    tree: KDTree<f64, LocatedRecord<P>>,
}

impl<P> ReverseGeocoder<P> {
    /// Create an empty geocoder.
    pub fn new() -> Self {
        Self {
            tree: KDTree::new(PROJECTED_DIMENSIONS),
        }
    }

    /// Build a balanced geocoder from a finite sequence of records.
    pub fn from_records(records: impl IntoIterator<Item = LocatedRecord<P>>) -> Result<Self> {
        let mut geocoder = Self::new();
        geocoder.add_range(records)?;
        geocoder.balance();
        Ok(geocoder)
    }

    /// Index one record. Does not rebalance.
    pub fn add(&mut self, record: LocatedRecord<P>) -> Result<()> {
        let point = project(record.latitude, record.longitude);
        self.tree.add(point, record)
    }

    /// Index every record, equivalent to repeated [`add`][ReverseGeocoder::add].
    pub fn add_range(&mut self, records: impl IntoIterator<Item = LocatedRecord<P>>) -> Result<()> {
        for record in records {
            self.add(record)?;
        }
        Ok(())
    }

    /// Rebuild the underlying tree to O(log n) height. No-op when empty.
    pub fn balance(&mut self) {
        self.tree.balance();
    }

    /// The number of indexed records.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no records are indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All records within `radius_meters` of the given location, at most
    /// `max_results` of them.
    ///
    /// Results carry no ordering guarantee. When more records qualify than
    /// `max_results`, the subset returned is whichever the index traversal
    /// encountered first, not the closest subset; use
    /// [`nearest_neighbors`][ReverseGeocoder::nearest_neighbors] for a
    /// closest-first cut.
    pub fn radial_search(
        &self,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
        max_results: usize,
    ) -> Result<Vec<SearchResult<'_, P>>> {
        let center = project(latitude, longitude);
        let hits = self.tree.within(&center, radius_meters, max_results)?;
        Ok(hits
            .into_iter()
            .map(|hit| Self::to_search_result(latitude, longitude, hit.item))
            .collect())
    }

    /// The `max_results` records nearest to the given location, ascending by
    /// distance.
    pub fn nearest_neighbors(
        &self,
        latitude: f64,
        longitude: f64,
        max_results: usize,
    ) -> Result<Vec<SearchResult<'_, P>>> {
        let center = project(latitude, longitude);
        let hits = self.tree.neighbors(&center, max_results, None)?;
        Ok(hits
            .into_iter()
            .map(|hit| Self::to_search_result(latitude, longitude, hit.item))
            .collect())
    }

    /// [`radial_search`][ReverseGeocoder::radial_search] with the location
    /// given as a coordinate (x = longitude, y = latitude).
    pub fn radial_search_coord(
        &self,
        coord: &impl CoordTrait<T = f64>,
        radius_meters: f64,
        max_results: usize,
    ) -> Result<Vec<SearchResult<'_, P>>> {
        self.radial_search(coord.y(), coord.x(), radius_meters, max_results)
    }

    /// [`nearest_neighbors`][ReverseGeocoder::nearest_neighbors] with the
    /// location given as a coordinate (x = longitude, y = latitude).
    pub fn nearest_neighbors_coord(
        &self,
        coord: &impl CoordTrait<T = f64>,
        max_results: usize,
    ) -> Result<Vec<SearchResult<'_, P>>> {
        self.nearest_neighbors(coord.y(), coord.x(), max_results)
    }

    fn to_search_result<'a>(
        latitude: f64,
        longitude: f64,
        record: &'a LocatedRecord<P>,
    ) -> SearchResult<'a, P> {
        SearchResult {
            record,
            distance_meters: great_circle_distance(
                latitude,
                longitude,
                record.latitude,
                record.longitude,
            ),
        }
    }
}

impl<P> Default for ReverseGeocoder<P> {
    fn default() -> Self {
        Self::new()
    }
}
