// crates/meteomap-core/src/overlay.rs

//! # Polygon Overlay
//!
//! The drawable side of a country selection: one [`DisplayPolygon`] per
//! matching feature, kept together in a named [`Overlay`]. The overlay is
//! rebuilt from scratch on every selection; nothing is patched in place.

use crate::flatten::GeometryFlattener;
use crate::model::{FeatureCollection, Point, Properties};
use crate::traits::FeatureSearch;
use geo::{BoundingRect, Contains, Coord, LineString, MultiPoint, Polygon};
use serde::Serialize;

pub const DEFAULT_OVERLAY_NAME: &str = "polygons";

/// Axis-aligned box in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Point,
    pub north_east: Point,
}

impl Bounds {
    pub fn center(&self) -> Point {
        Point::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        p.lat >= self.south_west.lat
            && p.lat <= self.north_east.lat
            && p.lng >= self.south_west.lng
            && p.lng <= self.north_east.lng
    }

    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            south_west: Point::new(
                self.south_west.lat.min(other.south_west.lat),
                self.south_west.lng.min(other.south_west.lng),
            ),
            north_east: Point::new(
                self.north_east.lat.max(other.north_east.lat),
                self.north_east.lng.max(other.north_east.lng),
            ),
        }
    }

    fn of_points(points: &[Point]) -> Option<Bounds> {
        let cloud: MultiPoint<f64> = points.iter().map(|p| geo::Point::new(p.lng, p.lat)).collect();
        cloud.bounding_rect().map(|r| Bounds {
            south_west: Point::new(r.min().y, r.min().x),
            north_east: Point::new(r.max().y, r.max().x),
        })
    }
}

/// A flattened outline plus the metadata of the feature it came from.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPolygon {
    /// Position of the source feature in its collection.
    pub feature_index: usize,
    pub properties: Properties,
    pub points: Vec<Point>,
    #[serde(skip)]
    shape: Option<Polygon<f64>>,
    #[serde(skip)]
    bounds: Option<Bounds>,
}

impl DisplayPolygon {
    pub fn new(feature_index: usize, properties: Properties, points: Vec<Point>) -> Self {
        // geo works in (x, y) = (lng, lat); fewer than three points enclose nothing.
        let shape = (points.len() >= 3).then(|| {
            let ring: LineString<f64> = points
                .iter()
                .map(|p| Coord { x: p.lng, y: p.lat })
                .collect();
            Polygon::new(ring, vec![])
        });
        let bounds = Bounds::of_points(&points);
        Self {
            feature_index,
            properties,
            points,
            shape,
            bounds,
        }
    }

    pub fn name(&self) -> &str {
        &self.properties.name
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Strict interior test; points on the outline do not count.
    pub fn contains(&self, p: Point) -> bool {
        match (&self.shape, &self.bounds) {
            (Some(shape), Some(b)) if b.contains(p) => shape.contains(&geo::Point::new(p.lng, p.lat)),
            _ => false,
        }
    }
}

/// A feature that could not be drawn during a rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFeature {
    pub feature_index: usize,
    pub name: String,
    pub reason: String,
}

/// Outcome of [`Overlay::rebuild_for_country`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebuildReport {
    pub added: usize,
    pub skipped: Vec<SkippedFeature>,
}

/// Named container of display polygons.
#[derive(Debug, Clone)]
pub struct Overlay {
    name: String,
    polygons: Vec<DisplayPolygon>,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAY_NAME)
    }
}

impl Overlay {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            polygons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polygons(&self) -> &[DisplayPolygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    pub fn push(&mut self, polygon: DisplayPolygon) {
        self.polygons.push(polygon);
    }

    /// Replaces the contents with one polygon per feature of `country`.
    ///
    /// Features without geometry, or whose geometry cannot be flattened, are
    /// left out and listed in the report; the remaining features are still
    /// drawn.
    pub fn rebuild_for_country(
        &mut self,
        collection: &FeatureCollection,
        country: &str,
        flattener: &GeometryFlattener,
    ) -> RebuildReport {
        self.clear();
        let mut report = RebuildReport::default();

        for (idx, feature) in collection.features_by_country(country) {
            match flattener.flatten_feature(feature) {
                Ok(points) => {
                    self.push(DisplayPolygon::new(idx, feature.properties.clone(), points));
                    report.added += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        feature = idx,
                        name = %feature.properties.name,
                        error = %e,
                        "Skipping feature with unusable geometry"
                    );
                    report.skipped.push(SkippedFeature {
                        feature_index: idx,
                        name: feature.properties.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            overlay = %self.name,
            country,
            added = report.added,
            skipped = report.skipped.len(),
            "Overlay rebuilt"
        );
        report
    }

    /// First polygon, in insertion order, whose interior holds `p`.
    pub fn hit_test(&self, p: Point) -> Option<&DisplayPolygon> {
        self.polygons.iter().find(|poly| poly.contains(p))
    }

    /// Box around every polygon, `None` for an empty overlay.
    pub fn bounds(&self) -> Option<Bounds> {
        self.polygons
            .iter()
            .filter_map(DisplayPolygon::bounds)
            .reduce(Bounds::union)
    }

    pub fn point_count(&self) -> usize {
        self.polygons.iter().map(|p| p.points.len()).sum()
    }
}
