// crates/meteomap-core/src/flatten.rs

//! # Geometry Flattening
//!
//! Turns the nested `coordinates` of a GeoJSON geometry into one flat,
//! drawable sequence of [`Point`]s.
//!
//! The shape of the input is read from its nesting depth, measured along the
//! first element that is not an empty array:
//!
//! | depth | shape         | output                                  |
//! |-------|---------------|-----------------------------------------|
//! | 2     | ring          | every position, axes swapped            |
//! | 3     | polygon       | the outer ring (holes dropped)          |
//! | ≥ 4   | multi-polygon | every child flattened, in source order  |
//!
//! ```
//! use meteomap_core::flatten::flatten;
//! use meteomap_core::model::{CoordinateTree, Point};
//!
//! let ring: CoordinateTree = serde_json::from_str("[[2.0, 42.0], [2.0, 43.0], [3.0, 43.0]]").unwrap();
//! let points = flatten(&ring).unwrap();
//! assert_eq!(points, vec![Point::new(42.0, 2.0), Point::new(43.0, 2.0), Point::new(43.0, 3.0)]);
//! ```

use crate::error::{MapError, Result};
use crate::model::{CoordinateTree, Feature, Geometry, Point};

/// Which rings of a polygon end up in the flattened outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RingPolicy {
    /// Outer boundary of each polygon only.
    #[default]
    OuterOnly,
    /// Outer boundary followed by every hole, for each polygon.
    AllRings,
}

/// Stateless converter from coordinate trees to point sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometryFlattener {
    policy: RingPolicy,
}

impl GeometryFlattener {
    pub const fn new(policy: RingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RingPolicy {
        self.policy
    }

    /// A feature without geometry has nothing to draw and is an error.
    pub fn flatten_feature(&self, feature: &Feature) -> Result<Vec<Point>> {
        match &feature.geometry {
            Some(geometry) => self.flatten_geometry(geometry),
            None => Err(MapError::geometry("feature has no geometry")),
        }
    }

    pub fn flatten_geometry(&self, geometry: &Geometry) -> Result<Vec<Point>> {
        match &geometry.coordinates {
            Some(coords) => self.flatten(coords),
            None => Err(MapError::geometry(format!(
                "{} geometry has no coordinates",
                geometry.kind
            ))),
        }
    }

    /// Flattens `coords` into `(lat, lng)` points.
    ///
    /// A tree made only of empty arrays gives an empty result; otherwise the
    /// depth is measured along the first element that holds values. Ragged
    /// nesting, non-numeric leaves and positions with fewer than two numbers
    /// are reported as [`MapError::GeometryFormat`], also inside rings that
    /// [`RingPolicy::OuterOnly`] discards.
    pub fn flatten(&self, coords: &CoordinateTree) -> Result<Vec<Point>> {
        let mut out = Vec::new();
        if !coords.has_values() {
            return Ok(out);
        }
        self.walk(coords, coords.depth(), &mut out)?;
        Ok(out)
    }

    fn walk(&self, node: &CoordinateTree, depth: usize, out: &mut Vec<Point>) -> Result<()> {
        let items = node.as_list().ok_or_else(|| {
            MapError::geometry(format!("expected an array at depth {depth}, found {node:?}"))
        })?;

        match depth {
            0 | 1 => Err(MapError::geometry(
                "expected a ring, polygon or multi-polygon, found a single position",
            )),
            2 => {
                out.reserve(items.len());
                for item in items {
                    out.push(position(item)?);
                }
                Ok(())
            }
            3 => match self.policy {
                RingPolicy::OuterOnly => {
                    let mut rings = items.iter();
                    if let Some(outer) = rings.next() {
                        self.walk(outer, 2, out)?;
                    }
                    rings.try_for_each(check_ring)
                }
                RingPolicy::AllRings => {
                    for ring in items {
                        self.walk(ring, 2, out)?;
                    }
                    Ok(())
                }
            },
            _ => {
                for child in items {
                    self.walk(child, depth - 1, out)?;
                }
                Ok(())
            }
        }
    }
}

/// Flattens with the default [`RingPolicy::OuterOnly`].
pub fn flatten(coords: &CoordinateTree) -> Result<Vec<Point>> {
    GeometryFlattener::default().flatten(coords)
}

/// Validates a ring whose points are not kept.
fn check_ring(ring: &CoordinateTree) -> Result<()> {
    let items = ring.as_list().ok_or_else(|| {
        MapError::geometry(format!("expected a ring of positions, found {ring:?}"))
    })?;
    items.iter().try_for_each(|item| position(item).map(drop))
}

/// `[lng, lat, ...]` -> `Point { lat, lng }`; members past the second are ignored.
fn position(node: &CoordinateTree) -> Result<Point> {
    match node.as_list() {
        Some([CoordinateTree::Number(lng), CoordinateTree::Number(lat), ..]) => {
            Ok(Point::from_lng_lat(*lng, *lat))
        }
        _ => Err(MapError::geometry(format!(
            "expected a [longitude, latitude] pair, found {node:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(json: &str) -> CoordinateTree {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn ring_swaps_axes_in_order() {
        let pts = flatten(&tree("[[2.0, 42.0], [2.0, 43.0], [3.0, 43.0]]")).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(42.0, 2.0),
                Point::new(43.0, 2.0),
                Point::new(43.0, 3.0)
            ]
        );
    }

    #[test]
    fn polygon_keeps_outer_ring_only() {
        let coords = tree(
            "[[[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
              [[2, 2], [3, 2], [3, 3], [2, 2]]]",
        );
        let pts = flatten(&coords).unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[1], Point::new(0.0, 10.0));
    }

    #[test]
    fn all_rings_policy_appends_holes() {
        let coords = tree("[[[0, 0], [1, 0], [0, 1]], [[5, 5], [6, 5]]]");
        let pts = GeometryFlattener::new(RingPolicy::AllRings)
            .flatten(&coords)
            .unwrap();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[3], Point::new(5.0, 5.0));
    }

    #[test]
    fn multipolygon_concatenates_outer_rings() {
        let coords = tree(
            "[[[[1, 1], [2, 1], [2, 2]], [[1.5, 1.2], [1.6, 1.2], [1.6, 1.3]]],
              [[[7, 7], [8, 7], [8, 8]]]]",
        );
        let pts = flatten(&coords).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(1.0, 1.0),
                Point::new(1.0, 2.0),
                Point::new(2.0, 2.0),
                Point::new(7.0, 7.0),
                Point::new(7.0, 8.0),
                Point::new(8.0, 8.0),
            ]
        );
    }

    #[test]
    fn empty_at_any_depth_is_empty() {
        for json in ["[]", "[[]]", "[[[]]]", "[[[[]]]]"] {
            assert!(flatten(&tree(json)).unwrap().is_empty(), "{json}");
        }
    }

    #[test]
    fn empty_polygon_inside_multipolygon_is_tolerated() {
        let pts = flatten(&tree("[[[[1, 1], [2, 2], [3, 1]]], []]")).unwrap();
        assert_eq!(pts.len(), 3);
    }

    #[test]
    fn result_does_not_depend_on_empty_polygon_position() {
        let trailing = flatten(&tree("[[[[1, 1], [2, 2], [3, 1]]], []]")).unwrap();
        let leading = flatten(&tree("[[], [[[1, 1], [2, 2], [3, 1]]]]")).unwrap();
        assert_eq!(trailing.len(), 3);
        assert_eq!(leading, trailing);
    }

    #[test]
    fn positions_after_empty_first_element_are_still_validated() {
        let err = flatten(&tree("[[], [1, 2], [3, 4]]")).unwrap_err();
        assert!(matches!(err, MapError::GeometryFormat(_)));
    }

    #[test]
    fn discarded_holes_are_still_validated() {
        let err = flatten(&tree(r#"[[[0, 0], [1, 0], [0, 1]], "junk"]"#)).unwrap_err();
        assert!(matches!(err, MapError::GeometryFormat(_)));

        let err = flatten(&tree("[[[0, 0], [1, 0], [0, 1]], [[5, 5], [6]]]")).unwrap_err();
        assert!(matches!(err, MapError::GeometryFormat(_)));
    }

    #[test]
    fn missing_geometry_or_coordinates_is_a_geometry_error() {
        let f: Feature = serde_json::from_str(r#"{"geometry": null}"#).unwrap();
        assert!(matches!(
            GeometryFlattener::default().flatten_feature(&f),
            Err(MapError::GeometryFormat(_))
        ));

        let g: Geometry =
            serde_json::from_str(r#"{"type": "GeometryCollection", "geometries": []}"#).unwrap();
        let err = GeometryFlattener::default().flatten_geometry(&g).unwrap_err();
        assert!(err.to_string().contains("GeometryCollection"));
    }

    #[test]
    fn extra_position_members_are_ignored() {
        let pts = flatten(&tree("[[2, 42, 150.0], [3, 43, 151.0]]")).unwrap();
        assert_eq!(pts, vec![Point::new(42.0, 2.0), Point::new(43.0, 3.0)]);
    }

    #[test]
    fn bare_position_is_rejected() {
        let err = flatten(&tree("[2.0, 42.0]")).unwrap_err();
        assert!(matches!(err, MapError::GeometryFormat(_)));
    }

    #[test]
    fn ragged_nesting_is_rejected() {
        // second polygon is only a ring
        let err = flatten(&tree("[[[[1, 1], [2, 2]]], [[3, 3], [4, 4]]]")).unwrap_err();
        assert!(matches!(err, MapError::GeometryFormat(_)));
    }

    #[test]
    fn non_numeric_leaf_is_rejected() {
        let err = flatten(&tree(r#"[[2.0, "north"], [3.0, 43.0]]"#)).unwrap_err();
        assert!(matches!(err, MapError::GeometryFormat(_)));
    }

    #[test]
    fn short_position_is_rejected() {
        assert!(flatten(&tree("[[2.0], [3.0, 43.0]]")).is_err());
    }

    #[test]
    fn flattening_is_idempotent() {
        let coords = tree("[[[[1, 1], [2, 1], [2, 2]]], [[[7, 7], [8, 7], [8, 8]]]]");
        assert_eq!(flatten(&coords).unwrap(), flatten(&coords).unwrap());
    }
}
