// crates/meteomap-core/src/model/feature.rs
use serde::{Deserialize, Deserializer, Serialize};

/// A GeoJSON `FeatureCollection` of administrative boundaries.
///
/// Loaded once per run and read-only afterwards; every query borrows from it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "FeatureCollection::default_kind")]
    kind: String,
    #[serde(default)]
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: Self::default_kind(),
            features,
        }
    }

    fn default_kind() -> String {
        "FeatureCollection".to_string()
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// One boundary: its geometry plus the four descriptive labels.
///
/// `geometry` is `None` for the unlocated features GeoJSON allows
/// (`"geometry": null`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Properties,
}

/// Descriptive labels attached to a feature.
///
/// Missing or `null` members read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
}

impl Properties {
    /// Multi-line summary shown when a polygon is identified.
    pub fn summary(&self) -> String {
        format!(
            "Code: {}\nCountry: {}\nName: {}",
            self.code, self.country, self.name
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Geometry {
    /// `"Polygon"`, `"MultiPolygon"`, ...
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Absent for `GeometryCollection`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<CoordinateTree>,
    /// Carried along but never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
}

/// Legacy GeoJSON coordinate reference system member.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Crs {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// The `coordinates` member: numbers nested to any depth.
///
/// Anything that is neither a number nor an array lands in `Other` so that a
/// single bad feature surfaces as a geometry error instead of failing the
/// whole document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateTree {
    Number(f64),
    List(Vec<CoordinateTree>),
    Other(serde_json::Value),
}

impl CoordinateTree {
    pub fn as_list(&self) -> Option<&[CoordinateTree]> {
        match self {
            CoordinateTree::List(items) => Some(items),
            _ => None,
        }
    }

    /// Nesting depth measured along the first element that holds any
    /// value: a number is 0, `[[lng, lat]]` is 2, and `[[], [[lng, lat]]]`
    /// is 3. Arrays without values count as 1.
    pub fn depth(&self) -> usize {
        match self {
            CoordinateTree::List(items) => {
                1 + items
                    .iter()
                    .find(|c| c.has_values())
                    .map_or(0, CoordinateTree::depth)
            }
            _ => 0,
        }
    }

    /// `false` when the tree is nothing but (nested) empty arrays.
    pub fn has_values(&self) -> bool {
        match self {
            CoordinateTree::List(items) => items.iter().any(CoordinateTree::has_values),
            _ => true,
        }
    }
}

impl From<Vec<[f64; 2]>> for CoordinateTree {
    fn from(ring: Vec<[f64; 2]>) -> Self {
        CoordinateTree::List(
            ring.into_iter()
                .map(|[a, b]| {
                    CoordinateTree::List(vec![CoordinateTree::Number(a), CoordinateTree::Number(b)])
                })
                .collect(),
        )
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_polygon_feature_with_crs() {
        let json = r#"{
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[2, 42], [2.5, 43.0], [3, 42]]],
                "crs": {"type": "name", "properties": {"name": "EPSG:4326"}}
            },
            "properties": {"code": "AD01", "country": "AD", "name": "Canillo", "type": "Parish"}
        }"#;
        let f: Feature = serde_json::from_str(json).unwrap();
        let geometry = f.geometry.unwrap();
        assert_eq!(geometry.kind, "Polygon");
        assert_eq!(geometry.coordinates.unwrap().depth(), 3);
        assert_eq!(f.properties.kind, "Parish");
        assert_eq!(geometry.crs.unwrap().kind, "name");
    }

    #[test]
    fn null_properties_read_as_empty() {
        let json = r#"{"geometry": {"type": "Polygon", "coordinates": []},
                       "properties": {"code": null, "country": "FR"}}"#;
        let f: Feature = serde_json::from_str(json).unwrap();
        assert_eq!(f.properties.code, "");
        assert_eq!(f.properties.country, "FR");
        assert_eq!(f.properties.name, "");
    }

    #[test]
    fn non_numeric_leaf_is_kept_as_other() {
        let tree: CoordinateTree = serde_json::from_str(r#"[["a", 1]]"#).unwrap();
        let first = &tree.as_list().unwrap()[0].as_list().unwrap()[0];
        assert!(matches!(first, CoordinateTree::Other(_)));
    }

    #[test]
    fn depth_skips_leading_empty_arrays() {
        let ring: CoordinateTree = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(ring.depth(), 2);
        assert!(ring.has_values());

        let late: CoordinateTree = serde_json::from_str("[[], [[[1, 1], [2, 2]]]]").unwrap();
        assert_eq!(late.depth(), 4);

        let hollow: CoordinateTree = serde_json::from_str("[[[]], []]").unwrap();
        assert_eq!(hollow.depth(), 1);
        assert!(!hollow.has_values());
    }

    #[test]
    fn null_geometry_and_missing_coordinates_parse() {
        let json = r#"[
            {"geometry": null, "properties": {"name": "Nowhere"}},
            {"geometry": {"type": "GeometryCollection", "geometries": []}}
        ]"#;
        let fs: Vec<Feature> = serde_json::from_str(json).unwrap();
        assert!(fs[0].geometry.is_none());
        let collection = fs[1].geometry.as_ref().unwrap();
        assert_eq!(collection.kind, "GeometryCollection");
        assert!(collection.coordinates.is_none());
    }

    #[test]
    fn summary_lists_code_country_name() {
        let p = Properties {
            code: "ES-CT".into(),
            country: "ES".into(),
            name: "Catalunya".into(),
            kind: "Region".into(),
        };
        assert_eq!(p.summary(), "Code: ES-CT\nCountry: ES\nName: Catalunya");
    }
}
