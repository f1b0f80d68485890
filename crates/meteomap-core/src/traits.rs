// crates/meteomap-core/src/traits.rs
use crate::common::DatasetStats;
use crate::model::{Feature, Properties};
use crate::text::{equals_folded, fold_key};

/// Name-based matching helpers for types that expose a display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use meteomap_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Sant Julià de Lòria").is_named("sant julia de loria"));
/// assert!(Place("Escaldes-Engordany").name_contains("engor"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for Properties {
    fn name_str(&self) -> &str {
        &self.name
    }
}

impl NameMatch for Feature {
    fn name_str(&self) -> &str {
        &self.properties.name
    }
}

/// Read-only queries over a loaded dataset.
pub trait FeatureSearch {
    fn stats(&self) -> DatasetStats;

    /// Distinct country labels, sorted ascending. This is the list a
    /// country selector is populated from.
    ///
    /// ```
    /// use meteomap_core::prelude::*;
    ///
    /// let fc: FeatureCollection = serde_json::from_str(r#"{"features": [
    ///     {"geometry": {"type": "Polygon", "coordinates": []}, "properties": {"country": "FR"}},
    ///     {"geometry": {"type": "Polygon", "coordinates": []}, "properties": {"country": "ES"}},
    ///     {"geometry": {"type": "Polygon", "coordinates": []}, "properties": {"country": "FR"}}
    /// ]}"#).unwrap();
    ///
    /// assert_eq!(fc.countries(), vec!["ES", "FR"]);
    /// ```
    fn countries(&self) -> Vec<&str>;

    /// Features whose country equals `country` exactly, in document order.
    fn features_by_country<'a>(&'a self, country: &str) -> Vec<(usize, &'a Feature)>;

    /// First feature with the given code (trimmed, ASCII case-insensitive).
    fn find_by_code(&self, code: &str) -> Option<&Feature>;

    /// Accent- and case-insensitive substring search on feature names.
    fn find_by_name_substring(&self, substr: &str) -> Vec<&Feature>;
}
