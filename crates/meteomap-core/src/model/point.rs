// crates/meteomap-core/src/model/point.rs
use serde::{Deserialize, Serialize};

/// A map location in display order: latitude first.
///
/// GeoJSON stores positions as `[longitude, latitude]`; use
/// [`Point::from_lng_lat`] when reading raw coordinates so the axes are
/// swapped in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    #[inline]
    pub const fn from_lng_lat(lng: f64, lat: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Point {
    /// `(lat, lng)` tuple.
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lng_lat_swaps_axes() {
        let p = Point::from_lng_lat(2.0, 42.0);
        assert_eq!(p.lat, 42.0);
        assert_eq!(p.lng, 2.0);
    }

    #[test]
    fn tuple_is_lat_lng() {
        assert_eq!(Point::from((42.0, 2.0)), Point::new(42.0, 2.0));
    }
}
