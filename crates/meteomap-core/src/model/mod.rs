// crates/meteomap-core/src/model/mod.rs
pub mod feature;
pub mod point;

pub use feature::{CoordinateTree, Crs, Feature, FeatureCollection, Geometry, Properties};
pub use point::Point;
