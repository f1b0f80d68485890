// crates/meteomap-core/src/lib.rs

//! # meteomap-core
//!
//! Administrative boundaries from a GeoJSON `FeatureCollection`, turned into
//! clickable map polygons.
//!
//! - [`flatten`] unwraps ring / polygon / multi-polygon coordinates into a
//!   flat `(lat, lng)` outline.
//! - [`traits::FeatureSearch`] filters features by country and lists the
//!   countries present.
//! - [`overlay`] holds the polygons of the current selection and answers
//!   "what is under this point?".
//! - [`loader`] downloads (feature `fetch`) or reads (optionally gzipped,
//!   feature `compact`) the dataset.
//! - [`session`] ties it together as owned state with a background load.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod error;
pub mod flatten;
pub mod loader;
pub mod model;
pub mod overlay;
pub mod search;
pub mod session;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::common::DatasetStats;
pub use crate::error::{MapError, Result};
pub use crate::flatten::{flatten, GeometryFlattener, RingPolicy};
pub use crate::loader::{DatasetSource, DATASET_URL};
pub use crate::model::{
    CoordinateTree, Crs, Feature, FeatureCollection, Geometry, Point, Properties,
};
pub use crate::overlay::{Bounds, DisplayPolygon, Overlay, RebuildReport};
pub use crate::session::{LoadEvent, LoadHandle, MapSession, Notification};
pub use crate::traits::{FeatureSearch, NameMatch};
pub use crate::view::{MapView, ZoomChanged};

pub mod prelude {
    pub use crate::error::{MapError, Result};
    pub use crate::flatten::{GeometryFlattener, RingPolicy};
    pub use crate::loader::DatasetSource;
    pub use crate::model::{Feature, FeatureCollection, Point, Properties};
    pub use crate::overlay::{DisplayPolygon, Overlay};
    pub use crate::session::{LoadEvent, MapSession, Notification};
    pub use crate::traits::{FeatureSearch, NameMatch};
}
