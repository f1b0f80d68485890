// crates/meteomap-core/src/error.rs

//! Error types shared by every module of the crate.

use thiserror::Error;

/// Everything that can go wrong while acquiring, parsing or flattening
/// a boundary dataset.
#[derive(Debug, Error)]
pub enum MapError {
    /// Network failure or a non-success HTTP status while downloading.
    #[error("download failed: {0}")]
    Download(String),

    /// The payload was not a valid GeoJSON feature collection.
    #[error("could not parse dataset: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Coordinate nesting that cannot be turned into an outline.
    #[error("malformed geometry: {0}")]
    GeometryFormat(String),

    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    pub(crate) fn geometry(msg: impl Into<String>) -> Self {
        MapError::GeometryFormat(msg.into())
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for MapError {
    fn from(e: reqwest::Error) -> Self {
        MapError::Download(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
