// crates/meteomap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Gets a [`FeatureCollection`] into memory, either from the fixed remote
//! dataset or from a local file. Transport (HTTP, file, gzip) lives in the
//! submodules; parsing is always `serde_json` over the whole document.

use crate::error::{MapError, Result};
use crate::model::FeatureCollection;
#[cfg(feature = "fetch")]
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;
#[cfg(feature = "fetch")]
mod fetch;

#[cfg(feature = "fetch")]
pub use fetch::{fetch, fetch_with};

/// Administrative boundaries published alongside the desktop viewer.
pub const DATASET_URL: &str =
    "https://drive.google.com/uc?export=download&id=16s24hYHfYQhKMNcP1hpgQmg13Yb8j0hV";

// Single in-process cache so the remote dataset is downloaded once per process.
#[cfg(feature = "fetch")]
static DATASET_CACHE: OnceCell<FeatureCollection> = OnceCell::new();

/// Where a dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    Path(PathBuf),
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Url(DATASET_URL.to_string())
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Url(url) => f.write_str(url),
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

impl DatasetSource {
    /// Acquires and parses the dataset. Blocking.
    pub fn load(&self) -> Result<FeatureCollection> {
        match self {
            #[cfg(feature = "fetch")]
            DatasetSource::Url(url) => fetch(url),
            #[cfg(not(feature = "fetch"))]
            DatasetSource::Url(url) => Err(MapError::Download(format!(
                "cannot download {url}: built without the 'fetch' feature"
            ))),
            DatasetSource::Path(path) => FeatureCollection::load_from_path(path),
        }
    }
}

impl FeatureCollection {
    /// Load the default remote dataset, downloading it on first use only.
    #[cfg(feature = "fetch")]
    pub fn load() -> Result<Self> {
        DATASET_CACHE.get_or_try_init(|| fetch(DATASET_URL)).cloned()
    }

    /// Reads a `.geojson`/`.json` file; `.gz` files are decompressed when the
    /// `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Loading dataset from file");
        let reader = common_io::open_stream(path)?;
        Self::from_reader(reader)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let fc: FeatureCollection = serde_json::from_reader(reader).map_err(MapError::Deserialization)?;
        tracing::debug!(features = fc.len(), "Dataset parsed");
        Ok(fc)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }
}
