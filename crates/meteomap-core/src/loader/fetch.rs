// crates/meteomap-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{MapError, Result};
use crate::model::FeatureCollection;

/// Single blocking GET of `url`, parsed as a feature collection.
///
/// No retries and no timeout beyond reqwest's defaults; a non-success status
/// is a [`MapError::Download`].
pub fn fetch(url: &str) -> Result<FeatureCollection> {
    let client = reqwest::blocking::Client::builder().build()?;
    fetch_with(&client, url)
}

/// Same as [`fetch`] over a caller-configured client (proxy, timeout, TLS).
pub fn fetch_with(client: &reqwest::blocking::Client, url: &str) -> Result<FeatureCollection> {
    tracing::info!(url, "Downloading dataset");

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(MapError::Download(format!("{url} answered {status}")));
    }

    let body = response.text()?;
    tracing::debug!(bytes = body.len(), "Dataset downloaded");

    FeatureCollection::from_json_str(&body)
}
