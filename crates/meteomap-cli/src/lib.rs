//! meteomap-cli
//! ============
//!
//! Command-line front end for [`meteomap-core`]: it loads the boundary
//! dataset in the background, lists the countries it contains, flattens the
//! polygons of one country and identifies which polygon holds a location.
//!
//! ```text
//! meteomap countries
//! meteomap polygons AD --json
//! meteomap identify AD 42.51 1.53
//! meteomap --input boundaries.geojson.gz search lleida
//! ```
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG=debug` for detail.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
