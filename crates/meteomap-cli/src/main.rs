//! meteomap: command-line front end for meteomap-core
//!
//! Usage examples
//! --------------
//!
//! - Dataset summary
//!   $ meteomap stats
//!
//! - Countries for the selector
//!   $ meteomap countries
//!
//! - Polygons of a country, optionally with holes or as JSON
//!   $ meteomap polygons FR
//!   $ meteomap polygons FR --all-rings --json
//!
//! - What is at a location (lat, lng)?
//!   $ meteomap identify AD 42.51 1.53
//!
//! - Local dataset instead of the download
//!   $ meteomap --input data/boundaries.geojson.gz countries
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::bail;
use clap::Parser;
use meteomap_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let source = match (args.input, args.url) {
        (Some(path), _) => DatasetSource::Path(path.into()),
        (None, Some(url)) => DatasetSource::Url(url),
        (None, None) => DatasetSource::default(),
    };

    let policy = match &args.command {
        Commands::Polygons { all_rings: true, .. } => RingPolicy::AllRings,
        _ => RingPolicy::OuterOnly,
    };

    // Load on the background thread; this thread owns the session.
    let mut session = MapSession::with_policy(policy);
    let handle = session.start_load(source);
    match session.apply(handle.wait()) {
        Notification::Error(msg) => bail!(msg),
        note => tracing::info!("{note}"),
    }

    match args.command {
        Commands::Stats => {
            let stats = loaded(&session)?.stats();
            println!("Dataset statistics:");
            println!("  Features: {}", stats.features);
            println!("  Countries: {}", stats.countries);
        }

        Commands::Countries => {
            for country in session.countries() {
                println!("{country}");
            }
        }

        Commands::Polygons { country, json, .. } => {
            let report = session.select_country(&country);
            for skipped in &report.skipped {
                eprintln!(
                    "skipped #{} {}: {}",
                    skipped.feature_index, skipped.name, skipped.reason
                );
            }
            let overlay = session.overlay();
            if json {
                println!("{}", serde_json::to_string_pretty(overlay.polygons())?);
            } else if overlay.is_empty() {
                println!("No polygons for country: {country}");
            } else {
                for poly in overlay.polygons() {
                    println!(
                        "{} ({}) [{}]: {} points",
                        poly.name(),
                        poly.properties.code,
                        poly.properties.kind,
                        poly.points.len()
                    );
                }
                if let Some(b) = overlay.bounds() {
                    println!("Bounds: {} .. {} (center {})", b.south_west, b.north_east, b.center());
                }
            }
        }

        Commands::Identify { country, lat, lng } => {
            session.select_country(&country);
            match session.click(Point::new(lat, lng)) {
                Some(info) => println!("{info}"),
                None => println!("No polygon of {country} contains ({lat}, {lng})"),
            }
        }

        Commands::Search { query } => {
            let hits = loaded(&session)?.find_by_name_substring(&query);
            if hits.is_empty() {
                println!("No features found matching: {query}");
            } else {
                for f in hits {
                    println!(
                        "{}: {} ({}, {})",
                        f.properties.name, f.properties.country, f.properties.code, f.properties.kind
                    );
                }
            }
        }
    }

    Ok(())
}

fn loaded(session: &MapSession) -> anyhow::Result<&FeatureCollection> {
    match session.dataset() {
        Some(dataset) => Ok(dataset),
        None => bail!("no dataset loaded"),
    }
}
