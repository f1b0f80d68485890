//! Full session flow: background download, country selection, click.
//!
//! Needs network access for the default dataset; pass a local path as the
//! first argument to use a file instead.

use meteomap_core::prelude::*;
use std::time::Duration;

fn main() {
    let source = match std::env::args().nth(1) {
        Some(path) => DatasetSource::Path(path.into()),
        None => DatasetSource::default(),
    };

    let mut session = MapSession::new();
    let mut handle = session.start_load(source);

    // Foreground loop: keep "rendering" until the loader reports.
    let event = loop {
        if let Some(event) = handle.try_poll() {
            break event;
        }
        println!("Wait, loading data ...");
        std::thread::sleep(Duration::from_millis(250));
    };
    println!("{}", session.apply(event));

    let Some(country) = session.countries().first().map(|c| c.to_string()) else {
        return;
    };
    let report = session.select_country(&country);
    println!(
        "{country}: {} polygons, {} skipped",
        report.added,
        report.skipped.len()
    );

    if session.focus_overlay() {
        let center = session.view().center();
        match session.click(center) {
            Some(info) => println!("{info}"),
            None => println!("No polygon at the overlay center {center}"),
        }
    }
}
