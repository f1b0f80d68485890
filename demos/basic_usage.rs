//! Basic usage of meteomap-core without any network access.
//!
//! Parses a small inline dataset, lists its countries, flattens the polygons
//! of one country and identifies a location.

use meteomap_core::prelude::*;

const DATASET: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature",
         "geometry": {"type": "Polygon", "coordinates": [[[1.41, 42.43], [1.79, 42.43], [1.79, 42.66], [1.41, 42.66], [1.41, 42.43]]]},
         "properties": {"code": "AD", "country": "AD", "name": "Andorra", "type": "Country"}},
        {"type": "Feature",
         "geometry": {"type": "MultiPolygon", "coordinates": [
            [[[0.15, 40.5], [3.3, 40.5], [3.3, 42.9], [0.15, 42.9], [0.15, 40.5]],
             [[1.41, 42.43], [1.79, 42.43], [1.79, 42.66], [1.41, 42.43]]],
            [[[4.0, 39.8], [4.3, 39.8], [4.3, 40.1], [4.0, 39.8]]]]},
         "properties": {"code": "ES-CT", "country": "ES", "name": "Catalunya", "type": "Region"}}
    ]
}"#;

fn main() -> Result<()> {
    println!("=== meteomap basic usage ===\n");

    let fc = FeatureCollection::from_json_str(DATASET)?;
    println!("Countries: {:?}", fc.countries());

    let flattener = GeometryFlattener::default();
    for (idx, feature) in fc.features_by_country("ES") {
        let points = flattener.flatten_feature(feature)?;
        let kind = feature.geometry.as_ref().map_or("none", |g| g.kind.as_str());
        match points.first() {
            Some(first) => println!(
                "#{idx} {} ({kind}): {} points, first {first}",
                feature.properties.name,
                points.len(),
            ),
            None => println!("#{idx} {} ({kind}): empty", feature.properties.name),
        }
    }

    let mut overlay = Overlay::default();
    overlay.rebuild_for_country(&fc, "AD", &flattener);
    match overlay.hit_test(Point::new(42.5, 1.52)) {
        Some(poly) => println!("\n{}", poly.properties.summary()),
        None => println!("\nNothing here"),
    }

    Ok(())
}
