use clap::{Parser, Subcommand};

/// CLI arguments for meteomap
#[derive(Debug, Parser)]
#[command(
    name = "meteomap",
    version,
    about = "Inspect administrative boundary polygons from a GeoJSON dataset"
)]
pub struct CliArgs {
    /// Local dataset (.geojson, .json or .gz) instead of downloading
    #[arg(short = 'i', long = "input", global = true, conflicts_with = "url")]
    pub input: Option<String>,

    /// Dataset URL (default: the published boundaries dataset)
    #[arg(short = 'u', long = "url", global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List the countries present, sorted
    Countries,

    /// Flatten and list the polygons of one country
    Polygons {
        /// Country label exactly as it appears in the data (e.g. FR)
        country: String,

        /// Include interior rings (holes) in the outlines
        #[arg(long)]
        all_rings: bool,

        /// Print the polygons as JSON, points included
        #[arg(long)]
        json: bool,
    },

    /// Identify the polygon of a country that contains a location
    Identify {
        country: String,
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lng: f64,
    },

    /// Search features by name (case- and accent-insensitive)
    Search {
        query: String,
    },
}
