//! Transit station map service
//!
//! Loads a station dataset, then either answers a single viewport query on
//! the command line or serves queries over HTTP.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use station_clusters::cluster::ClusterPolicy;
use station_clusters::cluster::policy::{STATION_MARKER_WIDTH_PX, UNGROUPED_ZOOM};
use station_clusters::records::to_feature_collection;
use station_clusters::stations::load_path;
use station_clusters::{StationMap, server};


#[derive(Parser, Debug)]
#[command(name = "station-clusters")]
#[command(about = "Clustered transit station markers for map viewports", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Zoom level from which stations are never grouped beyond coincident ones
    #[arg(long, global = true, default_value_t = UNGROUPED_ZOOM)]
    ungrouped_zoom: u32,

    /// Station marker width in pixels, used to size the clustering radius
    #[arg(long, global = true, default_value_t = STATION_MARKER_WIDTH_PX)]
    marker_width: f64,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one viewport query and print the GeoJSON result
    Query {
        /// Station dataset (.geojson, .json or .csv)
        #[arg(short, long)]
        stations: PathBuf,

        /// Viewport as swLat,swLng|neLat,neLng
        #[arg(short, long)]
        viewport: String,

        /// Map zoom level
        #[arg(short, long)]
        zoom: i64,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve viewport queries over HTTP
    Serve {
        /// Station dataset (.geojson, .json or .csv)
        #[arg(short, long)]
        stations: PathBuf,

        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:8080")]
        addr: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);
    let policy = policy_from_args(&args);

    match args.command {
        Command::Query {
            stations,
            viewport,
            zoom,
            output,
        } => {
            let map = load_map(&stations, policy)?;
            let body = run_query(&map, &viewport, zoom)?;
            match output {
                None => println!("{body}"),
                Some(output) => {
                    fs::write(&output, body)
                        .with_context(|| format!("writing {}", output.display()))?;
                    info!("result written to {:?}", output);
                }
            }
        }
        Command::Serve { stations, addr } => {
            let map = Arc::new(load_map(&stations, policy)?);
            server::serve(map, &addr).map_err(|e| anyhow!("serving on {addr}: {e}"))?;
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn policy_from_args(args: &Args) -> ClusterPolicy {
    ClusterPolicy {
        ungrouped_zoom: args.ungrouped_zoom,
        marker_width_px: args.marker_width,
        ..ClusterPolicy::default()
    }
}

/// Loads the dataset; failure here ends the process before any query
fn load_map(path: &Path, policy: ClusterPolicy) -> Result<StationMap> {
    let stations = load_path(path)
        .with_context(|| format!("loading stations from {}", path.display()))?;
    Ok(StationMap::new(stations, policy))
}

/// Runs one query and encodes the result as a GeoJSON FeatureCollection
fn run_query(map: &StationMap, viewport: &str, zoom: i64) -> Result<String> {
    let records = map
        .query(viewport, zoom)
        .with_context(|| format!("querying viewport {viewport:?} at zoom {zoom}"))?;
    serde_json::to_string_pretty(&to_feature_collection(&records)).context("encoding results")
}
