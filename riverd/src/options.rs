use clap::Parser;
use std::{net::SocketAddr, path::PathBuf};

/// Serve stream-channel geometry data and rendered profile charts.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Directory containing transect_elevations.csv,
    /// stream_elevations.csv, and transects.geojson.
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Socket address to listen on.
    #[arg(short, long, default_value = "127.0.0.1:8780")]
    pub listen: SocketAddr,
}
