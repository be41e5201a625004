use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render stream-channel elevation profiles from flat data files.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Directory containing transect_elevations.csv and
    /// stream_elevations.csv.
    #[arg(short, long, default_value = "data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lateral cross-section of one transect.
    Lateral {
        /// Transect identifier.
        #[arg(short, long)]
        transect_id: String,

        #[command(subcommand)]
        out: Output,
    },

    /// Longitudinal profile of the stream centerline.
    Longitudinal {
        #[command(subcommand)]
        out: Output,
    },
}

#[derive(Debug, Subcommand)]
pub enum Output {
    /// Print an ASCII chart to the terminal.
    Display,

    /// Print samples as JSON.
    Json,

    /// Export an SVG.
    Svg {
        /// SVG file path.
        out: PathBuf,
    },
}
