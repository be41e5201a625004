use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransectError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    GeoJson(#[from] geojson::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("no transect features in {0}")]
    Path(PathBuf),

    #[error("unknown transect {0}")]
    UnknownTransect(String),
}
