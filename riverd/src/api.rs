//! HTTP surface: elevation data endpoints, transect overlay passthrough,
//! nearest-transect lookup, tile-provider config, and rendered charts.
//!
//! Every handler re-reads its flat file per request; nothing is cached,
//! so edits to the data directory show up on the next request.

use crate::html;
use axum::{
    extract::{Path as UrlPath, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chart::{LateralChart, LongitudinalChart};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use transect::{
    geo::point, nearest_transect, read_stream_vertices, read_transect_points, NearestTransect,
    StreamVertex, TransectError, TransectPoint, TransectSet,
};

const TRANSECT_CSV: &str = "transect_elevations.csv";
const STREAM_CSV: &str = "stream_elevations.csv";
const TRANSECTS_GEOJSON: &str = "transects.geojson";

/// Environment variable holding a satellite tile provider token.
const TILE_TOKEN_ENV: &str = "SATELLITE_TILE_TOKEN";
const SATELLITE_TILE_URL: &str = "https://api.maptiler.com/tiles/satellite-v2/{z}/{x}/{y}.jpg?key=";
const FALLBACK_TILE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";

/// Shared state backing HTTP handlers.
pub struct ServerState {
    data_dir: PathBuf,
    tiles: TileConfig,
}

impl ServerState {
    pub fn new(data_dir: PathBuf) -> Self {
        let tiles = TileConfig::select(std::env::var(TILE_TOKEN_ENV).ok().as_deref());
        Self { data_dir, tiles }
    }
}

/// Base tile layer handed to the map page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileConfig {
    url: String,
    attribution: String,
}

impl TileConfig {
    /// Satellite tiles when a token is available, public imagery
    /// otherwise.
    fn select(token: Option<&str>) -> Self {
        match token {
            Some(token) if !token.is_empty() => Self {
                url: format!("{SATELLITE_TILE_URL}{token}"),
                attribution: "© MapTiler © OpenStreetMap contributors".to_string(),
            },
            _ => Self {
                url: FALLBACK_TILE_URL.to_string(),
                attribution: "Esri World Imagery".to_string(),
            },
        }
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/api/transect-elevations", get(transect_elevations))
        .route("/api/stream-elevations", get(stream_elevations))
        .route("/api/transects.geojson", get(transects_geojson))
        .route("/api/nearest", get(nearest))
        .route("/api/map-config", get(map_config))
        .route("/charts/lateral/:transect", get(lateral_chart))
        .route("/charts/longitudinal.svg", get(longitudinal_chart))
        .layer(cors)
        .with_state(state)
}

#[derive(Serialize)]
struct DataResponse<T> {
    data: T,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Deserialize)]
struct ElevationQuery {
    transect_id: Option<String>,
}

#[derive(Deserialize)]
struct NearestQuery {
    lat: f64,
    lon: f64,
}

#[derive(Deserialize)]
struct MarkerQuery {
    active_vertex: Option<u32>,
}

async fn index() -> Html<&'static str> {
    Html(html::MAP_PAGE)
}

async fn transect_elevations(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<ElevationQuery>,
) -> Response {
    match load_transect_points(&state).await {
        Ok(mut points) => {
            // Unmatched identifiers filter to an empty array, not an
            // error.
            if let Some(transect_id) = query.transect_id {
                points.retain(|point| point.transect_id == transect_id);
            }
            Json(DataResponse { data: points }).into_response()
        }
        Err(e) => internal_error(e),
    }
}

async fn stream_elevations(State(state): State<Arc<ServerState>>) -> Response {
    match load_stream_vertices(&state).await {
        Ok(vertices) => Json(DataResponse { data: vertices }).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn transects_geojson(State(state): State<Arc<ServerState>>) -> Response {
    match tokio::fs::read(state.data_dir.join(TRANSECTS_GEOJSON)).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/geo+json")], bytes).into_response(),
        Err(e) => internal_error(e),
    }
}

async fn nearest(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<NearestQuery>,
) -> Response {
    match load_transects(&state).await {
        Ok(transects) => {
            let hit: Option<NearestTransect> =
                nearest_transect(point!(x: query.lon, y: query.lat), &transects);
            debug!("nearest ({}, {}) -> {hit:?}", query.lat, query.lon);
            Json(DataResponse { data: hit }).into_response()
        }
        Err(e) => internal_error(e),
    }
}

async fn map_config(State(state): State<Arc<ServerState>>) -> Response {
    Json(state.tiles.clone()).into_response()
}

async fn lateral_chart(
    State(state): State<Arc<ServerState>>,
    UrlPath(transect): UrlPath<String>,
    Query(marker): Query<MarkerQuery>,
) -> Response {
    // Accept both `/charts/lateral/T-1` and `/charts/lateral/T-1.svg`.
    let transect_id = transect.strip_suffix(".svg").unwrap_or(&transect);

    match load_transect_points(&state).await {
        Ok(mut points) => {
            points.retain(|point| point.transect_id == transect_id);
            if points.is_empty() {
                let error = TransectError::UnknownTransect(transect_id.to_string());
                return (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse {
                        error: error.to_string(),
                    }),
                )
                    .into_response();
            }
            match LateralChart::new(&points)
                .active_vertex(marker.active_vertex)
                .render_svg()
            {
                Ok(svg) => svg_response(svg),
                Err(e) => internal_error(e),
            }
        }
        Err(e) => internal_error(e),
    }
}

async fn longitudinal_chart(
    State(state): State<Arc<ServerState>>,
    Query(marker): Query<MarkerQuery>,
) -> Response {
    match load_stream_vertices(&state).await {
        Ok(vertices) => match LongitudinalChart::new(&vertices)
            .active_vertex(marker.active_vertex)
            .render_svg()
        {
            Ok(svg) => svg_response(svg),
            Err(e) => internal_error(e),
        },
        Err(e) => internal_error(e),
    }
}

async fn load_transect_points(state: &ServerState) -> Result<Vec<TransectPoint>, TransectError> {
    let bytes = tokio::fs::read(state.data_dir.join(TRANSECT_CSV)).await?;
    read_transect_points(bytes.as_slice())
}

async fn load_stream_vertices(state: &ServerState) -> Result<Vec<StreamVertex>, TransectError> {
    let bytes = tokio::fs::read(state.data_dir.join(STREAM_CSV)).await?;
    read_stream_vertices(bytes.as_slice())
}

async fn load_transects(state: &ServerState) -> Result<TransectSet, TransectError> {
    let bytes = tokio::fs::read(state.data_dir.join(TRANSECTS_GEOJSON)).await?;
    TransectSet::from_reader(bytes.as_slice())
}

fn svg_response(svg: String) -> Response {
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

fn internal_error<E: std::fmt::Display>(error: E) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::{router, ServerState, TileConfig};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::{path::PathBuf, sync::Arc};
    use tower::ServiceExt;

    fn sample_data_dir() -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "..", "data"].iter().collect()
    }

    async fn get(data_dir: PathBuf, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router(Arc::new(ServerState::new(data_dir)))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_transect_elevations() {
        let (status, json) = get(sample_data_dir(), "/api/transect-elevations").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!json["data"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_filter_matches_one_transect() {
        let (status, json) =
            get(sample_data_dir(), "/api/transect-elevations?transect_id=T-2").await;
        assert_eq!(status, StatusCode::OK);
        let data = json["data"].as_array().unwrap();
        assert!(!data.is_empty());
        assert!(data.iter().all(|row| row["transect_id"] == "T-2"));
    }

    #[tokio::test]
    async fn test_unmatched_filter_is_empty_not_error() {
        let (status, json) =
            get(sample_data_dir(), "/api/transect-elevations?transect_id=nope").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_missing_file_is_500_with_message() {
        let (status, json) = get(PathBuf::from("no-such-dir"), "/api/stream-elevations").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_nearest_at_known_vertex() {
        let (status, json) = get(
            sample_data_dir(),
            "/api/nearest?lat=47.67305&lon=-120.21150",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["transect_id"], "T-1");
    }

    #[tokio::test]
    async fn test_unknown_lateral_chart_is_404() {
        let (status, json) = get(sample_data_dir(), "/charts/lateral/T-9.svg").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("T-9"));
    }

    #[test]
    fn test_tile_config_token_selects_satellite() {
        let satellite = TileConfig::select(Some("abc123"));
        assert!(satellite.url.contains("abc123"));
        assert!(satellite.url.contains("satellite"));
    }

    #[test]
    fn test_tile_config_fallback_without_token() {
        for token in [None, Some("")] {
            let fallback = TileConfig::select(token);
            assert_eq!(fallback, TileConfig::select(None));
            assert!(!fallback.url.contains("key="));
        }
    }
}
