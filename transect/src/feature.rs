//! Transect line features loaded from a GeoJSON FeatureCollection.

use crate::{math::haversine_distance, TransectError};
use geo::Point;
use geojson::{Feature, GeoJson, Value};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::{fs::File, io::Read, path::Path};

/// A cross-section line tagged with its identity and stream anchor.
///
/// Immutable once loaded; identity is `transect_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransectFeature {
    pub transect_id: String,

    /// Centerline vertex this transect crosses.
    pub stream_vertex_id: Option<u32>,

    /// Surveyed section length in meters.
    pub length_m: Option<f64>,

    /// Sample spacing along the section in meters.
    pub spacing_m: Option<f64>,

    /// Ordered lon/lat vertices of the section line.
    pub line: Vec<Point<f64>>,
}

impl TransectFeature {
    pub fn vertex_count(&self) -> usize {
        self.line.len()
    }

    /// Distance in meters from `point` to this line's closest vertex, or
    /// `None` for a vertexless line.
    pub fn min_distance_m(&self, point: Point<f64>) -> Option<f64> {
        let mut best: Option<f64> = None;
        for vertex in &self.line {
            let distance = haversine_distance(point, *vertex);
            let closer = match best {
                None => true,
                Some(best_distance) => distance < best_distance,
            };
            if closer {
                best = Some(distance);
            }
        }
        best
    }
}

/// Transect features in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransectSet {
    features: Vec<TransectFeature>,
}

impl TransectSet {
    pub fn new(features: Vec<TransectFeature>) -> Self {
        Self { features }
    }

    /// Loads the FeatureCollection at `path`, failing early when it holds
    /// no usable transect lines.
    pub fn from_path(path: &Path) -> Result<Self, TransectError> {
        let set = Self::from_reader(File::open(path)?)?;
        if set.is_empty() {
            return Err(TransectError::Path(path.to_path_buf()));
        }
        Ok(set)
    }

    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, TransectError> {
        let geojson = GeoJson::from_reader(rdr)?;
        Ok(Self::from_geojson(&geojson))
    }

    /// Collects every usable transect line feature, preserving collection
    /// order. Features without a line geometry or a transect identifier
    /// yield nothing.
    pub fn from_geojson(geojson: &GeoJson) -> Self {
        let features = match geojson {
            GeoJson::FeatureCollection(collection) => collection
                .features
                .iter()
                .filter_map(feature_line)
                .collect(),
            GeoJson::Feature(feature) => feature_line(feature).into_iter().collect(),
            GeoJson::Geometry(_) => Vec::new(),
        };
        Self { features }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TransectFeature> {
        self.features.iter()
    }

    pub fn get(&self, transect_id: &str) -> Option<&TransectFeature> {
        self.features.iter().find(|f| f.transect_id == transect_id)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Typed view of a transect feature's GeoJSON properties.
#[derive(Debug, Deserialize)]
struct FeatureProperties {
    #[serde(deserialize_with = "id_string")]
    transect_id: String,

    #[serde(default)]
    stream_vertex_id: Option<u32>,

    #[serde(default)]
    length_m: Option<f64>,

    #[serde(default)]
    spacing_m: Option<f64>,
}

/// Accepts both string and numeric identifiers; `7` reads as `"7"`.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(id) => id,
        Id::Number(id) => id.to_string(),
    })
}

fn feature_line(feature: &Feature) -> Option<TransectFeature> {
    let Some(geometry) = &feature.geometry else {
        debug!("skipping feature without geometry");
        return None;
    };
    let Value::LineString(positions) = &geometry.value else {
        debug!("skipping non-line geometry {:?}", geometry.value.type_name());
        return None;
    };

    let raw = feature.properties.clone().unwrap_or_default();
    let properties = match serde_json::from_value::<FeatureProperties>(
        serde_json::Value::Object(raw),
    ) {
        Ok(properties) => properties,
        Err(e) => {
            debug!("skipping line feature without usable properties: {e}");
            return None;
        }
    };

    let line = positions
        .iter()
        .filter(|position| position.len() >= 2)
        .map(|position| Point::new(position[0], position[1]))
        .collect();

    Some(TransectFeature {
        transect_id: properties.transect_id,
        stream_vertex_id: properties.stream_vertex_id,
        length_m: properties.length_m,
        spacing_m: properties.spacing_m,
        line,
    })
}
