//! Typed CSV records for transect and stream-centerline elevation samples.
//!
//! Decoding is deliberately tolerant: measurement fields that fail to parse
//! become NaN and flow through to rendering, while a data line whose key
//! fields are undecodable is skipped without raising an error. Only I/O and
//! malformed CSV framing are reported to the caller.

use crate::TransectError;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::{fs::File, io::Read, path::Path};

/// Lateral sample spacing along a transect, in meters.
///
/// `vertex_index` counts samples at this fixed spacing, so cross-section
/// distance is `vertex_index as f64 * VERTEX_SPACING_M`.
pub const VERTEX_SPACING_M: f64 = 2.0;

/// One elevation sample along a cross-section perpendicular to the stream
/// centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransectPoint {
    pub transect_id: String,

    /// Sample position across the section, at [`VERTEX_SPACING_M`] spacing.
    pub vertex_index: u32,

    #[serde(deserialize_with = "lenient_f64")]
    pub elevation: f64,

    /// Dam crest elevation at this station, where one exists.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub dam_elevation: Option<f64>,
}

impl TransectPoint {
    /// Cross-section distance of this sample, in meters.
    pub fn distance_m(&self) -> f64 {
        f64::from(self.vertex_index) * VERTEX_SPACING_M
    }
}

/// One elevation sample along the stream's longitudinal centerline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamVertex {
    pub vertex_id: u32,

    #[serde(deserialize_with = "lenient_f64")]
    pub elevation: f64,

    /// Elevation adjusted to the common reference datum.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub normalized_elevation: Option<f64>,
}

/// Reads transect cross-section samples, one record per non-empty data
/// line, preserving input order.
pub fn read_transect_points<R: Read>(rdr: R) -> Result<Vec<TransectPoint>, TransectError> {
    read_records(rdr)
}

/// Reads stream centerline samples, one record per non-empty data line,
/// preserving input order.
pub fn read_stream_vertices<R: Read>(rdr: R) -> Result<Vec<StreamVertex>, TransectError> {
    read_records(rdr)
}

pub fn transect_points_from_path(path: &Path) -> Result<Vec<TransectPoint>, TransectError> {
    read_transect_points(File::open(path)?)
}

pub fn stream_vertices_from_path(path: &Path) -> Result<Vec<StreamVertex>, TransectError> {
    read_stream_vertices(File::open(path)?)
}

fn read_records<R, T>(rdr: R) -> Result<Vec<T>, TransectError>
where
    R: Read,
    T: serde::de::DeserializeOwned,
{
    let mut records = Vec::new();
    for result in csv::Reader::from_reader(rdr).into_deserialize() {
        match result {
            Ok(record) => records.push(record),
            // A row whose key fields don't decode yields no record.
            Err(e) if matches!(e.kind(), csv::ErrorKind::Deserialize { .. }) => {
                debug!("skipping undecodable row: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(records)
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(f64::NAN))
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map(str::trim).and_then(|s| {
        if s.is_empty() {
            None
        } else {
            Some(s.parse().unwrap_or(f64::NAN))
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::{read_stream_vertices, read_transect_points};

    #[test]
    fn test_two_row_transect() {
        let csv = "transect_id,vertex_index,elevation\n1,0,10.5\n1,1,9.0\n";
        let points = read_transect_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].transect_id, "1");
        assert_eq!(points[0].vertex_index, 0);
        assert_eq!(points[0].elevation, 10.5);
        assert_eq!(points[1].elevation, 9.0);
        assert_eq!(points[0].dam_elevation, None);
    }

    #[test]
    fn test_empty_input() {
        assert!(read_transect_points("".as_bytes()).unwrap().is_empty());
        assert!(read_stream_vertices("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_header_only_input() {
        let csv = "transect_id,vertex_index,elevation\n";
        assert!(read_transect_points(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_input_order_preserved() {
        let csv = "vertex_id,elevation\n3,1.0\n1,2.0\n2,3.0\n";
        let vertices = read_stream_vertices(csv.as_bytes()).unwrap();
        let ids: Vec<u32> = vertices.iter().map(|v| v.vertex_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_non_numeric_elevation_is_nan() {
        let csv = "transect_id,vertex_index,elevation\n7,0,bogus\n";
        let points = read_transect_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].elevation.is_nan());
    }

    #[test]
    fn test_undecodable_key_row_skipped() {
        let csv = "transect_id,vertex_index,elevation\n1,zero,10.5\n1,1,9.0\n";
        let points = read_transect_points(csv.as_bytes()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].vertex_index, 1);
    }

    #[test]
    fn test_optional_fields() {
        let csv = "transect_id,vertex_index,elevation,dam_elevation\n1,0,10.5,12.0\n1,1,9.0,\n";
        let points = read_transect_points(csv.as_bytes()).unwrap();
        assert_eq!(points[0].dam_elevation, Some(12.0));
        assert_eq!(points[1].dam_elevation, None);

        let csv = "vertex_id,elevation,normalized_elevation\n0,4.25,3.90\n1,4.10,\n";
        let vertices = read_stream_vertices(csv.as_bytes()).unwrap();
        assert_eq!(vertices[0].normalized_elevation, Some(3.90));
        assert_eq!(vertices[1].normalized_elevation, None);
    }

    #[test]
    fn test_distance_from_index() {
        let csv = "transect_id,vertex_index,elevation\n1,5,8.0\n";
        let points = read_transect_points(csv.as_bytes()).unwrap();
        assert_eq!(points[0].distance_m(), 10.0);
    }
}
