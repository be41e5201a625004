//! Nearest-transect search for a hovered geographic point.

use crate::{feature::TransectSet, TransectFeature};
use geo::Point;
use log::debug;
use serde::Serialize;

/// Result of a nearest-transect query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestTransect {
    pub transect_id: String,
    pub stream_vertex_id: Option<u32>,
    pub distance_m: f64,
}

/// Returns the transect whose closest vertex is nearest to `point`, or
/// `None` when no transects are loaded.
///
/// Every vertex of every line is visited, O(transects × vertices) per
/// call; the candidate sets this runs over are small enough that a
/// spatial index would be overhead. Comparison is strict `<`, so on an
/// exact distance tie the first transect in feature order wins.
pub fn nearest_transect(point: Point<f64>, transects: &TransectSet) -> Option<NearestTransect> {
    let mut best: Option<(&TransectFeature, f64)> = None;
    for feature in transects.iter() {
        let Some(distance) = feature.min_distance_m(point) else {
            continue;
        };
        let closer = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance,
        };
        if closer {
            best = Some((feature, distance));
        }
    }

    debug!(
        "nearest; candidates: {}, best: {:?}",
        transects.len(),
        best.map(|(f, d)| (f.transect_id.as_str(), d)),
    );

    best.map(|(feature, distance_m)| NearestTransect {
        transect_id: feature.transect_id.clone(),
        stream_vertex_id: feature.stream_vertex_id,
        distance_m,
    })
}

#[cfg(test)]
mod tests {
    use super::nearest_transect;
    use crate::{TransectFeature, TransectSet};
    use approx::assert_relative_eq;
    use geo::{point, Point};

    fn feature(transect_id: &str, stream_vertex_id: u32, line: Vec<Point<f64>>) -> TransectFeature {
        TransectFeature {
            transect_id: transect_id.to_string(),
            stream_vertex_id: Some(stream_vertex_id),
            length_m: None,
            spacing_m: None,
            line,
        }
    }

    fn river_reach() -> TransectSet {
        TransectSet::new(vec![
            feature(
                "T-1",
                2,
                vec![
                    point!(x: -120.2115, y: 47.6730),
                    point!(x: -120.2113, y: 47.6731),
                    point!(x: -120.2111, y: 47.6732),
                ],
            ),
            feature(
                "T-2",
                5,
                vec![
                    point!(x: -120.2100, y: 47.6738),
                    point!(x: -120.2098, y: 47.6739),
                ],
            ),
            feature(
                "T-3",
                9,
                vec![
                    point!(x: -120.2084, y: 47.6745),
                    point!(x: -120.2082, y: 47.6746),
                ],
            ),
        ])
    }

    #[test]
    fn test_empty_set() {
        let empty = TransectSet::default();
        assert!(nearest_transect(point!(x: 0.0, y: 0.0), &empty).is_none());
    }

    #[test]
    fn test_query_at_known_vertex_returns_its_transect() {
        let transects = river_reach();
        // Exact coordinates of the middle vertex of T-1.
        let hit = nearest_transect(point!(x: -120.2113, y: 47.6731), &transects).unwrap();
        assert_eq!(hit.transect_id, "T-1");
        assert_eq!(hit.stream_vertex_id, Some(2));
        assert_relative_eq!(hit.distance_m, 0.0);
    }

    #[test]
    fn test_every_vertex_round_trips() {
        let transects = river_reach();
        for feature in transects.iter() {
            for vertex in &feature.line {
                let hit = nearest_transect(*vertex, &transects).unwrap();
                assert_eq!(hit.transect_id, feature.transect_id);
                assert_relative_eq!(hit.distance_m, 0.0);
            }
        }
    }

    #[test]
    fn test_nearby_point() {
        let transects = river_reach();
        let hit = nearest_transect(point!(x: -120.2099, y: 47.6738), &transects).unwrap();
        assert_eq!(hit.transect_id, "T-2");
        assert!(hit.distance_m > 0.0);
        assert!(hit.distance_m < 20.0);
    }

    #[test]
    fn test_first_seen_wins_exact_tie() {
        // Two transects sharing an identical vertex; the query sits on it.
        let shared = point!(x: -120.2090, y: 47.6742);
        let transects = TransectSet::new(vec![
            feature("T-A", 1, vec![shared]),
            feature("T-B", 2, vec![shared]),
        ]);
        let hit = nearest_transect(shared, &transects).unwrap();
        assert_eq!(hit.transect_id, "T-A");
    }
}
