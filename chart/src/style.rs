//! Shared chart geometry and palette.

use plotters::style::RGBColor;

/// Rendered SVG size in device pixels.
pub(crate) const CHART_WIDTH: u32 = 720;
pub(crate) const CHART_HEIGHT: u32 = 360;

/// Virtual viewBox the coordinate scalers target. Plotters maps this
/// affinely onto the plot rectangle left over after label areas.
pub(crate) const VIEWBOX_WIDTH: f64 = 640.0;
pub(crate) const VIEWBOX_HEIGHT: f64 = 320.0;

/// Fixed data domains, hardcoded rather than derived from data so that
/// charts of different transects stay visually comparable.
pub const LATERAL_DISTANCE_DOMAIN: (f64, f64) = (0.0, 20.0);
pub const LATERAL_ELEVATION_DOMAIN: (f64, f64) = (0.0, 30.0);
pub const LONGITUDINAL_VERTEX_DOMAIN: (f64, f64) = (0.0, 24.0);
pub const LONGITUDINAL_ELEVATION_DOMAIN: (f64, f64) = (0.0, 15.0);

pub(crate) const PROFILE_BLUE: RGBColor = RGBColor(54, 116, 181);
pub(crate) const DAM_RED: RGBColor = RGBColor(196, 78, 82);
pub(crate) const MARKER_ORANGE: RGBColor = RGBColor(230, 145, 56);
pub(crate) const NORMALIZED_GREEN: RGBColor = RGBColor(85, 158, 131);
pub(crate) const GRID_GREY: RGBColor = RGBColor(221, 221, 221);

/// Splits scaled samples into runs of finite points. NaN measurements
/// break the drawn path instead of producing degenerate geometry.
pub(crate) fn finite_runs(samples: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in samples {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::finite_runs;

    #[test]
    fn test_finite_runs_split_on_nan() {
        let samples = [
            (0.0, 1.0),
            (2.0, 2.0),
            (4.0, f64::NAN),
            (6.0, 3.0),
            (8.0, 4.0),
        ];
        let runs = finite_runs(&samples);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], vec![(0.0, 1.0), (2.0, 2.0)]);
        assert_eq!(runs[1], vec![(6.0, 3.0), (8.0, 4.0)]);
    }

    #[test]
    fn test_finite_runs_all_nan() {
        let samples = [(0.0, f64::NAN), (2.0, f64::NAN)];
        assert!(finite_runs(&samples).is_empty());
    }
}
