//! Lateral cross-section chart for a single transect.

use crate::{
    error::render_err,
    style::{
        finite_runs, CHART_HEIGHT, CHART_WIDTH, DAM_RED, GRID_GREY, LATERAL_DISTANCE_DOMAIN,
        LATERAL_ELEVATION_DOMAIN, MARKER_ORANGE, PROFILE_BLUE, VIEWBOX_HEIGHT, VIEWBOX_WIDTH,
    },
    ChartError,
};
use log::debug;
use plotters::{prelude::*, series::DashedLineSeries};
use transect::{LinearScale, TransectPoint};

/// Renders one transect's cross-section: a filled area under the profile
/// line, an optional dam-crest line, and an optional highlighted vertex.
pub struct LateralChart<'a> {
    points: &'a [TransectPoint],
    active_vertex: Option<u32>,
}

impl<'a> LateralChart<'a> {
    pub fn new(points: &'a [TransectPoint]) -> Self {
        Self {
            points,
            active_vertex: None,
        }
    }

    /// Highlights the sample at `vertex_index`, if it exists.
    pub fn active_vertex(mut self, vertex_index: Option<u32>) -> Self {
        self.active_vertex = vertex_index;
        self
    }

    pub fn render_svg(&self) -> Result<String, ChartError> {
        let x_scale = LinearScale::new(LATERAL_DISTANCE_DOMAIN, (0.0, VIEWBOX_WIDTH));
        let y_scale = LinearScale::new(LATERAL_ELEVATION_DOMAIN, (0.0, VIEWBOX_HEIGHT));

        // Sort by vertex_index into a left-to-right section.
        let mut samples: Vec<&TransectPoint> = self.points.iter().collect();
        samples.sort_by_key(|point| point.vertex_index);

        let scaled: Vec<(f64, f64)> = samples
            .iter()
            .map(|point| {
                (
                    x_scale.scale(point.distance_m()),
                    y_scale.scale(point.elevation),
                )
            })
            .collect();
        let runs = finite_runs(&scaled);
        debug!("lateral chart; samples: {}, runs: {}", scaled.len(), runs.len());

        let mut svg = String::new();
        {
            let area = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
            area.fill(&WHITE).map_err(render_err)?;

            let mut chart = ChartBuilder::on(&area)
                .margin(10)
                .set_label_area_size(LabelAreaPosition::Left, 50)
                .set_label_area_size(LabelAreaPosition::Bottom, 40)
                .build_cartesian_2d(0.0..VIEWBOX_WIDTH, 0.0..VIEWBOX_HEIGHT)
                .map_err(render_err)?;

            // Axes are drawn in viewBox coordinates; tick labels invert
            // back to data values.
            let x_label = |position: &f64| format!("{:.0}", x_scale.invert(*position));
            let y_label = |position: &f64| format!("{:.0}", y_scale.invert(*position));
            chart
                .configure_mesh()
                .x_desc("Distance across section (m)")
                .y_desc("Elevation (m)")
                .x_labels(7)
                .y_labels(7)
                .x_label_formatter(&x_label)
                .y_label_formatter(&y_label)
                .light_line_style(GRID_GREY.mix(0.4))
                .bold_line_style(GRID_GREY)
                .draw()
                .map_err(render_err)?;

            for run in &runs {
                chart
                    .draw_series(
                        AreaSeries::new(run.iter().copied(), 0.0, PROFILE_BLUE.mix(0.25))
                            .border_style(PROFILE_BLUE.stroke_width(2)),
                    )
                    .map_err(render_err)?;
            }

            if let Some(dam_elevation) = self.dam_elevation(&samples) {
                let y = y_scale.scale(dam_elevation);
                chart
                    .draw_series(DashedLineSeries::new(
                        [(0.0, y), (VIEWBOX_WIDTH, y)].into_iter(),
                        6,
                        4,
                        DAM_RED.stroke_width(1),
                    ))
                    .map_err(render_err)?;
            }

            if let Some(marker) = self.marker(&samples, &x_scale, &y_scale) {
                chart
                    .draw_series(std::iter::once(Circle::new(marker, 5, MARKER_ORANGE.filled())))
                    .map_err(render_err)?;
            }

            area.present().map_err(render_err)?;
        }
        Ok(svg)
    }

    /// Dam crest elevation for this section, from the first sample that
    /// carries one.
    fn dam_elevation(&self, samples: &[&TransectPoint]) -> Option<f64> {
        samples
            .iter()
            .find_map(|point| point.dam_elevation)
            .filter(|elevation| elevation.is_finite())
    }

    fn marker(
        &self,
        samples: &[&TransectPoint],
        x_scale: &LinearScale,
        y_scale: &LinearScale,
    ) -> Option<(f64, f64)> {
        let active = self.active_vertex?;
        let point = samples.iter().find(|p| p.vertex_index == active)?;
        if !point.elevation.is_finite() {
            return None;
        }
        Some((
            x_scale.scale(point.distance_m()),
            y_scale.scale(point.elevation),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::LateralChart;
    use transect::TransectPoint;

    fn section() -> Vec<TransectPoint> {
        (0..8)
            .map(|vertex_index| TransectPoint {
                transect_id: "T-1".to_string(),
                vertex_index,
                elevation: 12.0 - f64::from(vertex_index % 5),
                dam_elevation: Some(14.5),
            })
            .collect()
    }

    #[test]
    fn test_renders_svg() {
        let points = section();
        let svg = LateralChart::new(&points).render_svg().unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_marker_only_with_active_vertex() {
        let points = section();
        let plain = LateralChart::new(&points).render_svg().unwrap();
        let marked = LateralChart::new(&points)
            .active_vertex(Some(3))
            .render_svg()
            .unwrap();
        assert!(!plain.contains("<circle"));
        assert!(marked.contains("<circle"));
    }

    #[test]
    fn test_unknown_active_vertex_draws_no_marker() {
        let points = section();
        let svg = LateralChart::new(&points)
            .active_vertex(Some(99))
            .render_svg()
            .unwrap();
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn test_nan_samples_do_not_panic() {
        let mut points = section();
        points[3].elevation = f64::NAN;
        let svg = LateralChart::new(&points).render_svg().unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn test_empty_dataset_renders_axes() {
        let svg = LateralChart::new(&[]).render_svg().unwrap();
        assert!(svg.contains("<svg"));
    }
}
