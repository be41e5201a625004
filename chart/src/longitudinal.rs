//! Longitudinal profile chart for the stream centerline.

use crate::{
    error::render_err,
    style::{
        finite_runs, CHART_HEIGHT, CHART_WIDTH, GRID_GREY, LONGITUDINAL_ELEVATION_DOMAIN,
        LONGITUDINAL_VERTEX_DOMAIN, MARKER_ORANGE, NORMALIZED_GREEN, PROFILE_BLUE,
        VIEWBOX_HEIGHT, VIEWBOX_WIDTH,
    },
    ChartError,
};
use log::debug;
use plotters::{prelude::*, series::DashedLineSeries};
use transect::{LinearScale, StreamVertex};

/// Renders the stream's longitudinal profile: elevation along the
/// centerline, the normalized-elevation series where present, and an
/// optional highlighted vertex.
pub struct LongitudinalChart<'a> {
    vertices: &'a [StreamVertex],
    active_vertex: Option<u32>,
}

impl<'a> LongitudinalChart<'a> {
    pub fn new(vertices: &'a [StreamVertex]) -> Self {
        Self {
            vertices,
            active_vertex: None,
        }
    }

    /// Highlights the sample at `vertex_id`, if it exists.
    pub fn active_vertex(mut self, vertex_id: Option<u32>) -> Self {
        self.active_vertex = vertex_id;
        self
    }

    pub fn render_svg(&self) -> Result<String, ChartError> {
        let x_scale = LinearScale::new(LONGITUDINAL_VERTEX_DOMAIN, (0.0, VIEWBOX_WIDTH));
        let y_scale = LinearScale::new(LONGITUDINAL_ELEVATION_DOMAIN, (0.0, VIEWBOX_HEIGHT));

        let mut samples: Vec<&StreamVertex> = self.vertices.iter().collect();
        samples.sort_by_key(|vertex| vertex.vertex_id);

        let elevation: Vec<(f64, f64)> = samples
            .iter()
            .map(|vertex| {
                (
                    x_scale.scale(f64::from(vertex.vertex_id)),
                    y_scale.scale(vertex.elevation),
                )
            })
            .collect();
        let normalized: Vec<(f64, f64)> = samples
            .iter()
            .filter_map(|vertex| {
                vertex.normalized_elevation.map(|elevation| {
                    (
                        x_scale.scale(f64::from(vertex.vertex_id)),
                        y_scale.scale(elevation),
                    )
                })
            })
            .collect();
        debug!(
            "longitudinal chart; samples: {}, normalized: {}",
            elevation.len(),
            normalized.len(),
        );

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

            let x_label = |position: &f64| format!("{:.0}", x_scale.invert(*position));
            let y_label = |position: &f64| format!("{:.1}", y_scale.invert(*position));
            chart
                .configure_mesh()
                .x_desc("Stream vertex")
                .y_desc("Elevation (m)")
                .x_labels(7)
                .y_labels(7)
                .x_label_formatter(&x_label)
                .y_label_formatter(&y_label)
                .light_line_style(GRID_GREY.mix(0.4))
                .bold_line_style(GRID_GREY)
                .draw()
                .map_err(render_err)?;

            for run in finite_runs(&elevation) {
                chart
                    .draw_series(
                        AreaSeries::new(run.iter().copied(), 0.0, PROFILE_BLUE.mix(0.25))
                            .border_style(PROFILE_BLUE.stroke_width(2)),
                    )
                    .map_err(render_err)?;
            }

            for run in finite_runs(&normalized) {
                chart
                    .draw_series(DashedLineSeries::new(
                        run.iter().copied(),
                        6,
                        4,
                        NORMALIZED_GREEN.stroke_width(1),
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

    fn marker(
        &self,
        samples: &[&StreamVertex],
        x_scale: &LinearScale,
        y_scale: &LinearScale,
    ) -> Option<(f64, f64)> {
        let active = self.active_vertex?;
        let vertex = samples.iter().find(|v| v.vertex_id == active)?;
        if !vertex.elevation.is_finite() {
            return None;
        }
        Some((
            x_scale.scale(f64::from(vertex.vertex_id)),
            y_scale.scale(vertex.elevation),
        ))
    }
}
