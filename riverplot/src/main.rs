mod options;

use anyhow::Error as AnyError;
use chart::{LateralChart, LongitudinalChart};
use clap::Parser;
use options::{Cli, Command as CliCmd, Output};
use serde::Serialize;
use textplots::{Chart, Plot, Shape};
use transect::{
    stream_vertices_from_path, transect_points_from_path, StreamVertex, TransectError,
    TransectPoint,
};

const TRANSECT_CSV: &str = "transect_elevations.csv";
const STREAM_CSV: &str = "stream_elevations.csv";

fn main() -> Result<(), AnyError> {
    env_logger::init();
    let Cli { data_dir, cmd } = Cli::parse();

    match cmd {
        CliCmd::Lateral { transect_id, out } => {
            let mut points = transect_points_from_path(&data_dir.join(TRANSECT_CSV))?;
            points.retain(|point| point.transect_id == transect_id);
            if points.is_empty() {
                return Err(TransectError::UnknownTransect(transect_id).into());
            }
            points.sort_by_key(|point| point.vertex_index);

            match out {
                Output::Display => plot_ascii(
                    points
                        .iter()
                        .map(|point| (point.distance_m(), point.elevation)),
                ),
                Output::Json => print_lateral_json(&points),
                Output::Svg { out } => {
                    let svg = LateralChart::new(&points).render_svg()?;
                    std::fs::write(out, svg)?;
                    Ok(())
                }
            }
        }
        CliCmd::Longitudinal { out } => {
            let mut vertices = stream_vertices_from_path(&data_dir.join(STREAM_CSV))?;
            vertices.sort_by_key(|vertex| vertex.vertex_id);

            match out {
                Output::Display => plot_ascii(
                    vertices
                        .iter()
                        .map(|vertex| (f64::from(vertex.vertex_id), vertex.elevation)),
                ),
                Output::Json => print_longitudinal_json(&vertices),
                Output::Svg { out } => {
                    let svg = LongitudinalChart::new(&vertices).render_svg()?;
                    std::fs::write(out, svg)?;
                    Ok(())
                }
            }
        }
    }
}

fn plot_ascii(samples: impl Iterator<Item = (f64, f64)>) -> Result<(), AnyError> {
    #[allow(clippy::cast_possible_truncation)]
    let plot_data: Vec<(f32, f32)> = samples
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| (x as f32, y as f32))
        .collect();
    let x_max = plot_data.last().map_or(1.0, |(x, _)| *x);
    Chart::new(300, 150, 0.0, x_max)
        .lineplot(&Shape::Lines(&plot_data))
        .display();
    Ok(())
}

fn print_lateral_json(points: &[TransectPoint]) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonEntry<'a> {
        transect_id: &'a str,
        distance_m: f64,
        elevation: f64,
        dam_elevation: Option<f64>,
    }

    let reshaped: Vec<JsonEntry> = points
        .iter()
        .map(|point| JsonEntry {
            transect_id: &point.transect_id,
            distance_m: point.distance_m(),
            elevation: point.elevation,
            dam_elevation: point.dam_elevation,
        })
        .collect();
    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}

fn print_longitudinal_json(vertices: &[StreamVertex]) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonEntry {
        vertex_id: u32,
        elevation: f64,
        normalized_elevation: Option<f64>,
    }

    let reshaped: Vec<JsonEntry> = vertices
        .iter()
        .map(|vertex| JsonEntry {
            vertex_id: vertex.vertex_id,
            elevation: vertex.elevation,
            normalized_elevation: vertex.normalized_elevation,
        })
        .collect();
    let json = serde_json::to_string(&reshaped)?;
    println!("{json}");
    Ok(())
}
