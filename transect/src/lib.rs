pub use geo;

mod error;
mod feature;
mod locate;
mod math;
mod records;
mod scale;

pub use crate::{
    error::TransectError,
    feature::{TransectFeature, TransectSet},
    locate::{nearest_transect, NearestTransect},
    records::{
        read_stream_vertices, read_transect_points, stream_vertices_from_path,
        transect_points_from_path, StreamVertex, TransectPoint, VERTEX_SPACING_M,
    },
    scale::LinearScale,
};
