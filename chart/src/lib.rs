mod error;
mod lateral;
mod longitudinal;
mod style;

pub use crate::{
    error::ChartError,
    lateral::LateralChart,
    longitudinal::LongitudinalChart,
    style::{
        LATERAL_DISTANCE_DOMAIN, LATERAL_ELEVATION_DOMAIN, LONGITUDINAL_ELEVATION_DOMAIN,
        LONGITUDINAL_VERTEX_DOMAIN,
    },
};
