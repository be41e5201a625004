use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// Plotters error types are generic over the backend; collapse them to
/// their message at the crate boundary.
pub(crate) fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}
