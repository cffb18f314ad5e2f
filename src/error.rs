use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Axis setup that can never produce a valid range (programmer error).
    #[error("invalid axis configuration: {0}")]
    InvalidConfiguration(String),

    /// Degenerate input handed directly to the interval or tick calculators.
    #[error("invalid interval input: {0}")]
    InvalidIntervalInput(String),

    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
