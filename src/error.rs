use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("price series is empty")]
    EmptySeries,

    #[error("invalid visible window: {hours} hours")]
    InvalidWindow { hours: usize },

    #[error("invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("live clock timer failed to start: {0}")]
    ClockTimer(#[from] std::io::Error),
}
