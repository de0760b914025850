use thiserror::Error;

/// Rejected measurement input. Every statistic either succeeds or fails with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("measurement set is empty")]
    Empty,

    #[error("need at least {required} measurements, got {actual}")]
    TooFewMeasurements { required: usize, actual: usize },

    #[error("measurement count must be positive")]
    NonPositiveCount,

    #[error("measurement at index {index} is not a finite number")]
    NonFinite { index: usize },

    #[error("measurement range cannot be split into {bins} bins")]
    UnsplittableRange { bins: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("failed to render histogram: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to write bin table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}
