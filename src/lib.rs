pub mod config;
pub mod error;
pub mod histogram;
pub mod stats;
pub mod summary;

pub use error::{Error, InvalidInputError};
pub use summary::Summary;

/// Measurements the command line tool analyzes when none are given.
pub const REFERENCE_MEASUREMENTS: [f64; 10] =
    [1.24, 1.2, 1.23, 1.17, 1.15, 1.26, 1.2, 1.23, 1.16, 1.17];
