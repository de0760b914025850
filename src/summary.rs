use serde::{Deserialize, Serialize};

use crate::{error::InvalidInputError, stats};

/// All three statistics of one measurement set, computed in a single pass of
/// the mean -> deviation -> mean deviation chain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub deviation: f64,
    pub mean_deviation: f64,
}

impl Summary {
    pub fn from_measurements(measurements: &[f64]) -> Result<Self, InvalidInputError> {
        let mean = stats::mean(measurements)?;
        let deviation = stats::deviation(measurements, mean)?;
        let mean_deviation = stats::mean_deviation(deviation, measurements.len())?;

        Ok(Self {
            count: measurements.len(),
            mean,
            deviation,
            mean_deviation,
        })
    }
}
