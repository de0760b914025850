//! Mean, sample standard deviation and standard deviation of the mean.
//!
//! The three functions take already computed inputs instead of the raw
//! measurements at every stage, so they can be chained or used on their own.

use tracing::debug;

use crate::error::InvalidInputError;

pub(crate) fn check_finite(measurements: &[f64]) -> Result<(), InvalidInputError> {
    match measurements.iter().position(|value| !value.is_finite()) {
        Some(index) => Err(InvalidInputError::NonFinite { index }),
        None => Ok(()),
    }
}

/// Arithmetic mean. The sum is accumulated left to right.
pub fn mean(measurements: &[f64]) -> Result<f64, InvalidInputError> {
    if measurements.is_empty() {
        return Err(InvalidInputError::Empty);
    }
    check_finite(measurements)?;

    let sum = measurements.iter().sum::<f64>();
    let mean = sum / measurements.len() as f64;
    debug!(count = measurements.len(), mean, "computed mean");

    Ok(mean)
}

/// Sample standard deviation (divisor `n - 1`) around a caller supplied mean.
///
/// `mean` is not checked against `measurements`. Passing anything other than
/// `mean(measurements)` gives the root mean square distance from that value
/// instead. Use [`Summary`](crate::summary::Summary) to compute both together.
/// Non-finite measurements are rejected, a non-finite `mean` is not.
pub fn deviation(measurements: &[f64], mean: f64) -> Result<f64, InvalidInputError> {
    let count = measurements.len();
    if count < 2 {
        return Err(InvalidInputError::TooFewMeasurements {
            required: 2,
            actual: count,
        });
    }
    check_finite(measurements)?;

    let squared_sum = measurements
        .iter()
        .map(|value| {
            let diff = value - mean;

            diff * diff
        })
        .sum::<f64>();
    let deviation = (squared_sum / (count - 1) as f64).sqrt();
    debug!(count, deviation, "computed standard deviation");

    Ok(deviation)
}

/// Standard deviation of the mean (standard error): `deviation / sqrt(count)`.
pub fn mean_deviation(deviation: f64, count: usize) -> Result<f64, InvalidInputError> {
    if count == 0 {
        return Err(InvalidInputError::NonPositiveCount);
    }

    let mean_deviation = deviation / (count as f64).sqrt();
    debug!(count, mean_deviation, "computed standard deviation of the mean");

    Ok(mean_deviation)
}
