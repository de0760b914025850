//! Frequency distribution of a measurement set and its chart.

use std::{io, path::Path};

use plotters::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::HistogramConfig,
    error::{Error, InvalidInputError},
    stats,
};

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const GRID_COLOR: RGBAColor = RGBAColor(0, 0, 0, 0.2);

/// Number of bins used for `count` measurements.
pub fn bin_count(count: usize) -> usize {
    count + 4
}

/// Upper limit of the frequency axis for a largest bin frequency of `max_frequency`.
///
/// A multiple of ten (zero included) gets ten added, anything else is rounded
/// up to the next ten and multiplied by `multiplier`. The result is never
/// below `max_frequency + 1`, so the tallest bar always fits.
pub fn y_axis_limit(max_frequency: usize, multiplier: usize) -> usize {
    let limit = if max_frequency % 10 == 0 {
        max_frequency + 10
    } else {
        max_frequency.div_ceil(10) * multiplier
    };

    limit.max(max_frequency + 1)
}

fn render_err<E: std::fmt::Display>(err: E) -> Error {
    Error::Render(err.to_string())
}

#[derive(Serialize)]
struct BinRecord {
    lower: f64,
    upper: f64,
    count: usize,
}

/// Equal width bins over `[min, max]`.
///
/// Every bin is half open except the last one, which also holds `max`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Bins `measurements` into [`bin_count`] buckets.
    pub fn new(measurements: &[f64]) -> Result<Self, InvalidInputError> {
        Self::with_bins(measurements, bin_count(measurements.len()))
    }

    pub fn with_bins(measurements: &[f64], bins: usize) -> Result<Self, InvalidInputError> {
        if measurements.is_empty() {
            return Err(InvalidInputError::Empty);
        }
        if bins == 0 {
            return Err(InvalidInputError::NonPositiveCount);
        }
        stats::check_finite(measurements)?;

        let mut min = measurements.iter().copied().fold(f64::INFINITY, f64::min);
        let mut max = measurements
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        if min == max {
            // a fixed 0.5 disappears in rounding for large magnitudes
            let pad = (min.abs() * f64::EPSILON * bins as f64).max(0.5);
            min -= pad;
            max += pad;
        }

        // interpolate instead of stepping by `max - min`, which can overflow
        let mut edges: Vec<f64> = (0..bins)
            .map(|i| {
                let t = i as f64 / bins as f64;
                min * (1.0 - t) + max * t
            })
            .collect();
        edges.push(max);
        if edges.iter().any(|edge| !edge.is_finite())
            || edges.windows(2).any(|edge| edge[0] >= edge[1])
        {
            return Err(InvalidInputError::UnsplittableRange { bins });
        }

        let mut counts = vec![0; bins];
        for &value in measurements {
            // edges[0] == min, so at least one edge is <= value
            let index = (edges.partition_point(|&edge| edge <= value) - 1).min(bins - 1);
            counts[index] += 1;
        }
        debug!(bins, min, max, "binned measurements");

        Ok(Self { edges, counts })
    }

    /// Bin boundaries, one more than there are bins.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    pub fn max_frequency(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(lower, upper, count)` for every bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edge, &count)| (edge[0], edge[1], count))
    }

    /// Writes the bin table as `lower,upper,count` csv rows.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        for (lower, upper, count) in self.bins() {
            wtr.serialize(BinRecord {
                lower,
                upper,
                count,
            })?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)
    }

    /// Draws the histogram as a bar chart into a bitmap image at `output_path`.
    pub fn render(
        &self,
        output_path: impl AsRef<Path>,
        config: &HistogramConfig,
    ) -> Result<(), Error> {
        let output_path = output_path.as_ref();

        let x_min = self.edges[0];
        let x_max = self.edges[self.edges.len() - 1];
        let y_max = y_axis_limit(self.max_frequency(), config.y_multiplier);
        debug!(?output_path, y_max, "rendering histogram");

        let root_area = BitMapBackend::new(output_path, config.size).into_drawing_area();
        root_area.fill(&WHITE).map_err(render_err)?;

        let mut ctx = ChartBuilder::on(&root_area)
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .margin(20)
            .caption(&config.title, ("sans-serif", 30))
            .build_cartesian_2d(x_min..x_max, 0f64..y_max as f64)
            .map_err(render_err)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .bold_line_style(GRID_COLOR)
            .light_line_style(TRANSPARENT)
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .draw()
            .map_err(render_err)?;

        let gap = (1.0 - config.bar_width.clamp(0.0, 1.0)) / 2.0;
        let style = SKY_BLUE.mix(0.7).filled();
        ctx.draw_series(self.bins().map(|(lower, upper, count)| {
            let inset = (upper - lower) * gap;
            Rectangle::new(
                [(lower + inset, 0.0), (upper - inset, count as f64)],
                style,
            )
        }))
        .map_err(render_err)?;

        root_area.present().map_err(render_err)?;
        info!(?output_path, "histogram written");

        Ok(())
    }
}
