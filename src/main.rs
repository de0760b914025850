use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use deviation::{
    config::HistogramConfig, histogram::Histogram, stats, Error, Summary, REFERENCE_MEASUREMENTS,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Mean, standard deviation and standard deviation of the mean of a set of measurements
#[derive(Parser, Debug)]
#[command(name = "deviation", version)]
struct Args {
    /// Measurements to analyze, defaults to a built-in sample of ten values
    #[arg(allow_negative_numbers = true)]
    measurements: Vec<f64>,

    /// Print the results as json
    #[arg(long)]
    json: bool,

    /// Render a histogram of the measurements to this png file
    #[arg(long)]
    histogram: Option<PathBuf>,

    /// Write the histogram bins to this csv file
    #[arg(long)]
    bins_csv: Option<PathBuf>,

    /// Multiplier of the frequency axis limit
    #[arg(long, default_value_t = 3)]
    y_multiplier: usize,

    /// Histogram width in pixels
    #[arg(long, default_value_t = 960)]
    width: u32,

    /// Histogram height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,
}

impl Args {
    fn histogram_config(&self) -> HistogramConfig {
        HistogramConfig {
            size: (self.width, self.height),
            y_multiplier: self.y_multiplier,
            ..HistogramConfig::default()
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let measurements = if args.measurements.is_empty() {
        REFERENCE_MEASUREMENTS.to_vec()
    } else {
        args.measurements.clone()
    };

    if args.json {
        let summary = Summary::from_measurements(&measurements)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Mean and standard deviation of measurements\n");
        println!("We have the following measurements: {measurements:?}\n");

        let mean = stats::mean(&measurements)?;
        let deviation = stats::deviation(&measurements, mean)?;
        let mean_deviation = stats::mean_deviation(deviation, measurements.len())?;

        println!("Mean of all measurements: {mean}");
        println!("Standard deviation of all measurements: {deviation}");
        println!("Standard deviation of the mean of all measurements: {mean_deviation}");
    }

    if args.histogram.is_none() && args.bins_csv.is_none() {
        return Ok(());
    }

    let histogram = Histogram::new(&measurements)?;
    if let Some(path) = &args.bins_csv {
        histogram.write_csv_file(path)?;
    }
    if let Some(path) = &args.histogram {
        histogram.render(path, &args.histogram_config())?;
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
