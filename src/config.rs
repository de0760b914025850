/// Settings for the histogram chart.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Canvas size in pixels.
    pub size: (u32, u32),
    /// `K` in the y-axis policy, see [`y_axis_limit`](crate::histogram::y_axis_limit).
    pub y_multiplier: usize,
    /// Fraction of the bin width covered by a bar.
    pub bar_width: f64,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            title: "Distribution of the measurements".to_string(),
            x_label: "Measured value".to_string(),
            y_label: "Frequency".to_string(),
            // 12x10 inches at 80 dpi
            size: (960, 800),
            y_multiplier: 3,
            bar_width: 0.95,
        }
    }
}
