// SPDX-License-Identifier: MPL-2.0
//! Canvas-based charts for the dashboard.
//!
//! Both charts are immediate-mode `canvas::Program` implementations over
//! the sample metric series; they carry no interactive state.

pub mod bar_chart;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;

/// Padding inside the chart frame, leaving room for axis labels.
pub(crate) const CHART_INSET: f32 = 28.0;

/// Maps a data value into the vertical pixel range of the plot area.
///
/// `max` must be positive; callers normalize their series first.
pub(crate) fn scale_y(value: f32, max: f32, height: f32) -> f32 {
    let plot_height = (height - 2.0 * CHART_INSET).max(1.0);
    height - CHART_INSET - (value / max) * plot_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_y_is_monotonic_downward() {
        // Larger values sit higher on screen (smaller y).
        let low = scale_y(10.0, 100.0, 220.0);
        let high = scale_y(90.0, 100.0, 220.0);
        assert!(high < low);
    }

    #[test]
    fn scale_y_pins_extremes_to_insets() {
        let height = 220.0;
        assert_eq!(scale_y(0.0, 100.0, height), height - CHART_INSET);
        assert_eq!(scale_y(100.0, 100.0, height), CHART_INSET);
    }
}
