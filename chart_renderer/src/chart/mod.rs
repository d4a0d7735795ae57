//!
//! The line chart description.
//!

pub mod canvas;
pub mod metric;
pub mod png;

use std::ops::Range;
use std::path::PathBuf;

///
/// The line chart description.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// The output image path.
    pub path: PathBuf,
    /// The chart title.
    pub title: String,
    /// The x axis label.
    pub x_label: String,
    /// The y axis label.
    pub y_label: String,
    /// The plotted points in drawing order.
    pub points: Vec<(f64, f64)>,
}

impl Chart {
    /// The x axis label shared by all charts.
    pub const THREADS_LABEL: &'static str = "Number of Threads";

    /// The relative margin added around the plotted values.
    const RANGE_MARGIN: f64 = 0.05;

    ///
    /// A shortcut constructor for a chart with Threads on the x axis.
    ///
    pub fn over_threads(
        path: PathBuf,
        title: String,
        y_label: &str,
        points: Vec<(f64, f64)>,
    ) -> Self {
        Self {
            path,
            title,
            x_label: Self::THREADS_LABEL.to_owned(),
            y_label: y_label.to_owned(),
            points,
        }
    }

    ///
    /// Returns the padded x axis range.
    ///
    pub fn x_range(&self) -> Range<f64> {
        Self::padded_range(self.points.iter().map(|(x, _)| *x))
    }

    ///
    /// Returns the padded y axis range.
    ///
    pub fn y_range(&self) -> Range<f64> {
        Self::padded_range(self.points.iter().map(|(_, y)| *y))
    }

    fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
            (min.min(value), max.max(value))
        });
        if !min.is_finite() || !max.is_finite() {
            return 0.0..1.0;
        }
        let span = max - min;
        let margin = if span > 0.0 {
            span * Self::RANGE_MARGIN
        } else {
            f64::max(min.abs() * Self::RANGE_MARGIN, 1.0)
        };
        (min - margin)..(max + margin)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Chart;

    fn chart(points: Vec<(f64, f64)>) -> Chart {
        Chart::over_threads(PathBuf::from("chart.png"), "Title".to_owned(), "Speedup", points)
    }

    #[test]
    fn ranges() {
        let chart = chart(vec![(1.0, 20.0), (21.0, 0.0)]);

        assert_eq!(chart.x_range(), 0.0..22.0);
        assert_eq!(chart.y_range(), -1.0..21.0);
    }

    #[test]
    fn single_point_range() {
        let chart = chart(vec![(1.0, 1.0)]);

        assert_eq!(chart.x_range(), 0.0..2.0);
        assert_eq!(chart.y_range(), 0.0..2.0);
    }

    #[test]
    fn empty_range() {
        assert_eq!(chart(vec![]).x_range(), 0.0..1.0);
    }
}
