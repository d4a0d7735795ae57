//!
//! The PNG chart canvas.
//!

use std::path::Path;

use plotters::prelude::*;

use crate::chart::canvas::Canvas;
use crate::chart::Chart;
use crate::error::Error;

///
/// The PNG chart canvas.
///
#[derive(Debug, Clone, Copy)]
pub struct PngCanvas {
    /// The image width in pixels.
    pub width: u32,
    /// The image height in pixels.
    pub height: u32,
}

impl PngCanvas {
    /// The caption font size.
    const CAPTION_FONT_SIZE: f64 = 22.0;
    /// The marker radius in pixels.
    const MARKER_RADIUS: i32 = 4;
}

impl Default for PngCanvas {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

impl Canvas for PngCanvas {
    fn draw(&mut self, chart: &Chart) -> Result<(), Error> {
        if let Some(parent) = chart.path.parent() {
            std::fs::create_dir_all(parent).map_err(|error| Error::CreatingDirectory {
                error,
                path: parent.to_path_buf(),
            })?;
        }
        let path = chart.path.as_path();

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|error| drawing_error(path, error))?;

        let mut context = ChartBuilder::on(&root)
            .caption(chart.title.as_str(), ("sans-serif", Self::CAPTION_FONT_SIZE))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(chart.x_range(), chart.y_range())
            .map_err(|error| drawing_error(path, error))?;
        context
            .configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .draw()
            .map_err(|error| drawing_error(path, error))?;

        context
            .draw_series(LineSeries::new(chart.points.iter().copied(), &BLUE))
            .map_err(|error| drawing_error(path, error))?;
        context
            .draw_series(
                chart
                    .points
                    .iter()
                    .map(|point| Circle::new(*point, Self::MARKER_RADIUS, BLUE.filled())),
            )
            .map_err(|error| drawing_error(path, error))?;

        root.present().map_err(|error| drawing_error(path, error))?;
        Ok(())
    }
}

///
/// Wraps a backend error with the chart path.
///
fn drawing_error<E>(path: &Path, error: E) -> Error
where
    E: std::fmt::Display,
{
    Error::Drawing {
        message: error.to_string(),
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use crate::chart::canvas::Canvas;
    use crate::chart::Chart;

    use super::PngCanvas;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn creates_directory_and_overwrites() {
        let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
        let path = directory
            .path()
            .join("missing")
            .join("speedup_xstreams_1.png");
        let mut canvas = PngCanvas::default();

        for last in [2.0, 4.0] {
            let chart = Chart::over_threads(
                path.clone(),
                "Speedup vs Threads (Xstreams=1) (case)".to_owned(),
                "Speedup",
                vec![(1.0, 1.0), (2.0, last)],
            );
            canvas.draw(&chart).expect("Failed to draw");

            assert!(directory.path().join("missing").is_dir());
            let bytes = std::fs::read(path.as_path()).expect("Failed to read");
            assert!(bytes.starts_with(&PNG_SIGNATURE));
        }
    }
}
