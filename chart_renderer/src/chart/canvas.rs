//!
//! The chart drawing target.
//!

use crate::chart::Chart;
use crate::error::Error;

///
/// The chart drawing target.
///
pub trait Canvas {
    ///
    /// Draws the chart and saves it to `chart.path`, replacing an existing file.
    ///
    fn draw(&mut self, chart: &Chart) -> Result<(), Error>;
}
