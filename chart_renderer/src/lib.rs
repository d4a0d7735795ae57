//!
//! The benchmark chart renderer library.
//!

pub mod case;
pub mod chart;
pub mod comparison;
pub mod error;
pub mod render;
pub mod table;

pub use crate::case::Comparison;
pub use crate::case::CASES;
pub use crate::case::COMPARISONS;
pub use crate::chart::canvas::Canvas;
pub use crate::chart::metric::Metric;
pub use crate::chart::png::PngCanvas;
pub use crate::chart::Chart;
pub use crate::error::Error;
pub use crate::render::render_case;
pub use crate::render::render_cross_comparison;
pub use crate::table::row::Row;
pub use crate::table::Table;
