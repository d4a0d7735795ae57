//!
//! The benchmark chart rendering.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::case::Comparison;
use crate::chart::canvas::Canvas;
use crate::chart::metric::Metric;
use crate::chart::Chart;
use crate::error::Error;
use crate::table::Table;

///
/// Builds the mean time and speedup charts of every Xstreams partition of a case.
///
/// The charts are placed under `{output_directory}/{case name}/`.
///
pub fn case_charts(table: &Table, output_directory: &Path) -> Result<Vec<Chart>, Error> {
    let baseline = table.baseline_time()?;
    let speedups = table.speedups(baseline)?;
    let case_directory = output_directory.join(table.name.as_str());

    let mut charts = Vec::with_capacity(table.xstreams().len() * Metric::ALL.len());
    for xstreams in table.xstreams().into_iter() {
        for metric in Metric::ALL.into_iter() {
            let points = table
                .rows
                .iter()
                .zip(speedups.iter())
                .filter(|(row, _)| row.xstreams == xstreams)
                .map(|(row, speedup)| {
                    let value = match metric {
                        Metric::MeanTime => row.time_seconds,
                        Metric::MeanTimeNanos => row.time_nanos_as_seconds(),
                        Metric::Speedup => *speedup,
                    };
                    (f64::from(row.threads), value)
                })
                .collect();
            charts.push(Chart::over_threads(
                case_directory.join(metric.file_name(xstreams)),
                metric.title(xstreams, table.name.as_str()),
                metric.y_label(),
                points,
            ));
        }
    }
    Ok(charts)
}

///
/// Builds the tree versus simple ratio chart of every Xstreams partition of the tree case.
///
/// The charts are placed under `{output_directory}/{comparison directory}/`.
///
pub fn comparison_charts(
    tree: &Table,
    simple: &Table,
    comparison: &Comparison,
    output_directory: &Path,
) -> Result<Vec<Chart>, Error> {
    let comparison_directory = output_directory.join(comparison.directory);

    let mut charts = Vec::new();
    for xstreams in tree.xstreams().into_iter() {
        let points = crate::comparison::cross_ratios(tree, simple, xstreams)?
            .into_iter()
            .map(|(threads, ratio)| (f64::from(threads), ratio))
            .collect();
        charts.push(Chart::over_threads(
            comparison_directory.join(comparison.file_name(xstreams)),
            comparison.title(xstreams),
            Metric::Speedup.y_label(),
            points,
        ));
    }
    Ok(charts)
}

///
/// Renders all charts of a case and returns the written paths.
///
/// Nothing is drawn if any value of the case cannot be computed.
///
pub fn render_case<C>(
    table: &Table,
    output_directory: &Path,
    canvas: &mut C,
) -> Result<Vec<PathBuf>, Error>
where
    C: Canvas,
{
    draw_all(case_charts(table, output_directory)?, canvas)
}

///
/// Renders all charts of a tree versus simple comparison and returns the written paths.
///
/// Nothing is drawn if the tables are misaligned.
///
pub fn render_cross_comparison<C>(
    tree: &Table,
    simple: &Table,
    comparison: &Comparison,
    output_directory: &Path,
    canvas: &mut C,
) -> Result<Vec<PathBuf>, Error>
where
    C: Canvas,
{
    draw_all(
        comparison_charts(tree, simple, comparison, output_directory)?,
        canvas,
    )
}

fn draw_all<C>(charts: Vec<Chart>, canvas: &mut C) -> Result<Vec<PathBuf>, Error>
where
    C: Canvas,
{
    let mut paths = Vec::with_capacity(charts.len());
    for chart in charts.into_iter() {
        canvas.draw(&chart)?;
        paths.push(chart.path);
    }
    Ok(paths)
}
