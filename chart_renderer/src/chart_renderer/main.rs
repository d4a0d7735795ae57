//!
//! The chart renderer binary.
//!

pub(crate) mod arguments;

use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;

    let mut canvas = chart_renderer::PngCanvas::default();
    let failures = run(&arguments, &mut canvas);
    if failures > 0 {
        anyhow::bail!("{failures} chart set(s) failed to render");
    }

    Ok(())
}

///
/// Renders every case and comparison, returning the number of failed chart sets.
///
/// A failing case or comparison does not stop the others.
///
pub(crate) fn run<C>(arguments: &Arguments, canvas: &mut C) -> usize
where
    C: chart_renderer::Canvas,
{
    let mut failures = 0;
    let mut tables = HashMap::with_capacity(chart_renderer::CASES.len());

    for case_name in chart_renderer::CASES.into_iter() {
        let result = chart_renderer::Table::load(arguments.input_directory.as_path(), case_name)
            .and_then(|table| {
                let paths = chart_renderer::render_case(
                    &table,
                    arguments.output_directory.as_path(),
                    canvas,
                )?;
                tables.insert(case_name, table);
                Ok(paths)
            });
        failures += report(arguments, case_name, result);
    }

    for comparison in chart_renderer::COMPARISONS.iter() {
        let result = load_cached(&tables, arguments, comparison.tree).and_then(|tree| {
            let simple = load_cached(&tables, arguments, comparison.simple)?;
            chart_renderer::render_cross_comparison(
                &tree,
                &simple,
                comparison,
                arguments.output_directory.as_path(),
                canvas,
            )
        });
        failures += report(arguments, comparison.to_string().as_str(), result);
    }

    failures
}

///
/// Returns a table loaded for its case, or loads it again if that case failed.
///
fn load_cached(
    tables: &HashMap<&'static str, chart_renderer::Table>,
    arguments: &Arguments,
    case_name: &str,
) -> Result<chart_renderer::Table, chart_renderer::Error> {
    match tables.get(case_name) {
        Some(table) => Ok(table.to_owned()),
        None => chart_renderer::Table::load(arguments.input_directory.as_path(), case_name),
    }
}

///
/// Prints the outcome of a chart set, returning `1` if it failed.
///
fn report(
    arguments: &Arguments,
    name: &str,
    result: Result<Vec<PathBuf>, chart_renderer::Error>,
) -> usize {
    match result {
        Ok(paths) => {
            if !arguments.quiet {
                println!(
                    "    {} {} chart(s) for {name}",
                    "Rendered".bright_green().bold(),
                    paths.len()
                );
            }
            0
        }
        Err(error) => {
            eprintln!("{} {name}: {error}", "Error:".bright_red().bold());
            1
        }
    }
}
