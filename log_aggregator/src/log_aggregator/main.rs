//!
//! The log aggregator binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::try_parse()?;
    arguments.validate()?;

    let (aggregate, skipped) = log_aggregator::Aggregate::from_directory(
        arguments.input_directory.as_path(),
        arguments.extension.as_str(),
    )?;
    if !arguments.quiet {
        for skipped in skipped.iter() {
            eprintln!("{} {skipped}", "Warning:".bright_yellow().bold());
        }
        if aggregate.is_empty() {
            eprintln!(
                "{} No verified logs found in {:?}",
                "Warning:".bright_yellow().bold(),
                arguments.input_directory
            );
        }
    }

    log_aggregator::Report::new(&aggregate)
        .write_to(arguments.output_path, &arguments.output_format)?;

    Ok(())
}
