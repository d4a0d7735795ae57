//!
//! Tests for the log aggregator.
//!

#![cfg(test)]

use clap::Parser;

use super::arguments::Arguments;

const VERIFIED_LOG: &str = r#"
 Number of available xstreams:    1
 Number of available threads:    4
 Initialization time =    0.003 seconds
 Class           =                       EP
 Time in seconds =                     TIME
 VERIFICATION SUCCESSFUL
"#;

#[test]
fn aggregate_directory() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    std::fs::write(
        directory.path().join("ep_1.txt"),
        VERIFIED_LOG.replace("TIME", "1.0"),
    )
    .expect("Failed to write");
    std::fs::write(
        directory.path().join("ep_2.txt"),
        VERIFIED_LOG.replace("TIME", "3.0"),
    )
    .expect("Failed to write");
    std::fs::write(
        directory.path().join("ep_3.txt"),
        VERIFIED_LOG
            .replace("TIME", "9.0")
            .replace("VERIFICATION SUCCESSFUL", "VERIFICATION FAILED"),
    )
    .expect("Failed to write");

    let (aggregate, skipped) = log_aggregator::Aggregate::from_directory(directory.path(), "txt")
        .expect("Failed to aggregate");
    let lines: Vec<String> = log_aggregator::Report::new(&aggregate).lines().collect();

    assert_eq!(lines, vec!["('EP', 1, 4): 2.0"]);
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].to_string(), "Verification failed on ep_3.txt");
}

#[test]
fn aggregate_missing_directory() {
    let directory = tempfile::tempdir().expect("Failed to create a temporary directory");
    let missing = directory.path().join("raw_results_argobots");

    let result = log_aggregator::Aggregate::from_directory(missing.as_path(), "txt");

    assert!(matches!(
        result,
        Err(log_aggregator::Error::DirectoryNotFound { .. })
    ));
}

#[test]
fn arguments_defaults() {
    let arguments = Arguments::try_parse_from(["log-aggregator"]).expect("Always valid");

    assert_eq!(
        arguments.input_directory.to_string_lossy(),
        log_aggregator::DEFAULT_INPUT_DIRECTORY
    );
    assert_eq!(arguments.extension, "txt");
    assert_eq!(arguments.output_format, log_aggregator::OutputFormat::Text);
    assert!(arguments.output_path.is_none());
    assert!(arguments.validate().is_ok());
}

#[test]
fn arguments_invalid_extension() {
    let arguments = Arguments::try_parse_from(["log-aggregator", "logs", "--extension", "*"])
        .expect("Always valid");

    assert!(arguments.validate().is_err());
}
