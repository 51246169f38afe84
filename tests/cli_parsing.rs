use std::path::PathBuf;

use clap::Parser;
use regroup::cli::{Cli, OutputFormat};

#[test]
fn test_parse_search_mode() {
    let cli = Cli::try_parse_from(["regroup", "--students", "12", "--rounds", "3"]).unwrap();
    assert_eq!(cli.students, Some(12));
    assert_eq!(cli.rounds, Some(3));
    assert!(cli.names.is_none());
    assert!(cli.input.is_none());
    assert!(cli.seed.is_none());
}

#[test]
fn test_parse_short_flags() {
    let cli = Cli::try_parse_from([
        "regroup", "-s", "20", "-r", "5", "-o", "plan.txt", "-f", "grouped",
    ])
    .unwrap();
    assert_eq!(cli.students, Some(20));
    assert_eq!(cli.rounds, Some(5));
    assert_eq!(cli.output, Some(PathBuf::from("plan.txt")));
    assert_eq!(cli.format, Some(OutputFormat::Grouped));
}

#[test]
fn test_parse_names_file() {
    let cli = Cli::try_parse_from(["regroup", "--names", "class.txt", "--rounds", "4"]).unwrap();
    assert_eq!(cli.names, Some(PathBuf::from("class.txt")));
    assert!(cli.students.is_none());
}

#[test]
fn test_parse_reformat_mode() {
    let cli = Cli::try_parse_from(["regroup", "--input", "session.json", "-f", "list"]).unwrap();
    assert_eq!(cli.input, Some(PathBuf::from("session.json")));
    assert_eq!(cli.effective_format(), OutputFormat::List);
}

#[test]
fn test_parse_seed() {
    let cli = Cli::try_parse_from(["regroup", "-s", "8", "-r", "2", "--seed", "42"]).unwrap();
    assert_eq!(cli.seed, Some(42));
}

#[test]
fn test_format_inferred_from_json_extension() {
    let cli = Cli::try_parse_from(["regroup", "-s", "8", "-r", "2", "-o", "plan.json"]).unwrap();
    assert_eq!(cli.effective_format(), OutputFormat::Json);

    let cli = Cli::try_parse_from(["regroup", "-s", "8", "-r", "2", "-o", "plan.txt"]).unwrap();
    assert_eq!(cli.effective_format(), OutputFormat::List);
}

#[test]
fn test_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["regroup", "-s", "8", "-r", "2", "-f", "xml"]).is_err());
}
