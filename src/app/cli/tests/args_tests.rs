//! Tests for argument parsing

use crate::app::cli::args::*;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_lookup_command() {
    let args = Args::try_parse_from(["nutriscan", "lookup", "1234567890123"]).unwrap();
    assert_eq!(
        args.command,
        Command::Lookup {
            code: "1234567890123".to_string()
        }
    );
    assert_eq!(args.backend, None);
    assert_eq!(args.color_override(), None);
}

#[test]
fn test_global_flags_before_command() {
    let args = Args::try_parse_from([
        "nutriscan",
        "--backend",
        "off",
        "--output",
        "json",
        "--no-color",
        "--log-level",
        "debug",
        "scan",
        "--device",
        "/dev/ttyACM0",
    ])
    .unwrap();

    assert_eq!(args.backend, Some(Backend::OpenFoodFacts));
    assert_eq!(args.output, Some(OutputFormat::Json));
    assert_eq!(args.color_override(), Some(false));
    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(
        args.command,
        Command::Scan {
            device: Some(PathBuf::from("/dev/ttyACM0"))
        }
    );
}

#[test]
fn test_last_colour_flag_wins() {
    let args = Args::try_parse_from(["nutriscan", "--no-color", "--color", "devices"]).unwrap();
    assert_eq!(args.color_override(), Some(true));
}

#[test]
fn test_rejects_unknown_log_format() {
    assert!(Args::try_parse_from(["nutriscan", "--log-format", "xml", "devices"]).is_err());
}

#[test]
fn test_command_is_required() {
    assert!(Args::try_parse_from(["nutriscan"]).is_err());
}
