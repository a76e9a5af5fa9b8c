//! Tests for the extract subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_extract_defaults_to_stdin() {
    match parse(&["walkman", "extract"]) {
        CliCommand::Extract {
            input,
            base,
            format,
            output,
        } => {
            assert!(input.is_none());
            assert!(base.is_none());
            assert!(format.is_none());
            assert!(output.is_none());
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_all_flags() {
    match parse(&[
        "walkman",
        "extract",
        "page.html",
        "--base",
        "https://example.com/",
        "--format",
        "json",
        "-o",
        "data/input.txt",
    ]) {
        CliCommand::Extract {
            input,
            base,
            format,
            output,
        } => {
            assert_eq!(input.as_deref(), Some("page.html"));
            assert_eq!(base.as_deref(), Some("https://example.com/"));
            assert_eq!(format, Some(FormatArg::Json));
            assert_eq!(output.as_deref(), Some(Path::new("data/input.txt")));
        }
        _ => panic!("expected Extract with flags"),
    }
}

#[test]
fn cli_parse_extract_dash_is_kept() {
    match parse(&["walkman", "extract", "-", "--format", "lines"]) {
        CliCommand::Extract { input, format, .. } => {
            assert_eq!(input.as_deref(), Some("-"));
            assert_eq!(format, Some(FormatArg::Lines));
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["walkman", "extract", "--format", "xml"]).is_err());
}
