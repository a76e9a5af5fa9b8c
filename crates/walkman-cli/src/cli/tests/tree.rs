//! Tests for the tree subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_tree_defaults() {
    match parse(&["walkman", "tree"]) {
        CliCommand::Tree {
            input,
            root,
            hostname,
            from_tree,
            output,
        } => {
            assert!(input.is_none());
            assert!(root.is_none());
            assert!(hostname.is_none());
            assert!(from_tree.is_none());
            assert!(output.is_none());
        }
        _ => panic!("expected Tree"),
    }
}

#[test]
fn cli_parse_tree_short_flags() {
    match parse(&[
        "walkman",
        "tree",
        "page.html",
        "-H",
        "example.com",
        "-I",
        "data/output.txt",
        "-o",
        "data/output.txt",
    ]) {
        CliCommand::Tree {
            input,
            hostname,
            from_tree,
            output,
            ..
        } => {
            assert_eq!(input.as_deref(), Some("page.html"));
            assert_eq!(hostname.as_deref(), Some("example.com"));
            assert_eq!(from_tree.as_deref(), Some(Path::new("data/output.txt")));
            assert_eq!(output.as_deref(), Some(Path::new("data/output.txt")));
        }
        _ => panic!("expected Tree with flags"),
    }
}

#[test]
fn cli_parse_tree_root() {
    match parse(&["walkman", "tree", "--root", "example.com"]) {
        CliCommand::Tree { root, .. } => assert_eq!(root.as_deref(), Some("example.com")),
        _ => panic!("expected Tree with root"),
    }
}

#[test]
fn cli_parse_tree_root_conflicts_with_saved_tree() {
    assert!(Cli::try_parse_from(["walkman", "tree", "-r", "/", "-I", "saved.txt"]).is_err());
}
