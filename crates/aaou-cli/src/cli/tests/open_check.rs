//! Tests for open and check.

use super::parse;
use crate::cli::{Cli, CliCommand};
use aaou_core::protocol::Protocol;
use clap::Parser;

#[test]
fn cli_parse_open_default_protocol() {
    match parse(&["aaou", "open", "example.com/page"]) {
        CliCommand::Open { protocol, url } => {
            assert!(protocol.is_none());
            assert_eq!(url, "example.com/page");
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_open_http() {
    match parse(&["aaou", "open", "--protocol", "http", "example.com"]) {
        CliCommand::Open { protocol, url } => {
            assert_eq!(protocol, Some(Protocol::Http));
            assert_eq!(url, "example.com");
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_check_short_flag() {
    match parse(&["aaou", "check", "-p", "HTTPS", " spaced.example "]) {
        CliCommand::Check { protocol, url } => {
            assert_eq!(protocol, Some(Protocol::Https));
            assert_eq!(url, " spaced.example ");
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_rejects_unknown_protocol() {
    assert!(Cli::try_parse_from(["aaou", "open", "--protocol", "ftp", "x"]).is_err());
}

#[test]
fn cli_parse_open_requires_url() {
    assert!(Cli::try_parse_from(["aaou", "open"]).is_err());
}
