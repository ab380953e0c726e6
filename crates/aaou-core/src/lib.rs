//! Core of the AGS AppOpenURL plugin.
//!
//! Everything here is host-agnostic: the plugin crate adapts the AGS C ABI to
//! the traits in [`host`] and [`launcher`], and the CLI drives the same code
//! from a terminal.

pub mod config;
pub mod host;
pub mod launcher;
pub mod lifecycle;
pub mod logging;
pub mod protocol;
pub mod script_header;
pub mod url_request;
