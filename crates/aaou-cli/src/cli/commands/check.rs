//! `aaou check` – dry run of the validator.

use aaou_core::protocol::Protocol;
use aaou_core::url_request::build_url;
use anyhow::Result;

/// Print the URL AppOpenURL would open, or fail with its rejection reason.
pub fn run_check(protocol: Protocol, url: &str) -> Result<()> {
    let assembled = build_url(protocol, Some(url.as_bytes()))?;
    println!("{assembled}");
    Ok(())
}
