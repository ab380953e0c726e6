//! Validation and assembly of the URL a game script asks to open.
//!
//! Scripts pass a protocol selector and the host/path portion of a URL. The
//! fragment is cleaned of whitespace, checked for an embedded scheme, prefixed
//! with the selected scheme and handed to a [`UrlLauncher`].

mod error;
mod sanitize;

use std::sync::Arc;

use crate::host::LogSink;
use crate::launcher::UrlLauncher;
use crate::protocol::Protocol;

pub use error::OpenUrlError;
pub use sanitize::{has_protocol_specifier, strip_url_whitespace};

/// Length bound for script input, terminator included. Input of this length
/// or more is rejected; 2047 bytes is the longest accepted.
pub const MAX_URL_LEN: usize = 2048;

/// Prefix of every line written to the host console.
const LOG_PREFIX: &str = "AppOpenURL";

/// Builds `scheme://fragment` from raw script input.
///
/// Rules apply in order: absent or empty input, length bound, whitespace
/// stripping, empty after stripping, embedded scheme. The protocol never
/// causes a rejection.
///
/// # Examples
///
/// - `build_url(Protocol::Https, Some(b" example.com/page "))` → `"https://example.com/page"`
/// - `build_url(Protocol::Http, Some(b"a\tb\nc"))` → `"http://abc"`
pub fn build_url(protocol: Protocol, raw: Option<&[u8]>) -> Result<String, OpenUrlError> {
    let raw = match raw {
        Some(r) if !r.is_empty() => r,
        _ => return Err(OpenUrlError::Empty),
    };
    if raw.len() >= MAX_URL_LEN {
        return Err(OpenUrlError::TooBig { len: raw.len() });
    }

    let fragment = strip_url_whitespace(raw);
    if fragment.is_empty() {
        return Err(OpenUrlError::EmptyAfterCleanup);
    }
    if has_protocol_specifier(&fragment) {
        return Err(OpenUrlError::ProtocolSpecifiers);
    }

    let fragment = String::from_utf8(fragment).map_err(|_| OpenUrlError::NotUtf8)?;
    Ok(format!("{}://{}", protocol.scheme(), fragment))
}

/// Runs `AppOpenURL` calls against a launcher.
pub struct UrlOpener {
    launcher: Arc<dyn UrlLauncher>,
    launch: bool,
}

impl UrlOpener {
    pub fn new(launcher: Arc<dyn UrlLauncher>) -> Self {
        Self {
            launcher,
            launch: true,
        }
    }

    /// When `false`, validated URLs are reported but never passed to the launcher.
    pub fn with_launch(mut self, launch: bool) -> Self {
        self.launch = launch;
        self
    }

    pub fn launches(&self) -> bool {
        self.launch
    }

    /// Validates, assembles and launches. Returns the URL that was opened.
    pub fn open(&self, protocol: Protocol, raw: Option<&[u8]>) -> Result<String, OpenUrlError> {
        let url = build_url(protocol, raw)?;
        tracing::debug!(%url, "assembled url");
        if self.launch {
            self.launcher
                .launch(&url)
                .map_err(OpenUrlError::LaunchFailed)?;
        }
        Ok(url)
    }

    /// Script-facing entry: `true` when the browser was asked to open the URL.
    ///
    /// Writes exactly one line to `sink` whatever the outcome.
    pub fn try_open(&self, sink: &dyn LogSink, protocol: Protocol, raw: Option<&[u8]>) -> bool {
        match self.open(protocol, raw) {
            Ok(url) if self.launch => {
                tracing::info!(%url, "opened url");
                sink.log_line(&format!("{LOG_PREFIX}: success launching url"));
                true
            }
            Ok(url) => {
                tracing::info!(%url, "launch disabled, url not opened");
                sink.log_line(&format!("{LOG_PREFIX}: launch disabled, would open {url}"));
                true
            }
            Err(err) => {
                match &err {
                    OpenUrlError::LaunchFailed(source) => {
                        tracing::warn!(error = %source, "{err}")
                    }
                    _ => tracing::warn!(%protocol, "{err}"),
                }
                sink.log_line(&format!("{LOG_PREFIX}: {err}"));
                false
            }
        }
    }
}
