//! Rejection reasons for a single `AppOpenURL` call.

use crate::launcher::LaunchError;

/// Why a call did not open the browser.
///
/// The `Display` text is the reason shown on the engine console.
#[derive(Debug, thiserror::Error)]
pub enum OpenUrlError {
    /// Null or zero-length input.
    #[error("empty URL received")]
    Empty,
    /// Input reached the length bound without ending.
    #[error("URL is too big")]
    TooBig { len: usize },
    /// Input held nothing but whitespace.
    #[error("URL was empty after clean up")]
    EmptyAfterCleanup,
    /// Input carried its own scheme (leading `:` or `://`).
    #[error("URL included protocol specifiers")]
    ProtocolSpecifiers,
    /// Input bytes do not form a UTF-8 string.
    #[error("URL is not valid UTF-8")]
    NotUtf8,
    /// The browser primitive reported failure.
    #[error("failed to launch url")]
    LaunchFailed(#[source] LaunchError),
}
