//! Protocol selector passed in from game scripts as `AgsUrlProtocol`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL scheme a script asks for. Mirrors the script enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Https,
    Http,
}

impl Protocol {
    /// Maps the raw enum value received from the script VM.
    ///
    /// Out-of-range values fall back to [`Protocol::Https`] instead of failing.
    pub fn from_raw(value: i32) -> Self {
        match value {
            1 => Protocol::Http,
            _ => Protocol::Https,
        }
    }

    /// Lowercase scheme name, without `://`.
    pub fn scheme(self) -> &'static str {
        match self {
            Protocol::Https => "https",
            Protocol::Http => "http",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Error for an unrecognized protocol name (CLI and config input only).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown protocol {0:?} (expected \"https\" or \"http\")")]
pub struct UnknownProtocol(pub String);

impl FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("https") {
            Ok(Protocol::Https)
        } else if s.eq_ignore_ascii_case("http") {
            Ok(Protocol::Http)
        } else {
            Err(UnknownProtocol(s.to_string()))
        }
    }
}
