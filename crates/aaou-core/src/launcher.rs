//! The "open default browser at URL" primitive.

use std::io;
use std::sync::Mutex;

/// Failure reported by a [`UrlLauncher`].
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The OS browser launch failed.
    #[error("browser launch failed: {0}")]
    Io(#[from] io::Error),
    /// A launcher that was configured to fail.
    #[error("launch rejected: {0}")]
    Rejected(String),
}

/// Opens a fully-formed URL in the user's default browser.
///
/// Implementations return as soon as the OS accepted the request; they do not
/// wait for the browser.
pub trait UrlLauncher: Send + Sync {
    fn launch(&self, url: &str) -> Result<(), LaunchError>;
}

/// Launcher backed by the platform browser mechanism chosen at build time
/// (`ShellExecute` on Windows, `open` on macOS, `xdg-open` and friends elsewhere).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl UrlLauncher for SystemLauncher {
    fn launch(&self, url: &str) -> Result<(), LaunchError> {
        webbrowser::open(url)?;
        Ok(())
    }
}

/// Launcher that records URLs instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
    fail_with: Option<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose every launch fails with `reason`. Failed URLs are still recorded.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    /// URLs passed to [`UrlLauncher::launch`], in call order.
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

impl UrlLauncher for RecordingLauncher {
    fn launch(&self, url: &str) -> Result<(), LaunchError> {
        if let Ok(mut urls) = self.opened.lock() {
            urls.push(url.to_string());
        }
        match &self.fail_with {
            Some(reason) => Err(LaunchError::Rejected(reason.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_launcher_records_in_order() {
        let launcher = RecordingLauncher::new();
        launcher.launch("https://a").unwrap();
        launcher.launch("http://b").unwrap();
        assert_eq!(launcher.opened(), vec!["https://a", "http://b"]);
    }

    #[test]
    fn failing_launcher_reports_reason() {
        let launcher = RecordingLauncher::failing("no browser");
        let err = launcher.launch("https://a").unwrap_err();
        assert!(matches!(err, LaunchError::Rejected(ref r) if r == "no browser"));
        assert_eq!(launcher.opened(), vec!["https://a"]);
    }
}
