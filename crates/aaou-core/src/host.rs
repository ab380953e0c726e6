//! Capabilities the AGS editor and engine provide to the plugin.
//!
//! The plugin crate implements these over the raw `IAGSEditor` / `IAGSEngine`
//! objects; tests implement them in memory.

use std::ffi::{c_void, CStr};
use std::sync::Mutex;

/// Consumer of single-line diagnostic messages (the engine's debug console).
pub trait LogSink {
    fn log_line(&self, line: &str);
}

/// Editor-side registration of script header text.
pub trait EditorHost {
    /// `IAGSEditor::version` of the running editor.
    fn interface_version(&self) -> i32;

    fn register_script_header(&self, header: &'static CStr);
    fn unregister_script_header(&self, header: &'static CStr);
}

/// Engine-side services used at startup and while the game runs.
pub trait EngineHost: LogSink {
    /// `IAGSEngine::version` of the running engine.
    fn interface_version(&self) -> i32;

    /// Stops the game with a message. The engine does not return control to the game.
    fn abort_game(&self, reason: &str);

    /// Exposes a native function to game scripts under `name`.
    fn register_script_function(&self, name: &'static CStr, address: *const c_void);
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines logged so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl LogSink for MemorySink {
    fn log_line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_string());
        }
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn log_line(&self, line: &str) {
        (**self).log_line(line)
    }
}

impl<T: EditorHost + ?Sized> EditorHost for &T {
    fn interface_version(&self) -> i32 {
        (**self).interface_version()
    }

    fn register_script_header(&self, header: &'static CStr) {
        (**self).register_script_header(header)
    }

    fn unregister_script_header(&self, header: &'static CStr) {
        (**self).unregister_script_header(header)
    }
}

impl<T: EngineHost + ?Sized> EngineHost for &T {
    fn interface_version(&self) -> i32 {
        (**self).interface_version()
    }

    fn abort_game(&self, reason: &str) {
        (**self).abort_game(reason)
    }

    fn register_script_function(&self, name: &'static CStr, address: *const c_void) {
        (**self).register_script_function(name, address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.log_line("one");
        sink.log_line("two");
        assert_eq!(sink.lines(), vec!["one", "two"]);
    }
}
