//! Fixed strings shared with the AGS editor and engine.
//!
//! Strings handed to the host are NUL-terminated statics: the editor keeps the
//! header pointer until it is unregistered.

use std::ffi::CStr;

/// Name reported to the host by `AGS_GetPluginName`.
pub static PLUGIN_NAME: &CStr = c"AGS AppOpenURL Plugin";

/// Name the native function is registered under; must match the `import` line below.
pub static SCRIPT_FUNCTION_NAME: &CStr = c"AppOpenURL";

/// Script header injected into every game project that enables the plugin.
///
/// AGS script headers use CRLF line endings.
pub static SCRIPT_HEADER: &CStr = c"#define AGS_APPOPENURL_VERSION 1\r\n\
enum AgsUrlProtocol {\r\n \
eAUrlProto_https = 0,\r\n \
eAUrlProto_http\r\n\
};\r\n\
import bool AppOpenURL(AgsUrlProtocol protocol, const string url);\r\n";

/// Lowest `IAGSEditor::version` that supports header registration.
pub const MIN_EDITOR_VERSION: i32 = 1;

/// Lowest `IAGSEngine::version` the plugin runs against.
pub const MIN_ENGINE_VERSION: i32 = 3;

/// Message passed to the engine's abort primitive when the interface is too old.
pub const ENGINE_TOO_OLD: &str = "Engine interface is too old, need newer version of AGS.";
