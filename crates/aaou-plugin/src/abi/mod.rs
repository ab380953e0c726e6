//! `#[repr(C)]` views of the interfaces AGS hands to plugins.
//!
//! Both are C++ objects: a vtable pointer followed by `version` and
//! `pluginId`. Methods are `__stdcall` on 32-bit Windows, which
//! `extern "system"` matches; elsewhere it is the C ABI with `this` first.

mod editor;
mod engine;

pub use editor::{EditorHandle, IAGSEditor, IAGSEditorVtbl};
pub use engine::{
    EngineHandle, IAGSEngine, IAGSEngineVtbl, CONSOLE_FALLBACK_TARGET, ENGINE_CONSOLE_MIN_VERSION,
};
