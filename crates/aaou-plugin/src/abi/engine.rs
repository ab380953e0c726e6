use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr::NonNull;

use aaou_core::host::{EngineHost, LogSink};

use crate::cstr::to_c_string;

/// First interface version whose vtable has `PrintDebugConsole`.
pub const ENGINE_CONSOLE_MIN_VERSION: c_int = 10;

/// `tracing` target carrying host log lines on engines without a console.
pub const CONSOLE_FALLBACK_TARGET: &str = "agsappopenurl::console";

/// `IAGSEngine` vtable up to `PrintDebugConsole` (slot 51).
///
/// Slots the plugin never calls are kept as opaque pointers so the offsets
/// of the used ones stay right.
#[repr(C)]
pub struct IAGSEngineVtbl {
    pub abort_game: unsafe extern "system" fn(*mut IAGSEngine, *const c_char),
    pub get_engine_version: unsafe extern "system" fn(*mut IAGSEngine) -> *const c_char,
    pub register_script_function:
        unsafe extern "system" fn(*mut IAGSEngine, *const c_char, *const c_void),
    /// GetWindowHandle through GetTextExtent.
    pub unused_3_50: [*const c_void; 48],
    pub print_debug_console: unsafe extern "system" fn(*mut IAGSEngine, *const c_char),
}

#[repr(C)]
pub struct IAGSEngine {
    pub vtable: *const IAGSEngineVtbl,
    pub version: c_int,
    pub plugin_id: c_int,
}

/// Engine pointer received in `AGS_EngineStartup`, valid until `AGS_EngineShutdown`.
#[derive(Debug)]
pub struct EngineHandle(NonNull<IAGSEngine>);

// Script functions run on the engine's game thread; the handle only moves
// between the startup callback and that thread.
unsafe impl Send for EngineHandle {}

impl EngineHandle {
    /// # Safety
    ///
    /// `ptr` must be null or point to a live `IAGSEngine` that outlives the handle.
    pub unsafe fn from_raw(ptr: *mut IAGSEngine) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    fn vtable(&self) -> &IAGSEngineVtbl {
        unsafe { &*(*self.0.as_ptr()).vtable }
    }

    /// Engine version string, e.g. `"3.6.1.9"`.
    pub fn engine_version(&self) -> Option<String> {
        let ptr = unsafe { (self.vtable().get_engine_version)(self.0.as_ptr()) };
        if ptr.is_null() {
            return None;
        }
        Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
    }
}

impl LogSink for EngineHandle {
    fn log_line(&self, line: &str) {
        if self.interface_version() < ENGINE_CONSOLE_MIN_VERSION {
            tracing::info!(target: CONSOLE_FALLBACK_TARGET, "{line}");
            return;
        }
        let line = to_c_string(line);
        unsafe { (self.vtable().print_debug_console)(self.0.as_ptr(), line.as_ptr()) }
    }
}

impl EngineHost for EngineHandle {
    fn interface_version(&self) -> i32 {
        unsafe { (*self.0.as_ptr()).version }
    }

    fn abort_game(&self, reason: &str) {
        let reason = to_c_string(reason);
        unsafe { (self.vtable().abort_game)(self.0.as_ptr(), reason.as_ptr()) }
    }

    fn register_script_function(&self, name: &'static CStr, address: *const c_void) {
        unsafe { (self.vtable().register_script_function)(self.0.as_ptr(), name.as_ptr(), address) }
    }
}
