//! AGS plugin exposing `AppOpenURL` to game scripts.
//!
//! The host loads this library and calls the `AGS_*` entry points below. The
//! editor and engine pointers it passes are wrapped in [`abi`] handles and
//! parked in one session slot each; the C entry points carry no context, so
//! these two slots are the only process-wide state.

#![allow(non_snake_case)]

pub mod abi;
pub mod cstr;

use std::ffi::{c_char, c_int, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard};

use aaou_core::config;
use aaou_core::host::EngineHost;
use aaou_core::launcher::SystemLauncher;
use aaou_core::lifecycle::{EditorSession, EngineSession, StartupError};
use aaou_core::logging;
use aaou_core::protocol::Protocol;
use aaou_core::script_header::PLUGIN_NAME;
use aaou_core::url_request::{UrlOpener, MAX_URL_LEN};

use crate::abi::{EditorHandle, EngineHandle, IAGSEditor, IAGSEngine};

static EDITOR: Mutex<Option<EditorSession<EditorHandle>>> = Mutex::new(None);
static ENGINE: Mutex<Option<EngineSession<EngineHandle>>> = Mutex::new(None);

fn lock<T>(slot: &Mutex<T>) -> MutexGuard<'_, T> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// ***** design time *****

#[no_mangle]
pub extern "C" fn AGS_GetPluginName() -> *const c_char {
    PLUGIN_NAME.as_ptr()
}

/// Returns 0 on success, -1 if the editor is too old or the pointer is null.
///
/// # Safety
///
/// `editor` must be null or a live `IAGSEditor` that stays valid until
/// [`AGS_EditorShutdown`].
#[no_mangle]
pub unsafe extern "C" fn AGS_EditorStartup(editor: *mut IAGSEditor) -> c_int {
    match attach_editor(editor) {
        Ok(()) => 0,
        Err(e) => {
            tracing::warn!("editor startup refused: {e}");
            -1
        }
    }
}

unsafe fn attach_editor(editor: *mut IAGSEditor) -> Result<(), StartupError> {
    let handle = EditorHandle::from_raw(editor).ok_or(StartupError::NullHost("IAGSEditor"))?;
    let session = EditorSession::attach(handle)?;
    *lock(&EDITOR) = Some(session);
    Ok(())
}

#[no_mangle]
pub extern "C" fn AGS_EditorShutdown() {
    if let Some(session) = lock(&EDITOR).take() {
        session.detach();
    }
}

#[no_mangle]
pub extern "C" fn AGS_EditorProperties(_parent: *mut c_void) {}

/// The plugin stores nothing in the game project.
#[no_mangle]
pub extern "C" fn AGS_EditorSaveGame(_buffer: *mut c_char, _bufsize: c_int) -> c_int {
    0
}

#[no_mangle]
pub extern "C" fn AGS_EditorLoadGame(_buffer: *mut c_char, _bufsize: c_int) {}

// ***** run time *****

/// Marks this as a version 2 plugin to the engine's loader.
#[no_mangle]
pub extern "C" fn AGS_PluginV2() -> c_int {
    1
}

/// # Safety
///
/// `engine` must be null or a live `IAGSEngine` that stays valid until
/// [`AGS_EngineShutdown`].
#[no_mangle]
pub unsafe extern "C" fn AGS_EngineStartup(engine: *mut IAGSEngine) {
    let mut cfg = config::load_or_default();
    // Engines without a debug console only get log lines through tracing,
    // so a subscriber is always installed.
    if !cfg.file_log || logging::init_logging().is_err() {
        cfg.file_log = false;
        logging::init_logging_stderr();
    }
    tracing::debug!("plugin config: {:?}", cfg);

    let opener = UrlOpener::new(Arc::new(SystemLauncher)).with_launch(cfg.launch);
    if let Err(e) = attach_engine(engine, opener) {
        tracing::error!("engine startup failed: {e}");
    }
}

/// Attaches `engine` with a given opener and registers [`app_open_url`].
///
/// # Safety
///
/// Same contract as [`AGS_EngineStartup`].
pub unsafe fn attach_engine(engine: *mut IAGSEngine, opener: UrlOpener) -> Result<(), StartupError> {
    let handle = EngineHandle::from_raw(engine).ok_or(StartupError::NullHost("IAGSEngine"))?;
    if let Some(version) = handle.engine_version() {
        tracing::info!(%version, interface = handle.interface_version(), "engine attached");
    }
    let session = EngineSession::attach(handle, app_open_url as *const c_void, opener)?;
    *lock(&ENGINE) = Some(session);
    Ok(())
}

#[no_mangle]
pub extern "C" fn AGS_EngineShutdown() {
    lock(&ENGINE).take();
}

#[no_mangle]
pub extern "C" fn AGS_EngineOnEvent(_event: c_int, _data: c_int) -> c_int {
    0
}

/// Native body of the script function
/// `bool AppOpenURL(AgsUrlProtocol protocol, const string url)`.
///
/// Returns 1 if the browser was asked to open the URL, 0 otherwise.
///
/// # Safety
///
/// `url` must be null or a string readable up to its terminator or
/// [`MAX_URL_LEN`] bytes, whichever comes first.
pub unsafe extern "C" fn app_open_url(protocol: c_int, url: *const c_char) -> c_int {
    let opened = panic::catch_unwind(AssertUnwindSafe(|| {
        let raw = unsafe { cstr::bounded_bytes(url, MAX_URL_LEN) };
        match lock(&ENGINE).as_ref() {
            Some(session) => session.open_url(Protocol::from_raw(protocol), raw),
            None => {
                tracing::warn!("AppOpenURL called before engine startup");
                false
            }
        }
    }))
    .unwrap_or(false);
    c_int::from(opened)
}
