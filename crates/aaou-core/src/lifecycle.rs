//! Editor and engine sessions: what the plugin holds between the host's
//! startup and shutdown callbacks.

use std::ffi::c_void;

use crate::host::{EditorHost, EngineHost};
use crate::protocol::Protocol;
use crate::script_header::{
    ENGINE_TOO_OLD, MIN_EDITOR_VERSION, MIN_ENGINE_VERSION, SCRIPT_FUNCTION_NAME, SCRIPT_HEADER,
};
use crate::url_request::UrlOpener;

/// Why a host attach was refused.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("editor interface version {found} is older than required {}", MIN_EDITOR_VERSION)]
    EditorTooOld { found: i32 },
    /// Fatal: the engine has already been told to abort.
    #[error("{} (interface version {found}, need {})", ENGINE_TOO_OLD, MIN_ENGINE_VERSION)]
    EngineTooOld { found: i32 },
    #[error("host passed a null {0} interface")]
    NullHost(&'static str),
}

/// Editor attached at design time; the script header stays registered while it lives.
#[derive(Debug)]
pub struct EditorSession<E: EditorHost> {
    editor: E,
}

impl<E: EditorHost> EditorSession<E> {
    /// Checks the editor version and registers [`SCRIPT_HEADER`].
    pub fn attach(editor: E) -> Result<Self, StartupError> {
        let found = editor.interface_version();
        if found < MIN_EDITOR_VERSION {
            tracing::warn!(found, "editor interface too old");
            return Err(StartupError::EditorTooOld { found });
        }
        editor.register_script_header(SCRIPT_HEADER);
        tracing::debug!(found, "script header registered");
        Ok(Self { editor })
    }

    /// Unregisters the header and hands the editor back.
    pub fn detach(self) -> E {
        self.editor.unregister_script_header(SCRIPT_HEADER);
        tracing::debug!("script header unregistered");
        self.editor
    }
}

/// Engine attached at run time, with the opener that serves `AppOpenURL`.
pub struct EngineSession<E: EngineHost> {
    engine: E,
    opener: UrlOpener,
}

impl<E: EngineHost> EngineSession<E> {
    /// Checks the engine version and registers `script_fn` as `AppOpenURL`.
    ///
    /// An engine older than [`MIN_ENGINE_VERSION`] is told to abort the game
    /// and nothing is registered.
    pub fn attach(
        engine: E,
        script_fn: *const c_void,
        opener: UrlOpener,
    ) -> Result<Self, StartupError> {
        let found = engine.interface_version();
        if found < MIN_ENGINE_VERSION {
            tracing::error!(found, "engine interface too old, aborting game");
            engine.abort_game(ENGINE_TOO_OLD);
            return Err(StartupError::EngineTooOld { found });
        }

        engine.register_script_function(SCRIPT_FUNCTION_NAME, script_fn);
        tracing::debug!(found, launch = opener.launches(), "registered {:?}", SCRIPT_FUNCTION_NAME);
        Ok(Self { engine, opener })
    }

    /// One `AppOpenURL` call from a script, logged to the engine console.
    pub fn open_url(&self, protocol: Protocol, raw: Option<&[u8]>) -> bool {
        self.opener.try_open(&self.engine, protocol, raw)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
