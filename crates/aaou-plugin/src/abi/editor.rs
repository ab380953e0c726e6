use std::ffi::{c_char, c_int, c_void, CStr};
use std::ptr::NonNull;

use aaou_core::host::EditorHost;

/// `IAGSEditor` vtable, in declaration order.
#[repr(C)]
pub struct IAGSEditorVtbl {
    pub get_editor_handle: unsafe extern "system" fn(*mut IAGSEditor) -> *mut c_void,
    pub get_window_handle: unsafe extern "system" fn(*mut IAGSEditor) -> *mut c_void,
    pub register_script_header: unsafe extern "system" fn(*mut IAGSEditor, *const c_char),
    pub unregister_script_header: unsafe extern "system" fn(*mut IAGSEditor, *const c_char),
}

#[repr(C)]
pub struct IAGSEditor {
    pub vtable: *const IAGSEditorVtbl,
    pub version: c_int,
    pub plugin_id: c_int,
}

/// Editor pointer received in `AGS_EditorStartup`, valid until `AGS_EditorShutdown`.
#[derive(Debug)]
pub struct EditorHandle(NonNull<IAGSEditor>);

// The editor calls the plugin from its UI thread only; the handle is parked in
// a static between callbacks.
unsafe impl Send for EditorHandle {}

impl EditorHandle {
    /// # Safety
    ///
    /// `ptr` must be null or point to a live `IAGSEditor` that outlives the handle.
    pub unsafe fn from_raw(ptr: *mut IAGSEditor) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    fn vtable(&self) -> &IAGSEditorVtbl {
        unsafe { &*(*self.0.as_ptr()).vtable }
    }
}

impl EditorHost for EditorHandle {
    fn interface_version(&self) -> i32 {
        unsafe { (*self.0.as_ptr()).version }
    }

    fn register_script_header(&self, header: &'static CStr) {
        unsafe { (self.vtable().register_script_header)(self.0.as_ptr(), header.as_ptr()) }
    }

    fn unregister_script_header(&self, header: &'static CStr) {
        unsafe { (self.vtable().unregister_script_header)(self.0.as_ptr(), header.as_ptr()) }
    }
}
