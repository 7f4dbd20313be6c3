// Code generated by bridgegen for flywheelBridge 0.2.0. DO NOT EDIT.

use std::fmt::Display;
use std::os::raw::{c_char, c_int};
use std::path::Path;

use bridgegen::runtime::{self, ApiKey, BridgeError, NativeLibrary};
use serde::Serialize;
use serde_json::Value;

/// Release version this binding was generated for.
pub const SDK_VERSION: &str = "0.2.0";

/// File stem of the compiled bridge library.
pub const LIBRARY_STEM: &str = "flywheelBridge";

// Every bridge export returns a pointer to a NUL-terminated buffer.
type TestBridgeFn = unsafe extern "C" fn(*const c_char) -> *mut c_char;
type GetConfigFn = unsafe extern "C" fn(*const c_char, *mut c_int) -> *mut c_char;
type DeleteUserFn = unsafe extern "C" fn(*const c_char, *const c_char, *mut c_int) -> *mut c_char;
type ModifyProjectFn = unsafe extern "C" fn(*const c_char, *const c_char, *const c_char, *mut c_int) -> *mut c_char;

struct Exports {
    test_bridge: TestBridgeFn,
    get_config: GetConfigFn,
    delete_user: DeleteUserFn,
    modify_project: ModifyProjectFn,
}

impl Exports {
    fn resolve(library: &NativeLibrary) -> Result<Self, BridgeError> {
        // SAFETY: each alias above matches the C prototype of its export.
        unsafe {
            Ok(Self {
                test_bridge: library.export::<TestBridgeFn>("TestBridge")?,
                get_config: library.export::<GetConfigFn>("GetConfig")?,
                delete_user: library.export::<DeleteUserFn>("DeleteUser")?,
                modify_project: library.export::<ModifyProjectFn>("ModifyProject")?,
            })
        }
    }
}

/// Returns the release version of the SDK.
pub fn sdk_version() -> &'static str {
    SDK_VERSION
}

/// The loaded bridge library with every export resolved.
pub struct Bridge {
    exports: Exports,
    _library: NativeLibrary,
}

impl Bridge {
    /// Load the platform's bridge library from `dir` and resolve every export.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, BridgeError> {
        let library = NativeLibrary::load(dir, LIBRARY_STEM)?;
        let exports = Exports::resolve(&library)?;
        Ok(Self {
            exports,
            _library: library,
        })
    }

    /// Check that data flows across the bridge. Should return "Hello <s>".
    pub fn test_bridge(&self, s: &str) -> Result<String, BridgeError> {
        let s_buf = runtime::encode_plain(s)?;
        // SAFETY: the export returns a NUL-terminated buffer and `s_buf` outlives the call.
        unsafe { runtime::decode_text((self.exports.test_bridge)(s_buf.as_ptr())) }
    }

    /// Create a client authenticated with `key`.
    pub fn client(&self, key: &str) -> Result<Client<'_>, BridgeError> {
        Client::new(self, key)
    }
}

/// API client bound to a loaded bridge.
pub struct Client<'a> {
    bridge: &'a Bridge,
    key: ApiKey,
}

impl<'a> Client<'a> {
    /// Fails if `key` is not of the form `<identifier>:<secret>`.
    pub fn new(bridge: &'a Bridge, key: &str) -> Result<Self, BridgeError> {
        Ok(Self {
            bridge,
            key: ApiKey::new(key)?,
        })
    }

    /// Calls the `GetConfig` export.
    pub fn get_config(&self) -> Result<Option<Value>, BridgeError> {
        // SAFETY: the export matches its alias and every buffer outlives the call.
        unsafe {
            runtime::invoke(|status| {
                (self.bridge.exports.get_config)(self.key.as_ptr(), status)
            })
        }
    }

    /// Calls the `DeleteUser` export.
    pub fn delete_user(&self, id: impl Display) -> Result<Option<Value>, BridgeError> {
        let id_buf = runtime::encode_plain(&id)?;
        // SAFETY: the export matches its alias and every buffer outlives the call.
        unsafe {
            runtime::invoke(|status| {
                (self.bridge.exports.delete_user)(self.key.as_ptr(), id_buf.as_ptr(), status)
            })
        }
    }

    /// Calls the `ModifyProject` export.
    pub fn modify_project(&self, id: impl Display, project: &(impl Serialize + ?Sized)) -> Result<Option<Value>, BridgeError> {
        let project_json = runtime::serialize_payload(project)?;
        let id_buf = runtime::encode_plain(&id)?;
        let project_buf = runtime::encode_plain(&project_json)?;
        // SAFETY: the export matches its alias and every buffer outlives the call.
        unsafe {
            runtime::invoke(|status| {
                (self.bridge.exports.modify_project)(self.key.as_ptr(), id_buf.as_ptr(), project_buf.as_ptr(), status)
            })
        }
    }
}
