// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Native library loading.
//!
//! The library is opened once, at binding initialization. Exports are resolved
//! immediately into plain function pointers held in the binding's export table,
//! so a missing export is a load-time failure rather than a first-call surprise.

use std::path::{Path, PathBuf};

use crate::errors::{BridgeError, BridgeResult};
use crate::observability::messages::runtime::{ExportResolveFailed, LibraryLoadFailed, LibraryLoaded};
use crate::observability::messages::StructuredLog;
use crate::runtime::platform::{current_os, library_filename};

/// A loaded bridge library.
///
/// Function pointers obtained through [`NativeLibrary::export`] are only valid
/// while this value is alive; generated bindings store both side by side.
#[derive(Debug)]
pub struct NativeLibrary {
    library: libloading::Library,
    path: PathBuf,
}

impl NativeLibrary {
    /// Resolve the platform filename for `stem` and load it from `dir`.
    pub fn load<P: AsRef<Path>>(dir: P, stem: &str) -> BridgeResult<Self> {
        let resolved = library_filename(stem, current_os());
        Self::open(dir.as_ref().join(resolved.filename))
    }

    /// Load the library at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> BridgeResult<Self> {
        let path = path.as_ref().to_path_buf();
        let library_path = path.display().to_string();

        // SAFETY: loading runs the library's initializers; the bridge library is trusted.
        let library = unsafe { libloading::Library::new(&path) }.map_err(|e| {
            let error = BridgeError::Load {
                library: library_path.clone(),
                reason: e.to_string(),
            };
            LibraryLoadFailed {
                library_path: &library_path,
                error: &error,
            }
            .log();
            error
        })?;

        LibraryLoaded {
            library_path: &library_path,
        }
        .log();

        Ok(Self { library, path })
    }

    /// Handle to the running process, for bridges linked into the executable.
    pub fn this() -> BridgeResult<Self> {
        let path = std::env::current_exe().unwrap_or_default();
        let library_path = path.display().to_string();

        #[cfg(unix)]
        let library: libloading::Library = libloading::os::unix::Library::this().into();
        #[cfg(windows)]
        let library: libloading::Library = libloading::os::windows::Library::this()
            .map_err(|e| BridgeError::Load {
                library: library_path.clone(),
                reason: e.to_string(),
            })?
            .into();

        LibraryLoaded {
            library_path: &library_path,
        }
        .log();

        Ok(Self { library, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve the export `name` into a function pointer of type `F`.
    ///
    /// # Safety
    /// `F` must be a function pointer type matching the export's actual
    /// prototype, and the returned pointer must not outlive `self`.
    pub unsafe fn export<F: Copy>(&self, name: &str) -> BridgeResult<F> {
        let symbol: libloading::Symbol<F> = self.library.get(name.as_bytes()).map_err(|e| {
            let error = BridgeError::Load {
                library: self.path.display().to_string(),
                reason: format!("missing export '{}': {}", name, e),
            };
            ExportResolveFailed {
                export: name,
                error: &error,
            }
            .log();
            error
        })?;
        Ok(*symbol)
    }
}
