// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for events inside generated bindings:
//! * platform resolution
//! * native library loading and export resolution
//!
//! Domain errors returned by native calls are deliberately absent; they go to
//! the caller, not the log.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The operating system was not recognized and the library filename is a guess.
///
/// # Log Level
/// `warn!` - Degraded but continuing
///
/// # Example
/// ```
/// use bridgegen::observability::messages::runtime::PlatformFallback;
///
/// let msg = PlatformFallback {
///     os: "plan9",
///     filename: "flywheelBridge.so",
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct PlatformFallback<'a> {
    pub os: &'a str,
    pub filename: &'a str,
}

impl Display for PlatformFallback<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Unrecognized platform '{}'; guessing library filename '{}'",
            self.os, self.filename
        )
    }
}

impl StructuredLog for PlatformFallback<'_> {
    fn log(&self) {
        tracing::warn!(os = self.os, filename = self.filename, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "platform_fallback",
            name = name,
            os = self.os,
            filename = self.filename,
        )
    }
}

/// Native library loaded.
///
/// # Log Level
/// `info!` - Important operational event
pub struct LibraryLoaded<'a> {
    pub library_path: &'a str,
}

impl Display for LibraryLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Loaded native bridge library: {}", self.library_path)
    }
}

impl StructuredLog for LibraryLoaded<'_> {
    fn log(&self) {
        tracing::info!(library_path = self.library_path, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "library_loaded",
            name = name,
            library_path = self.library_path,
        )
    }
}

/// Native library could not be loaded.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use bridgegen::observability::messages::runtime::LibraryLoadFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
/// let msg = LibraryLoadFailed {
///     library_path: "dist/flywheelBridge.so",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct LibraryLoadFailed<'a> {
    pub library_path: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for LibraryLoadFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to load native bridge library '{}': {}",
            self.library_path, self.error
        )
    }
}

impl StructuredLog for LibraryLoadFailed<'_> {
    fn log(&self) {
        tracing::error!(
            library_path = self.library_path,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "library_load_failed",
            name = name,
            library_path = self.library_path,
            error = %self.error,
        )
    }
}

/// A native export named by the binding is missing from the library.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ExportResolveFailed<'a> {
    pub export: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ExportResolveFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Failed to resolve export '{}': {}", self.export, self.error)
    }
}

impl StructuredLog for ExportResolveFailed<'_> {
    fn log(&self) {
        tracing::error!(export = self.export, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "export_resolve_failed",
            name = name,
            export = self.export,
            error = %self.error,
        )
    }
}
