// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for generator events:
//! * configuration and signature loading
//! * signature validation failures
//! * binding rendering and output

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Generator configuration loaded.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use bridgegen::observability::messages::generator::ConfigLoaded;
///
/// let msg = ConfigLoaded {
///     config_path: "demos/flywheel.yaml",
///     signature_count: 57,
///     target_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ConfigLoaded<'a> {
    pub config_path: &'a str,
    pub signature_count: usize,
    pub target_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded generator config: {} ({} signatures, {} targets)",
            self.config_path, self.signature_count, self.target_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            config_path = self.config_path,
            signature_count = self.signature_count,
            target_count = self.target_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "config_loaded",
            name = name,
            config_path = self.config_path,
            signature_count = self.signature_count,
        )
    }
}

/// Signature dropped by the config's exclude list.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct SignatureExcluded<'a> {
    pub signature: &'a str,
}

impl Display for SignatureExcluded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Excluding signature '{}'", self.signature)
    }
}

impl StructuredLog for SignatureExcluded<'_> {
    fn log(&self) {
        tracing::debug!(signature = self.signature, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "signature_excluded",
            name = name,
            signature = self.signature,
        )
    }
}

/// Signature list failed validation.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SignatureValidationFailed<'a> {
    pub config_path: &'a str,
    pub error_count: usize,
}

impl Display for SignatureValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Signature validation failed for '{}': {} error(s)",
            self.config_path, self.error_count
        )
    }
}

impl StructuredLog for SignatureValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            config_path = self.config_path,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "signature_validation_failed",
            name = name,
            config_path = self.config_path,
            error_count = self.error_count,
        )
    }
}

/// The config names no release version; a placeholder is embedded instead.
///
/// # Log Level
/// `warn!` - Degraded but continuing
pub struct VersionMissing<'a> {
    pub config_path: &'a str,
    pub placeholder: &'a str,
}

impl Display for VersionMissing<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not detect SDK version in '{}'; embedding '{}'",
            self.config_path, self.placeholder
        )
    }
}

impl StructuredLog for VersionMissing<'_> {
    fn log(&self) {
        tracing::warn!(
            config_path = self.config_path,
            placeholder = self.placeholder,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "version_missing",
            name = name,
            config_path = self.config_path,
        )
    }
}

/// Binding rendered for one target.
///
/// # Log Level
/// `info!` - Important operational event
pub struct BindingRendered<'a> {
    pub target: &'a str,
    pub function_count: usize,
    pub size_bytes: usize,
}

impl Display for BindingRendered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generated {} binding: {} functions, {} bytes",
            self.target, self.function_count, self.size_bytes
        )
    }
}

impl StructuredLog for BindingRendered<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            function_count = self.function_count,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "binding_rendered",
            name = name,
            target_name = self.target,
            function_count = self.function_count,
        )
    }
}

/// Rendered binding written to disk.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use bridgegen::observability::messages::generator::BindingWritten;
///
/// let msg = BindingWritten {
///     target: "python",
///     output_path: "dist/python/flywheel.py",
///     size_bytes: 8192,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct BindingWritten<'a> {
    pub target: &'a str,
    pub output_path: &'a str,
    pub size_bytes: usize,
}

impl Display for BindingWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Wrote {} binding to {} ({} bytes)",
            self.target, self.output_path, self.size_bytes
        )
    }
}

impl StructuredLog for BindingWritten<'_> {
    fn log(&self) {
        tracing::info!(
            target_name = self.target,
            output_path = self.output_path,
            size_bytes = self.size_bytes,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "binding_written",
            name = name,
            target_name = self.target,
            output_path = self.output_path,
        )
    }
}
