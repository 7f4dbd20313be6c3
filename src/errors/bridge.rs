// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error types surfaced by generated bindings at their own runtime.

use crate::errors::ValidationError;
use thiserror::Error;

/// Every failure a generated binding can report to its caller.
///
/// Nothing here is retried. `Api` is the expected, recoverable outcome of a
/// native call that returned a non-zero status; the other variants indicate a
/// programming error, bad input, or a binding/library mismatch.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Malformed input detected before any native call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A parameter value could not be converted to its native buffer form.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The native layer returned data violating its documented contract.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The native layer reported a non-zero status.
    #[error("{message}")]
    Api { status: i32, message: String },

    /// The compiled library or one of its exports could not be loaded.
    #[error("Failed to load native library '{library}': {reason}")]
    Load { library: String, reason: String },
}

impl BridgeError {
    /// Status code carried by a domain error, if this is one.
    pub fn status(&self) -> Option<i32> {
        match self {
            BridgeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

/// Result type alias for generated binding operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
