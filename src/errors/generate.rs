// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the generator pipeline: config loading, validation and output.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// File extension is not one of yaml, yml, json, toml
    #[error("Unsupported file format: '{}'", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Unknown target '{0}' (expected one of: rust, python, c)")]
    UnknownTarget(String),

    #[error("Signature validation failed:\n{}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
