// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Target formatters.
//!
//! Each formatter prints the same [`Binding`] tree for one language:
//! - [`RustTarget`]: module linking against `bridgegen::runtime` through libloading
//! - [`PythonTarget`]: Python 3 `ctypes` module
//! - [`CHeaderTarget`]: C prototypes of the native exports

mod c;
mod python;
mod rust;

pub use c::CHeaderTarget;
pub use python::PythonTarget;
pub use rust::RustTarget;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::errors::GenerateError;
use crate::render::ir::Binding;

/// Formats a binding as source text for one language.
pub trait Target: Send + Sync {
    /// Short name used in configs and on the command line
    fn name(&self) -> &'static str;

    /// Conventional file extension of the output, without the dot
    fn file_extension(&self) -> &'static str;

    /// Print the binding. Must be deterministic.
    fn format(&self, binding: &Binding) -> String;
}

/// Supported targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Rust,
    Python,
    C,
}

impl TargetKind {
    pub const ALL: [TargetKind; 3] = [TargetKind::Rust, TargetKind::Python, TargetKind::C];

    pub fn formatter(self) -> Box<dyn Target> {
        match self {
            TargetKind::Rust => Box::new(RustTarget),
            TargetKind::Python => Box::new(PythonTarget),
            TargetKind::C => Box::new(CHeaderTarget),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TargetKind::Rust => "rust",
            TargetKind::Python => "python",
            TargetKind::C => "c",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetKind {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| GenerateError::UnknownTarget(s.to_string()))
    }
}

/// Header line stamped on every generated file.
pub(crate) fn generated_notice(binding: &Binding) -> String {
    format!(
        "Code generated by bridgegen for {} {}. DO NOT EDIT.",
        binding.library_stem, binding.version
    )
}
