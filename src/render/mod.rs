// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Binding Renderer.
//!
//! Rendering is split in two: [`build_binding`] turns a validated
//! [`SignatureModel`](crate::model::SignatureModel) into a [`Binding`] tree
//! (what to emit), and a [`Target`] formatter prints that tree as source text
//! (how to emit it). Both halves are pure; rendering the same model twice
//! yields byte-identical output.

mod builder;
pub mod ir;
pub mod targets;

use std::path::Path;

pub use builder::{build_binding, BindingOptions};
pub use ir::{Binding, CallArg, FunctionDef, NativeReturn, ParamDef, ReturnDecl, SerializeStep};
pub use targets::{Target, TargetKind};

use crate::errors::GenerateError;
use crate::observability::messages::generator::{BindingRendered, BindingWritten};
use crate::observability::messages::StructuredLog;

/// Source text produced for one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBinding {
    pub target: TargetKind,
    pub text: String,
}

/// Format `binding` with the formatter for `kind`.
pub fn render(binding: &Binding, kind: TargetKind) -> RenderedBinding {
    let text = kind.formatter().format(binding);

    BindingRendered {
        target: kind.name(),
        function_count: binding.functions.len(),
        size_bytes: text.len(),
    }
    .log();

    RenderedBinding { target: kind, text }
}

/// Write a rendered binding to `path`, creating parent directories as needed.
pub fn write_binding<P: AsRef<Path>>(path: P, rendered: &RenderedBinding) -> Result<(), GenerateError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerateError::io(parent, e))?;
    }
    std::fs::write(path, &rendered.text).map_err(|e| GenerateError::io(path, e))?;

    BindingWritten {
        target: rendered.target.name(),
        output_path: &path.display().to_string(),
        size_bytes: rendered.text.len(),
    }
    .log();

    Ok(())
}
