// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Intermediate representation of a binding: what to emit, independent of how
//! any target prints it.

use crate::encoding::EncodingRule;
use crate::model::ParamKind;

/// Name of the diagnostic export every bridge library provides.
pub const TEST_BRIDGE_EXPORT: &str = "TestBridge";

/// A complete binding, ready for a target formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Release version returned by the version-query callable.
    pub version: String,
    /// File stem of the compiled library (no extension).
    pub library_stem: String,
    /// Diagnostic export, declared before any generated function.
    pub diagnostic: ReturnDecl,
    /// One per signature, in input order.
    pub functions: Vec<FunctionDef>,
    /// One per signature, in input order.
    pub declarations: Vec<ReturnDecl>,
}

/// One generated callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// Idiomatic name the callable is exposed under.
    pub name: String,
    /// Native export invoked by the callable.
    pub export: String,
    /// Caller-facing parameters, in call order. The API key is implicit.
    pub params: Vec<ParamDef>,
    /// Serialization applied to the payload parameter before any buffer conversion.
    pub serialize: Option<SerializeStep>,
    /// Buffer conversions, in the order the buffers are passed to the export.
    pub call_args: Vec<CallArg>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    pub name: String,
    pub kind: ParamKind,
}

/// Binds the serialized form of `param` to `local`; `local` never shadows a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeStep {
    pub param: String,
    pub local: String,
}

/// Converts the value held in `source` into the native buffer `buffer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArg {
    pub source: String,
    pub buffer: String,
    pub rule: EncodingRule,
}

/// Native return type of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeReturn {
    /// Pointer to a NUL-terminated byte buffer.
    BytePointer,
}

/// Declares an export's prototype, most importantly its return type.
///
/// Foreign-call layers that default to an `int` return truncate pointers on
/// 64-bit systems, so every export gets an explicit declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDecl {
    pub export: String,
    /// Native names of the argument buffers after the API key, in order.
    pub params: Vec<String>,
    /// Whether the export takes the API key and a trailing status slot.
    pub authenticated: bool,
    pub returns: NativeReturn,
}

impl ReturnDecl {
    /// Number of buffer arguments, API key included.
    pub fn buffer_count(&self) -> usize {
        self.params.len() + usize::from(self.authenticated)
    }
}
