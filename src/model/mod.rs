// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Signature Model: the validated, read-only description of every native export
//! a binding wraps.
//!
//! Raw input arrives as [`SignatureSpec`] records (deserialized from a config
//! or a discovery dump). [`SignatureModel::new`] validates them all at once and
//! produces immutable [`Signature`] values carrying both the native export name
//! and the idiomatic name generated code exposes.

mod naming;
mod signature;
mod validation;

pub use naming::{to_snake_case, NamingTransform};
pub use signature::{ParamKind, Parameter, ParameterSpec, Signature, SignatureModel, SignatureSpec};
pub use validation::{is_valid_identifier, validate_signatures, RESERVED_NAMES};
