// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Support library linked by generated Rust bindings.
//!
//! A generated binding resolves its library once through [`NativeLibrary::load`]
//! (which performs platform resolution), validates its key through [`ApiKey`],
//! and routes every native call through [`invoke`], which owns the per-call
//! status slot and hands the result to the response decoder.

mod decoder;
mod invoke;
mod key;
mod library;
pub mod platform;

pub use crate::encoding::{encode_payload, encode_plain, encode_token, serialize_payload};
pub use crate::errors::{BridgeError, BridgeResult};
pub use decoder::{decode_raw, decode_response, decode_text, unknown_error_message};
pub use invoke::invoke;
pub use key::ApiKey;
pub use library::NativeLibrary;
pub use platform::{current_os, library_filename, PlatformFamily, Resolution, ResolvedLibrary};
