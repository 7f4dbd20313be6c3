// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Encoding Rules: how each parameter kind becomes a native byte buffer.
//!
//! This is the only place, together with the response decoder, that knows how
//! text is represented at the bridge. Every buffer handed to the native library
//! is NUL-terminated UTF-8.
//!
//! The [`EncodingRules`] table drives the renderer; the `encode_*` functions are
//! what generated Rust bindings call at their own runtime.

mod buffers;
mod rules;

pub use buffers::{encode_payload, encode_plain, encode_token, serialize_payload};
pub use rules::{EncodingRule, EncodingRules};
