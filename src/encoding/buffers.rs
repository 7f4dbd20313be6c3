// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::ffi::CString;
use std::fmt::Display;

use serde::Serialize;

use crate::errors::{BridgeError, BridgeResult};

/// Stringify `value` and encode it as a NUL-terminated UTF-8 buffer.
///
/// Fails with [`BridgeError::Serialization`] if the text contains an interior
/// NUL byte, which the native side would silently truncate.
pub fn encode_plain<T: Display + ?Sized>(value: &T) -> BridgeResult<CString> {
    CString::new(value.to_string()).map_err(|e| {
        BridgeError::Serialization(format!(
            "value contains a NUL byte at position {}",
            e.nul_position()
        ))
    })
}

/// Serialize `value` to a JSON document. Absent values (`None`) become `null`;
/// they are never dropped from the call.
pub fn serialize_payload<T: Serialize + ?Sized>(value: &T) -> BridgeResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Serialize `value` to JSON, then encode the document as a plain buffer.
pub fn encode_payload<T: Serialize + ?Sized>(value: &T) -> BridgeResult<CString> {
    let document = serialize_payload(value)?;
    encode_plain(&document)
}

/// Encode an API key buffer.
pub fn encode_token(token: &str) -> BridgeResult<CString> {
    encode_plain(token)
}
