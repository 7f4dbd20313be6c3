// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Response decoder for `(status, buffer)` pairs returned by native exports.
//!
//! | status | buffer                   | outcome                                  |
//! |--------|--------------------------|------------------------------------------|
//! | 0      | null or empty            | `Ok(None)`                               |
//! | 0      | `{"data": v}`            | `Ok(Some(v))` (`null` data is `None`)    |
//! | 0      | no `data` / not JSON     | `Err(Protocol)`                          |
//! | != 0   | `{"message": m}`         | `Err(Api { message: m })`                |
//! | != 0   | anything else            | `Err(Api { message: "Unknown error ..." })` |
//! | any    | invalid UTF-8            | `Err(Protocol)`                          |

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

use serde_json::Value;

use crate::config::consts::STATUS_SUCCESS;
use crate::errors::{BridgeError, BridgeResult};

/// Message used when a failed call carries no readable `message` field.
pub fn unknown_error_message(status: i32) -> String {
    format!("Unknown error (status {}).", status)
}

/// Decode a response buffer. Pure: identical inputs always give identical outcomes.
pub fn decode_response(status: i32, raw: Option<&[u8]>) -> BridgeResult<Option<Value>> {
    let text = match raw {
        Some(bytes) => Some(std::str::from_utf8(bytes).map_err(|e| {
            BridgeError::Protocol(format!("response is not valid UTF-8: {}", e))
        })?),
        None => None,
    };
    let text = text.filter(|t| !t.is_empty());

    if status == STATUS_SUCCESS {
        let Some(text) = text else {
            return Ok(None);
        };

        let mut envelope: Value = serde_json::from_str(text).map_err(|e| {
            BridgeError::Protocol(format!("success response is not valid JSON: {}", e))
        })?;

        return match envelope.get_mut("data").map(Value::take) {
            Some(Value::Null) => Ok(None),
            Some(data) => Ok(Some(data)),
            None => Err(BridgeError::Protocol(
                "success response has no 'data' field".to_string(),
            )),
        };
    }

    let message = text
        .and_then(|t| serde_json::from_str::<Value>(t).ok())
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| unknown_error_message(status));

    Err(BridgeError::Api { status, message })
}

/// Decode a response straight from the pointer a native export returned.
///
/// # Safety
/// `pointer` must be null or point to a NUL-terminated buffer that stays
/// valid for the duration of this call.
pub unsafe fn decode_raw(status: c_int, pointer: *const c_char) -> BridgeResult<Option<Value>> {
    let raw = if pointer.is_null() {
        None
    } else {
        Some(CStr::from_ptr(pointer).to_bytes())
    };
    decode_response(status, raw)
}

/// Decode the plain-text reply of the diagnostic `TestBridge` export.
///
/// # Safety
/// Same contract as [`decode_raw`].
pub unsafe fn decode_text(pointer: *const c_char) -> BridgeResult<String> {
    if pointer.is_null() {
        return Err(BridgeError::Protocol(
            "diagnostic export returned a null buffer".to_string(),
        ));
    }

    CStr::from_ptr(pointer)
        .to_str()
        .map(str::to_string)
        .map_err(|e| BridgeError::Protocol(format!("response is not valid UTF-8: {}", e)))
}
