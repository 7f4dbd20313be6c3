// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::os::raw::{c_char, c_int};

use serde_json::Value;

use crate::config::consts::STATUS_UNSET;
use crate::errors::BridgeResult;
use crate::runtime::decoder::decode_raw;

/// Run one native call and decode its response.
///
/// Every invocation gets its own status slot on the stack; `call` receives a
/// pointer to it and must pass it through to the native export.
///
/// # Safety
/// The pointer returned by `call` must be null or point to a NUL-terminated
/// buffer that stays valid until this function returns.
pub unsafe fn invoke<F>(call: F) -> BridgeResult<Option<Value>>
where
    F: FnOnce(*mut c_int) -> *mut c_char,
{
    let mut status: c_int = STATUS_UNSET;
    let pointer = call(&mut status);
    decode_raw(status, pointer)
}
