// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::ffi::CString;
use std::fmt;
use std::os::raw::c_char;

use crate::config::consts::TOKEN_SEPARATOR;
use crate::encoding::encode_token;
use crate::errors::{BridgeResult, ValidationError};

/// API key captured when a client is constructed; immutable afterwards.
///
/// Well-formed keys look like `<identifier>:<secret>`. The parts are not
/// interpreted here; the native library does that.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    buffer: CString,
}

impl ApiKey {
    pub fn new(key: &str) -> BridgeResult<Self> {
        if !key.contains(TOKEN_SEPARATOR) {
            return Err(ValidationError::MalformedToken.into());
        }

        Ok(Self {
            buffer: encode_token(key)?,
        })
    }

    /// Pointer to the NUL-terminated key buffer, valid while `self` lives.
    pub fn as_ptr(&self) -> *const c_char {
        self.buffer.as_ptr()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}
