// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Log messages are struct-based with a `Display` implementation, so log text
//! lives in one place instead of being scattered through the code as format
//! strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::generator` - config loading, validation, rendering and output events
//! * `messages::runtime` - library loading and platform resolution in generated bindings
//!
//! # Usage
//!
//! ```rust
//! use bridgegen::observability::messages::generator::BindingRendered;
//! use bridgegen::observability::messages::StructuredLog;
//!
//! BindingRendered {
//!     target: "python",
//!     function_count: 42,
//!     size_bytes: 8192,
//! }
//! .log();
//! ```

pub mod messages;
