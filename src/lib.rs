// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // generator config + loading
pub mod encoding;   // per-kind encoding rules and encoders
pub mod errors;     // error handling
pub mod generator;  // config -> binding files
pub mod model;      // signature model + validation
pub mod observability;
pub mod render;     // binding IR and target formatters
pub mod runtime;    // support library for generated Rust bindings
