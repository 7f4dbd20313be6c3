// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod bridge;
mod generate;
mod validation;

pub use bridge::{BridgeError, BridgeResult};
pub use generate::GenerateError;
pub use validation::ValidationError;
