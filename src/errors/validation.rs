// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while validating a signature list or an API key.
///
/// Signature validation collects every problem it finds rather than stopping at
/// the first one, so callers usually receive a `Vec<ValidationError>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A signature was declared with an empty name
    #[error("Signature at position {index} has an empty name")]
    EmptySignatureName { index: usize },

    /// Two signatures share the same native export name
    #[error("Duplicate signature name: '{name}'")]
    DuplicateSignature { name: String },

    /// Two parameters of one signature share a name
    #[error("Signature '{signature}' declares parameter '{parameter}' more than once")]
    DuplicateParameter { signature: String, parameter: String },

    /// `payload_param` names a parameter the signature does not have
    #[error("Signature '{signature}' names payload parameter '{parameter}' which does not exist")]
    UnknownPayloadParameter { signature: String, parameter: String },

    /// More than one parameter of a signature carries a structured payload
    #[error("Signature '{signature}' has more than one payload parameter: {}", .parameters.join(", "))]
    MultiplePayloadParameters {
        signature: String,
        parameters: Vec<String>,
    },

    /// A name is not usable as an identifier in the generated code
    #[error("'{name}' is not a valid identifier (expected an ASCII letter followed by letters, digits or '_')")]
    InvalidIdentifier { name: String },

    /// Two distinct names map to the same idiomatic name
    #[error("'{first}' and '{second}' both translate to '{idiomatic}'")]
    NameCollision {
        first: String,
        second: String,
        idiomatic: String,
    },

    /// A name clashes with a keyword or a name every binding reserves
    #[error("'{name}' translates to '{idiomatic}', which is reserved in generated bindings")]
    ReservedName { name: String, idiomatic: String },

    /// An API key is not of the form `<identifier>:<secret>`
    #[error("Invalid API key.")]
    MalformedToken,
}
