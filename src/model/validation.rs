// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Signature list validation.
//!
//! Every check runs over the whole list and all failures are returned together,
//! so a broken signature dump can be fixed in one pass. The checks run in this
//! order:
//!
//! 1. **Signature names**: non-empty, legal identifiers, unique
//! 2. **Parameters**: legal identifiers, unique within their signature, usable verbatim in C
//! 3. **Payload**: `payload_param` names a real parameter, at most one payload per signature
//! 4. **Idiomatic names**: the naming transform stays injective and avoids reserved names

use std::collections::{HashMap, HashSet};

use crate::errors::ValidationError;
use crate::model::naming::NamingTransform;
use crate::model::signature::{ParamKind, SignatureSpec};

/// Names every generated binding defines itself, plus the locals generated
/// methods bind. No signature or parameter may translate to one of these.
pub const RESERVED_NAMES: &[&str] = &[
    "new",
    "load",
    "client",
    "test_bridge",
    "sdk_version",
    "get_sdk_version",
    "status",
    "pointer",
];

// Rust and Python keywords; a generated name must be legal in every target.
const KEYWORDS: &[&str] = &[
    "abstract", "and", "as", "assert", "async", "await", "become", "box", "break", "class",
    "const", "continue", "crate", "def", "del", "do", "dyn", "elif", "else", "enum", "except",
    "extern", "false", "final", "finally", "fn", "for", "from", "global", "if", "impl", "import",
    "in", "is", "lambda", "let", "loop", "macro", "match", "mod", "move", "mut", "nonlocal",
    "not", "or", "override", "pass", "priv", "pub", "raise", "ref", "return", "self", "static",
    "struct", "super", "trait", "true", "try", "type", "typeof", "union", "unsafe", "unsized",
    "use", "virtual", "where", "while", "with", "yield",
];

// Arguments the C prototypes declare around a signature's own parameters.
const NATIVE_ARGUMENTS: &[&str] = &["apiKey", "status"];

// C and C++ keywords; native names appear verbatim in the C header.
const C_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const", "continue", "default",
    "delete", "do", "double", "else", "enum", "explicit", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new", "operator",
    "private", "protected", "public", "register", "restrict", "return", "short", "signed",
    "sizeof", "static", "struct", "switch", "template", "this", "throw", "true", "try",
    "typedef", "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "while",
];

/// Returns true if `name` is an ASCII letter followed by letters, digits or `_`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn is_reserved(idiomatic: &str) -> bool {
    RESERVED_NAMES.contains(&idiomatic) || KEYWORDS.contains(&idiomatic)
}

// Names already caught by the idiomatic check are not reported twice.
fn native_name_error(name: &str, arguments: &[&str]) -> Option<ValidationError> {
    let clashes = arguments.contains(&name) || C_KEYWORDS.contains(&name);
    (clashes && !is_reserved(name)).then(|| ValidationError::ReservedName {
        name: name.to_string(),
        idiomatic: name.to_string(),
    })
}

/// Validate a raw signature list.
///
/// # Returns
/// * `Ok(())` - every signature is valid and the model can be built
/// * `Err(Vec<ValidationError>)` - every problem found
pub fn validate_signatures(
    specs: &[SignatureSpec],
    naming: NamingTransform,
) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(validate_signature_names(specs));
    for spec in specs {
        errors.extend(validate_parameters(spec));
        errors.extend(validate_payload(spec));
    }
    errors.extend(validate_idiomatic_names(specs, naming));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_signature_names(specs: &[SignatureSpec]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for (index, spec) in specs.iter().enumerate() {
        if spec.name.is_empty() {
            errors.push(ValidationError::EmptySignatureName { index });
            continue;
        }
        if !is_valid_identifier(&spec.name) {
            errors.push(ValidationError::InvalidIdentifier {
                name: spec.name.clone(),
            });
        }
        errors.extend(native_name_error(&spec.name, &[]));
        if !seen.insert(spec.name.as_str()) && reported.insert(spec.name.as_str()) {
            errors.push(ValidationError::DuplicateSignature {
                name: spec.name.clone(),
            });
        }
    }

    errors
}

fn validate_parameters(spec: &SignatureSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for param in &spec.params {
        if !is_valid_identifier(&param.name) {
            errors.push(ValidationError::InvalidIdentifier {
                name: param.name.clone(),
            });
        }
        errors.extend(native_name_error(&param.name, NATIVE_ARGUMENTS));
        if !seen.insert(param.name.as_str()) {
            errors.push(ValidationError::DuplicateParameter {
                signature: spec.name.clone(),
                parameter: param.name.clone(),
            });
        }
    }

    errors
}

fn validate_payload(spec: &SignatureSpec) -> Vec<ValidationError> {
    let mut payloads: Vec<String> = spec
        .params
        .iter()
        .filter(|p| p.kind == ParamKind::Payload)
        .map(|p| p.name.clone())
        .collect();

    if let Some(payload) = &spec.payload_param {
        if !spec.params.iter().any(|p| &p.name == payload) {
            return vec![ValidationError::UnknownPayloadParameter {
                signature: spec.name.clone(),
                parameter: payload.clone(),
            }];
        }
        if !payloads.contains(payload) {
            payloads.insert(0, payload.clone());
        }
    }

    if payloads.len() > 1 {
        return vec![ValidationError::MultiplePayloadParameters {
            signature: spec.name.clone(),
            parameters: payloads,
        }];
    }

    Vec::new()
}

fn validate_idiomatic_names(specs: &[SignatureSpec], naming: NamingTransform) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut functions: HashMap<String, &str> = HashMap::new();

    for spec in specs.iter().filter(|s| !s.name.is_empty()) {
        let idiomatic = naming(&spec.name);
        check_name(&spec.name, idiomatic, &mut functions, &mut errors);

        let mut params: HashMap<String, &str> = HashMap::new();
        for param in &spec.params {
            let idiomatic = naming(&param.name);
            check_name(&param.name, idiomatic, &mut params, &mut errors);
        }
    }

    errors
}

fn check_name<'a>(
    name: &'a str,
    idiomatic: String,
    seen: &mut HashMap<String, &'a str>,
    errors: &mut Vec<ValidationError>,
) {
    if is_reserved(&idiomatic) {
        errors.push(ValidationError::ReservedName {
            name: name.to_string(),
            idiomatic: idiomatic.clone(),
        });
    }

    match seen.get(&idiomatic) {
        // identical names are reported as duplicates, not collisions
        Some(first) if *first != name => errors.push(ValidationError::NameCollision {
            first: first.to_string(),
            second: name.to_string(),
            idiomatic,
        }),
        Some(_) => {}
        None => {
            seen.insert(idiomatic, name);
        }
    }
}
