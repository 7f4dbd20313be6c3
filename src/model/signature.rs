// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ValidationError;
use crate::model::naming::{to_snake_case, NamingTransform};
use crate::model::validation::validate_signatures;
use serde::{Deserialize, Serialize};

/// How a parameter value is carried across the bridge.
///
/// The aliases accept the type tags emitted by the signature scanner
/// (`string` for plain values, `data` for structured documents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Stringified and passed as text.
    #[default]
    #[serde(alias = "string")]
    Plain,
    /// Serialized to a JSON document before being passed as text.
    #[serde(alias = "data")]
    Payload,
}

/// Raw parameter record as supplied by the signature source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParameterSpec {
    pub name: String,
    #[serde(default)]
    pub kind: ParamKind,
}

/// Raw signature record as supplied by the signature source.
///
/// # Example
/// ```yaml
/// name: ModifyProject
/// params:
///   - { name: id, kind: plain }
///   - { name: project, kind: payload }
/// payload_param: project
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SignatureSpec {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParameterSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_param: Option<String>,
}

impl SignatureSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            payload_param: None,
        }
    }

    pub fn plain(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParameterSpec {
            name: name.into(),
            kind: ParamKind::Plain,
        });
        self
    }

    pub fn payload(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.payload_param = Some(name.clone());
        self.params.push(ParameterSpec {
            name,
            kind: ParamKind::Payload,
        });
        self
    }
}

/// A validated parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    idiomatic_name: String,
    kind: ParamKind,
}

impl Parameter {
    /// Name as declared by the native export.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn idiomatic_name(&self) -> &str {
        &self.idiomatic_name
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }
}

/// A validated signature. Parameter order is call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    name: String,
    idiomatic_name: String,
    params: Vec<Parameter>,
    payload_index: Option<usize>,
}

impl Signature {
    /// Name of the native export.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name the generated callable is exposed under.
    pub fn idiomatic_name(&self) -> &str {
        &self.idiomatic_name
    }

    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// The single parameter whose value is serialized before crossing the bridge.
    pub fn payload_param(&self) -> Option<&Parameter> {
        self.payload_index.map(|i| &self.params[i])
    }
}

/// The validated signature set, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureModel {
    signatures: Vec<Signature>,
}

impl SignatureModel {
    /// Validate `specs` and build the model using the snake case naming transform.
    pub fn new(specs: Vec<SignatureSpec>) -> Result<Self, Vec<ValidationError>> {
        Self::with_naming(specs, to_snake_case)
    }

    /// Validate `specs` and build the model with a custom naming transform.
    ///
    /// All validation errors are reported together; nothing is built unless
    /// every signature is valid.
    pub fn with_naming(
        specs: Vec<SignatureSpec>,
        naming: NamingTransform,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_signatures(&specs, naming)?;

        let signatures = specs
            .into_iter()
            .map(|spec| {
                let payload_index = match &spec.payload_param {
                    Some(payload) => spec.params.iter().position(|p| &p.name == payload),
                    None => spec.params.iter().position(|p| p.kind == ParamKind::Payload),
                };

                let params = spec
                    .params
                    .into_iter()
                    .enumerate()
                    .map(|(i, p)| Parameter {
                        idiomatic_name: naming(&p.name),
                        // the payload parameter is always serialized, whatever its declared kind
                        kind: if Some(i) == payload_index {
                            ParamKind::Payload
                        } else {
                            p.kind
                        },
                        name: p.name,
                    })
                    .collect();

                Signature {
                    idiomatic_name: naming(&spec.name),
                    name: spec.name,
                    params,
                    payload_index,
                }
            })
            .collect();

        Ok(Self { signatures })
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    pub fn get(&self, name: &str) -> Option<&Signature> {
        self.signatures.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
