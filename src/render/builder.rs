// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::encoding::EncodingRules;
use crate::model::{Signature, SignatureModel};
use crate::render::ir::{
    Binding, CallArg, FunctionDef, NativeReturn, ParamDef, ReturnDecl, SerializeStep,
    TEST_BRIDGE_EXPORT,
};

/// Values embedded in a binding that do not come from the signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingOptions {
    pub version: String,
    pub library_stem: String,
}

/// Build the binding IR for a validated model.
///
/// Pure and order-preserving: the same inputs always produce the same
/// [`Binding`], with functions and declarations in signature order. No input
/// checking happens here; the model is already validated.
pub fn build_binding(model: &SignatureModel, rules: &EncodingRules, options: &BindingOptions) -> Binding {
    Binding {
        version: options.version.clone(),
        library_stem: options.library_stem.clone(),
        diagnostic: ReturnDecl {
            export: TEST_BRIDGE_EXPORT.to_string(),
            params: vec!["name".to_string()],
            authenticated: false,
            returns: NativeReturn::BytePointer,
        },
        functions: model
            .signatures()
            .iter()
            .map(|s| build_function(s, rules))
            .collect(),
        declarations: model.signatures().iter().map(build_declaration).collect(),
    }
}

fn build_function(signature: &Signature, rules: &EncodingRules) -> FunctionDef {
    let mut locals = LocalNames::new(signature.params().iter().map(|p| p.idiomatic_name()));

    let params = signature
        .params()
        .iter()
        .map(|p| ParamDef {
            name: p.idiomatic_name().to_string(),
            kind: p.kind(),
        })
        .collect();

    let serialize = signature.payload_param().map(|p| SerializeStep {
        param: p.idiomatic_name().to_string(),
        local: locals.allocate(&format!("{}_json", p.idiomatic_name())),
    });

    let call_args = signature
        .params()
        .iter()
        .map(|p| {
            let rule = rules.rule_for(p.kind());
            let source = match &serialize {
                Some(step) if rule.serializes() && step.param == p.idiomatic_name() => step.local.clone(),
                _ => p.idiomatic_name().to_string(),
            };
            CallArg {
                buffer: locals.allocate(&format!("{}_buf", p.idiomatic_name())),
                source,
                rule: if rule.serializes() { rule.buffer_rule() } else { rule },
            }
        })
        .collect();

    FunctionDef {
        name: signature.idiomatic_name().to_string(),
        export: signature.name().to_string(),
        params,
        serialize,
        call_args,
    }
}

fn build_declaration(signature: &Signature) -> ReturnDecl {
    ReturnDecl {
        export: signature.name().to_string(),
        params: signature.params().iter().map(|p| p.name().to_string()).collect(),
        authenticated: true,
        returns: NativeReturn::BytePointer,
    }
}

/// Hands out local variable names that never collide with parameters or with
/// each other.
struct LocalNames {
    taken: HashSet<String>,
}

impl LocalNames {
    fn new<'a>(params: impl Iterator<Item = &'a str>) -> Self {
        Self {
            taken: params.map(str::to_string).collect(),
        }
    }

    fn allocate(&mut self, wanted: &str) -> String {
        let mut name = wanted.to_string();
        while self.taken.contains(&name) {
            name.push('_');
        }
        self.taken.insert(name.clone());
        name
    }
}
