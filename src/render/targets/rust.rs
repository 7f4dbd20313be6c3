// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::ParamKind;
use crate::render::ir::{Binding, FunctionDef, ReturnDecl};
use crate::render::targets::{generated_notice, Target};

/// Emits a Rust module that loads the bridge through `bridgegen::runtime`.
///
/// The module defines one `unsafe extern "C" fn` type alias per export (its
/// return-type declaration), an `Exports` table resolved once when the library
/// loads, a `Bridge` owning library and table, and a `Client` exposing one
/// method per signature.
pub struct RustTarget;

impl Target for RustTarget {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn format(&self, binding: &Binding) -> String {
        let mut out = String::new();

        out.push_str(&format!("// {}\n\n", generated_notice(binding)));
        out.push_str(&render_imports(binding));
        out.push_str(&format!(
            "/// Release version this binding was generated for.\npub const SDK_VERSION: &str = {:?};\n\n",
            binding.version
        ));
        out.push_str(&format!(
            "/// File stem of the compiled bridge library.\npub const LIBRARY_STEM: &str = {:?};\n\n",
            binding.library_stem
        ));

        out.push_str("// Every bridge export returns a pointer to a NUL-terminated buffer.\n");
        out.push_str(&render_fn_alias(&binding.diagnostic));
        for decl in &binding.declarations {
            out.push_str(&render_fn_alias(decl));
        }
        out.push('\n');

        out.push_str(&render_exports(binding));
        out.push_str("/// Returns the release version of the SDK.\n");
        out.push_str("pub fn sdk_version() -> &'static str {\n    SDK_VERSION\n}\n\n");
        out.push_str(BRIDGE_IMPL);
        out.push_str(CLIENT_HEAD);
        for function in &binding.functions {
            out.push('\n');
            out.push_str(&render_method(function));
        }
        out.push_str("}\n");

        out
    }
}

fn render_imports(binding: &Binding) -> String {
    let has_plain = binding
        .functions
        .iter()
        .flat_map(|f| &f.params)
        .any(|p| p.kind == ParamKind::Plain);
    let has_payload = binding.functions.iter().any(|f| f.serialize.is_some());
    let has_functions = !binding.functions.is_empty();

    let mut out = String::new();
    if has_plain {
        out.push_str("use std::fmt::Display;\n");
    }
    if has_functions {
        out.push_str("use std::os::raw::{c_char, c_int};\n");
    } else {
        out.push_str("use std::os::raw::c_char;\n");
    }
    out.push_str("use std::path::Path;\n\n");
    out.push_str("use bridgegen::runtime::{self, ApiKey, BridgeError, NativeLibrary};\n");
    if has_payload {
        out.push_str("use serde::Serialize;\n");
    }
    if has_functions {
        out.push_str("use serde_json::Value;\n");
    }
    out.push('\n');
    out
}

fn alias_name(export: &str) -> String {
    format!("{}Fn", export)
}

fn field_name(decl: &ReturnDecl, binding: &Binding) -> String {
    if decl.export == binding.diagnostic.export {
        return "test_bridge".to_string();
    }
    binding
        .functions
        .iter()
        .find(|f| f.export == decl.export)
        .map(|f| f.name.clone())
        .unwrap_or_else(|| decl.export.clone())
}

fn render_fn_alias(decl: &ReturnDecl) -> String {
    let mut args = vec!["*const c_char"; decl.buffer_count()];
    if decl.authenticated {
        args.push("*mut c_int");
    }
    format!(
        "type {} = unsafe extern \"C\" fn({}) -> *mut c_char;\n",
        alias_name(&decl.export),
        args.join(", ")
    )
}

fn render_exports(binding: &Binding) -> String {
    let decls: Vec<&ReturnDecl> = std::iter::once(&binding.diagnostic)
        .chain(&binding.declarations)
        .collect();

    let mut out = String::from("struct Exports {\n");
    for decl in &decls {
        out.push_str(&format!(
            "    {}: {},\n",
            field_name(decl, binding),
            alias_name(&decl.export)
        ));
    }
    out.push_str("}\n\n");

    out.push_str("impl Exports {\n");
    out.push_str("    fn resolve(library: &NativeLibrary) -> Result<Self, BridgeError> {\n");
    out.push_str("        // SAFETY: each alias above matches the C prototype of its export.\n");
    out.push_str("        unsafe {\n");
    out.push_str("            Ok(Self {\n");
    for decl in &decls {
        out.push_str(&format!(
            "                {}: library.export::<{}>({:?})?,\n",
            field_name(decl, binding),
            alias_name(&decl.export),
            decl.export
        ));
    }
    out.push_str("            })\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");
    out
}

const BRIDGE_IMPL: &str = r#"/// The loaded bridge library with every export resolved.
pub struct Bridge {
    exports: Exports,
    _library: NativeLibrary,
}

impl Bridge {
    /// Load the platform's bridge library from `dir` and resolve every export.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, BridgeError> {
        let library = NativeLibrary::load(dir, LIBRARY_STEM)?;
        let exports = Exports::resolve(&library)?;
        Ok(Self {
            exports,
            _library: library,
        })
    }

    /// Check that data flows across the bridge. Should return "Hello <s>".
    pub fn test_bridge(&self, s: &str) -> Result<String, BridgeError> {
        let s_buf = runtime::encode_plain(s)?;
        // SAFETY: the export returns a NUL-terminated buffer and `s_buf` outlives the call.
        unsafe { runtime::decode_text((self.exports.test_bridge)(s_buf.as_ptr())) }
    }

    /// Create a client authenticated with `key`.
    pub fn client(&self, key: &str) -> Result<Client<'_>, BridgeError> {
        Client::new(self, key)
    }
}

"#;

const CLIENT_HEAD: &str = r#"/// API client bound to a loaded bridge.
pub struct Client<'a> {
    bridge: &'a Bridge,
    key: ApiKey,
}

impl<'a> Client<'a> {
    /// Fails if `key` is not of the form `<identifier>:<secret>`.
    pub fn new(bridge: &'a Bridge, key: &str) -> Result<Self, BridgeError> {
        Ok(Self {
            bridge,
            key: ApiKey::new(key)?,
        })
    }
"#;

fn render_method(function: &FunctionDef) -> String {
    let params: Vec<String> = function
        .params
        .iter()
        .map(|p| match p.kind {
            ParamKind::Plain => format!("{}: impl Display", p.name),
            ParamKind::Payload => format!("{}: &(impl Serialize + ?Sized)", p.name),
        })
        .collect();

    let mut out = format!("    /// Calls the `{}` export.\n", function.export);
    out.push_str(&format!(
        "    pub fn {}(&self{}) -> Result<Option<Value>, BridgeError> {{\n",
        function.name,
        params.iter().map(|p| format!(", {}", p)).collect::<String>()
    ));

    if let Some(step) = &function.serialize {
        out.push_str(&format!(
            "        let {} = runtime::serialize_payload({})?;\n",
            step.local, step.param
        ));
    }
    for arg in &function.call_args {
        out.push_str(&format!(
            "        let {} = runtime::encode_plain(&{})?;\n",
            arg.buffer, arg.source
        ));
    }

    let args: String = function
        .call_args
        .iter()
        .map(|a| format!("{}.as_ptr(), ", a.buffer))
        .collect();

    out.push_str("        // SAFETY: the export matches its alias and every buffer outlives the call.\n");
    out.push_str("        unsafe {\n");
    out.push_str("            runtime::invoke(|status| {\n");
    out.push_str(&format!(
        "                (self.bridge.exports.{})(self.key.as_ptr(), {}status)\n",
        function.name, args
    ));
    out.push_str("            })\n");
    out.push_str("        }\n");
    out.push_str("    }\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::EncodingRules;
    use crate::model::{SignatureModel, SignatureSpec};
    use crate::render::builder::{build_binding, BindingOptions};

    fn format(specs: Vec<SignatureSpec>) -> String {
        let model = SignatureModel::new(specs).unwrap();
        let binding = build_binding(
            &model,
            &EncodingRules::standard(),
            &BindingOptions {
                version: "0.2.0".to_string(),
                library_stem: "flywheelBridge".to_string(),
            },
        );
        RustTarget.format(&binding)
    }

    #[test]
    fn declares_return_type_for_every_export() {
        let out = format(vec![
            SignatureSpec::new("GetConfig"),
            SignatureSpec::new("AddProjectTag").plain("id").plain("tag"),
        ]);

        assert!(out.contains("type TestBridgeFn = unsafe extern \"C\" fn(*const c_char) -> *mut c_char;"));
        assert!(out.contains(
            "type GetConfigFn = unsafe extern \"C\" fn(*const c_char, *mut c_int) -> *mut c_char;"
        ));
        assert!(out.contains(
            "type AddProjectTagFn = unsafe extern \"C\" fn(*const c_char, *const c_char, *const c_char, *mut c_int) -> *mut c_char;"
        ));
    }

    #[test]
    fn resolves_exports_by_native_name() {
        let out = format(vec![SignatureSpec::new("GetAllUsers")]);

        assert!(out.contains("    get_all_users: GetAllUsersFn,\n"));
        assert!(out.contains("get_all_users: library.export::<GetAllUsersFn>(\"GetAllUsers\")?,"));
        assert!(out.contains("test_bridge: library.export::<TestBridgeFn>(\"TestBridge\")?,"));
    }

    #[test]
    fn method_marshals_in_order() {
        let out = format(vec![SignatureSpec::new("ModifyProject").plain("id").payload("project")]);

        let expected = "    pub fn modify_project(&self, id: impl Display, project: &(impl Serialize + ?Sized)) -> Result<Option<Value>, BridgeError> {\n\
                        \x20       let project_json = runtime::serialize_payload(project)?;\n\
                        \x20       let id_buf = runtime::encode_plain(&id)?;\n\
                        \x20       let project_buf = runtime::encode_plain(&project_json)?;\n";
        assert!(out.contains(expected), "{}", out);
        assert!(out.contains(
            "(self.bridge.exports.modify_project)(self.key.as_ptr(), id_buf.as_ptr(), project_buf.as_ptr(), status)"
        ));
        assert_eq!(out.matches("serialize_payload").count(), 1);
    }

    #[test]
    fn zero_parameter_method_takes_only_the_key() {
        let out = format(vec![SignatureSpec::new("GetCurrentUser")]);
        assert!(out.contains("pub fn get_current_user(&self) -> Result<Option<Value>, BridgeError> {"));
        assert!(out.contains("(self.bridge.exports.get_current_user)(self.key.as_ptr(), status)"));
    }

    #[test]
    fn embeds_version_and_imports_only_what_is_used() {
        let out = format(vec![SignatureSpec::new("GetUser").plain("id")]);

        assert!(out.contains("pub const SDK_VERSION: &str = \"0.2.0\";"));
        assert!(out.contains("pub const LIBRARY_STEM: &str = \"flywheelBridge\";"));
        assert!(out.contains("use std::fmt::Display;"));
        assert!(!out.contains("use serde::Serialize;"));
    }

    #[test]
    fn empty_binding_still_has_bridge_and_client() {
        let out = format(vec![]);
        assert!(out.contains("pub struct Bridge {"));
        assert!(out.contains("pub struct Client<'a> {"));
        assert!(out.contains("use std::os::raw::c_char;\n"));
        assert!(!out.contains("serde_json"));
    }
}
