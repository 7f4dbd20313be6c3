// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::render::ir::{Binding, ReturnDecl};
use crate::render::targets::{generated_notice, Target};

/// Emits a C header declaring every native export.
pub struct CHeaderTarget;

impl Target for CHeaderTarget {
    fn name(&self) -> &'static str {
        "c"
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn format(&self, binding: &Binding) -> String {
        let prefix = macro_prefix(&binding.library_stem);
        let guard = format!("{}_H", prefix);
        let mut out = String::new();

        out.push_str(&format!("/* {} */\n\n", generated_notice(binding)));
        out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n", guard = guard));
        out.push_str(&format!(
            "#define {}_SDK_VERSION {}\n\n",
            prefix,
            c_str(&binding.version)
        ));
        out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");

        out.push_str("/* Returns \"Hello <name>\". */\n");
        out.push_str(&render_prototype(&binding.diagnostic));
        out.push('\n');
        for decl in &binding.declarations {
            out.push_str(&render_prototype(decl));
        }
        if !binding.declarations.is_empty() {
            out.push('\n');
        }

        out.push_str("#ifdef __cplusplus\n}\n#endif\n\n");
        out.push_str(&format!("#endif /* {} */\n", guard));
        out
    }
}

fn macro_prefix(stem: &str) -> String {
    let mut prefix: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        prefix.insert(0, '_');
    }
    prefix
}

fn c_str(value: &str) -> String {
    let mut out = String::from("\"");
    for b in value.bytes() {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\{:03o}", b)),
        }
    }
    out.push('"');
    out
}

fn render_prototype(decl: &ReturnDecl) -> String {
    let mut args = Vec::with_capacity(decl.params.len() + 2);
    if decl.authenticated {
        args.push("char* apiKey".to_string());
    }
    args.extend(decl.params.iter().map(|p| format!("char* {}", p)));
    if decl.authenticated {
        args.push("int* status".to_string());
    }
    format!("char* {}({});\n", decl.export, args.join(", "))
}
