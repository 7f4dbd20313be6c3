// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use crate::config::consts::DEFAULT_VERSION;
use crate::config::{TargetConfig, ValidatedConfig};
use crate::encoding::EncodingRules;
use crate::errors::GenerateError;
use crate::observability::messages::generator::VersionMissing;
use crate::observability::messages::StructuredLog;
use crate::render::{build_binding, render, write_binding, Binding, BindingOptions, RenderedBinding, TargetKind};

/// A rendered binding paired with the file it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutput {
    pub path: PathBuf,
    pub rendered: RenderedBinding,
}

/// Generator pipeline - turns a validated config into binding files.
///
/// The binding tree is built once in [`Generator::from_config`]; every target
/// formats that same tree, so all outputs agree on functions and order.
///
/// # Examples
/// ```
/// use bridgegen::config::{validate_config, Config};
/// use bridgegen::generator::Generator;
///
/// let cfg: Config = serde_yaml::from_str(
///     "version: '1.0'\ntargets: [{ target: c, output: bridge.h }]\nsignatures: [{ name: GetConfig }]",
/// )
/// .unwrap();
/// let validated = validate_config(cfg).unwrap();
///
/// let outputs = Generator::from_config(&validated).render_all(&[]);
/// assert_eq!(outputs.len(), 1);
/// assert!(outputs[0].rendered.text.contains("char* GetConfig(char* apiKey, int* status);"));
/// ```
pub struct Generator {
    binding: Binding,
    targets: Vec<(TargetConfig, PathBuf)>,
}

impl Generator {
    /// Build the binding tree for `validated`.
    ///
    /// A missing or blank version is replaced by [`DEFAULT_VERSION`] with a warning.
    pub fn from_config(validated: &ValidatedConfig) -> Self {
        let cfg = &validated.config;

        let version = match cfg.version.as_deref().map(str::trim) {
            Some(version) if !version.is_empty() => version.to_string(),
            _ => {
                VersionMissing {
                    config_path: &cfg.source.display().to_string(),
                    placeholder: DEFAULT_VERSION,
                }
                .log();
                DEFAULT_VERSION.to_string()
            }
        };

        let binding = build_binding(
            &validated.model,
            &EncodingRules::standard(),
            &BindingOptions {
                version,
                library_stem: cfg.library.clone(),
            },
        );

        let targets = cfg
            .targets
            .iter()
            .map(|t| (t.clone(), cfg.resolve(&t.output)))
            .collect();

        Self { binding, targets }
    }

    pub fn binding(&self) -> &Binding {
        &self.binding
    }

    /// Render every configured target, or only those listed in `only` when it
    /// is not empty. Outputs keep config order.
    pub fn render_all(&self, only: &[TargetKind]) -> Vec<PlannedOutput> {
        self.targets
            .iter()
            .filter(|(t, _)| only.is_empty() || only.contains(&t.target))
            .map(|(t, path)| PlannedOutput {
                path: path.clone(),
                rendered: render(&self.binding, t.target),
            })
            .collect()
    }

    /// Render and write the selected targets. Returns the written paths.
    pub fn write_all(&self, only: &[TargetKind]) -> Result<Vec<PathBuf>, GenerateError> {
        let mut written = Vec::new();
        for output in self.render_all(only) {
            write_binding(&output.path, &output.rendered)?;
            written.push(output.path);
        }
        Ok(written)
    }
}
