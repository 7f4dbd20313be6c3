// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_LIBRARY_STEM;
use crate::errors::GenerateError;
use crate::model::{SignatureModel, SignatureSpec};
use crate::observability::messages::generator::{
    ConfigLoaded, SignatureExcluded, SignatureValidationFailed,
};
use crate::observability::messages::StructuredLog;
use crate::render::TargetKind;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Generator configuration.
///
/// Describes which signatures to bind, which targets to emit and where to
/// write them. Loaded from YAML, JSON or TOML depending on the file extension.
///
/// # Fields
/// * `version` - Release version embedded into every binding (optional)
/// * `library` - File stem of the compiled bridge library
/// * `exclude` - Signature names dropped before validation
/// * `targets` - Output targets, rendered in order
/// * `signatures` - Inline signature list
/// * `signatures_file` - External signature list, appended after the inline one
///
/// # Example
/// ```yaml
/// version: "0.2.0"
/// library: flywheelBridge
/// exclude: [ModifyJob]
/// targets:
///   - target: python
///     output: dist/flywheel.py
/// signatures:
///   - name: GetCurrentUser
///   - name: AddProject
///     params:
///       - { name: project, kind: payload }
/// signatures_file: signatures.json
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: Option<String>,
    #[serde(default = "default_library")]
    pub library: String,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    #[serde(default)]
    pub signatures: Vec<SignatureSpec>,
    pub signatures_file: Option<PathBuf>,
    /// Path the config was loaded from; empty when parsed from a string.
    #[serde(skip)]
    pub source: PathBuf,
}

fn default_library() -> String {
    DEFAULT_LIBRARY_STEM.to_string()
}

/// One output of the generator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetConfig {
    pub target: TargetKind,
    pub output: PathBuf,
}

impl Config {
    /// Directory relative paths in the config are resolved against.
    pub fn base_dir(&self) -> &Path {
        match self.source.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Resolve `path` against [`Config::base_dir`] unless it is absolute.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir().join(path)
        }
    }
}

/// A config whose signatures passed validation.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: Config,
    pub model: SignatureModel,
}

/// External signature lists are either a bare list or a document with a
/// `signatures` key (TOML has no top-level arrays).
#[derive(Deserialize)]
#[serde(untagged)]
enum SignatureSource {
    List(Vec<SignatureSpec>),
    Document { signatures: Vec<SignatureSpec> },
}

impl SignatureSource {
    fn into_specs(self) -> Vec<SignatureSpec> {
        match self {
            SignatureSource::List(specs) => specs,
            SignatureSource::Document { signatures } => signatures,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, GenerateError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            _ => Err(GenerateError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, GenerateError> {
        Ok(match self {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
            Format::Toml => toml::from_str(content)?,
        })
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, GenerateError> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| GenerateError::io(path, e))?;
    format.parse(&content)
}

/// Load a config from a YAML, JSON or TOML file.
///
/// The external signature list, if any, is read and appended to the inline
/// signatures.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, GenerateError> {
    let path = path.as_ref();
    let mut cfg: Config = read_document(path)?;
    cfg.source = path.to_path_buf();

    if let Some(file) = &cfg.signatures_file {
        let file = cfg.resolve(file);
        let source: SignatureSource = read_document(&file)?;
        cfg.signatures.extend(source.into_specs());
    }

    Ok(cfg)
}

/// Load a config and build its validated signature model.
///
/// Excluded signatures are dropped first. Every validation problem is
/// reported at once in [`GenerateError::Validation`].
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ValidatedConfig, GenerateError> {
    let cfg = load_config(path)?;
    validate_config(cfg)
}

/// Build the validated signature model for an already loaded config.
pub fn validate_config(cfg: Config) -> Result<ValidatedConfig, GenerateError> {
    let config_path = cfg.source.display().to_string();

    let specs: Vec<SignatureSpec> = cfg
        .signatures
        .iter()
        .filter(|spec| {
            let excluded = cfg.exclude.iter().any(|name| name == &spec.name);
            if excluded {
                SignatureExcluded {
                    signature: &spec.name,
                }
                .log();
            }
            !excluded
        })
        .cloned()
        .collect();

    let model = SignatureModel::new(specs).map_err(|errors| {
        SignatureValidationFailed {
            config_path: &config_path,
            error_count: errors.len(),
        }
        .log();
        GenerateError::Validation(errors)
    })?;

    ConfigLoaded {
        config_path: &config_path,
        signature_count: model.len(),
        target_count: cfg.targets.len(),
    }
    .log();

    Ok(ValidatedConfig { config: cfg, model })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use crate::model::ParamKind;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
version: "0.2.0"
library: flywheelBridge
targets:
  - target: rust
    output: out/bridge.rs
signatures:
  - name: GetCurrentUser
  - name: AddProject
    params:
      - { name: project, kind: data }
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.version.as_deref(), Some("0.2.0"));
        assert_eq!(cfg.library, "flywheelBridge");
        assert_eq!(cfg.targets[0].target, TargetKind::Rust);
        assert_eq!(cfg.signatures.len(), 2);
        assert_eq!(cfg.signatures[1].params[0].kind, ParamKind::Payload);
    }

    #[test]
    fn defaults_apply() {
        let cfg: Config = serde_yaml::from_str("signatures: []").unwrap();
        assert_eq!(cfg.version, None);
        assert_eq!(cfg.library, DEFAULT_LIBRARY_STEM);
        assert!(cfg.targets.is_empty());
        assert!(cfg.exclude.is_empty());
        assert_eq!(cfg.base_dir(), Path::new("."));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let yaml = "targets:\n  - target: matlab\n    output: x.m\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }

    #[test]
    fn format_follows_extension() {
        let dir = TempDir::new().unwrap();
        let json = write(
            &dir,
            "config.json",
            r#"{"version": "1.0", "signatures": [{"name": "GetUser", "params": [{"name": "id"}]}]}"#,
        );
        let toml = write(
            &dir,
            "config.toml",
            "version = \"1.0\"\n\n[[signatures]]\nname = \"GetUser\"\nparams = [{ name = \"id\" }]\n",
        );

        for path in [json, toml] {
            let cfg = load_config(&path).unwrap();
            assert_eq!(cfg.version.as_deref(), Some("1.0"));
            assert_eq!(cfg.signatures[0].params[0].name, "id");
            assert_eq!(cfg.source, path);
        }
    }

    #[test]
    fn unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.ini", "version=1");
        assert!(matches!(load_config(&path), Err(GenerateError::UnsupportedFormat(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config("/nonexistent/bridgegen.yaml").unwrap_err();
        assert!(matches!(err, GenerateError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/bridgegen.yaml"));
    }

    #[test]
    fn signatures_file_is_appended_relative_to_config() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "signatures.json",
            r#"[{"name": "GetAllUsers"}, {"name": "DeleteUser", "params": [{"name": "id"}]}]"#,
        );
        let path = write(
            &dir,
            "config.yaml",
            "signatures:\n  - name: GetCurrentUser\nsignatures_file: signatures.json\n",
        );

        let cfg = load_config(&path).unwrap();
        let names: Vec<&str> = cfg.signatures.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["GetCurrentUser", "GetAllUsers", "DeleteUser"]);
    }

    #[test]
    fn toml_signatures_file_uses_document_form() {
        let dir = TempDir::new().unwrap();
        write(&dir, "signatures.toml", "[[signatures]]\nname = \"GetConfig\"\n");
        let path = write(&dir, "config.yaml", "signatures_file: signatures.toml\n");

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.signatures[0].name, "GetConfig");
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yaml",
            r#"
exclude: [ModifyJob]
signatures:
  - name: GetJob
    params: [{ name: id }]
  - name: ModifyJob
    params: [{ name: id }, { name: job, kind: payload }]
"#,
        );

        let validated = load_and_validate_config(&path).unwrap();
        assert_eq!(validated.model.len(), 1);
        assert!(validated.model.get("ModifyJob").is_none());
        assert_eq!(validated.config.signatures.len(), 2);
    }

    #[test]
    fn test_load_and_validate_reports_every_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "config.yaml",
            r#"
signatures:
  - name: GetUser
  - name: GetUser
  - name: AddNote
    params: [{ name: id }, { name: id }]
"#,
        );

        match load_and_validate_config(&path) {
            Err(GenerateError::Validation(errors)) => {
                assert!(errors.contains(&ValidationError::DuplicateSignature {
                    name: "GetUser".to_string()
                }));
                assert!(errors.contains(&ValidationError::DuplicateParameter {
                    signature: "AddNote".to_string(),
                    parameter: "id".to_string()
                }));
            }
            other => panic!("expected validation error, got {:?}", other.map(|v| v.model.len())),
        }
    }

    #[test]
    fn resolve_keeps_absolute_paths() {
        let mut cfg: Config = serde_yaml::from_str("{}").unwrap();
        cfg.source = PathBuf::from("conf/bridge.yaml");
        assert_eq!(cfg.resolve(Path::new("out/b.rs")), PathBuf::from("conf/out/b.rs"));

        let absolute = std::env::temp_dir().join("b.rs");
        assert_eq!(cfg.resolve(&absolute), absolute);
    }
}
