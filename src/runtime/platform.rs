// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Platform resolution: operating-system identifier to library filename.
//!
//! Identifiers are matched by prefix so both Rust's `std::env::consts::OS`
//! values (`linux`, `macos`, `freebsd`, `windows`) and Python's `sys.platform`
//! values (`linux2`, `darwin`, `freebsd12`, `win32`, `cygwin`) resolve.
//! Windows and unrecognized systems get the `.so` extension. That is a guess,
//! not a guarantee; unrecognized systems are reported with a warning.

use crate::observability::messages::runtime::PlatformFallback;
use crate::observability::messages::StructuredLog;

/// Operating-system families with a known library naming rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
    /// Linux, Android and the BSDs
    Linux,
    /// macOS and iOS
    Apple,
    /// Windows and Cygwin
    Windows,
}

impl PlatformFamily {
    /// Identifier prefixes belonging to each family, in match order.
    pub const PREFIXES: &'static [(PlatformFamily, &'static [&'static str])] = &[
        (
            PlatformFamily::Linux,
            &["linux", "android", "freebsd", "openbsd", "netbsd", "dragonfly"],
        ),
        (PlatformFamily::Apple, &["darwin", "macos", "ios"]),
        (PlatformFamily::Windows, &["win", "cygwin"]),
    ];

    pub fn detect(os: &str) -> Option<PlatformFamily> {
        let os = os.to_ascii_lowercase();
        Self::PREFIXES
            .iter()
            .find(|(_, prefixes)| prefixes.iter().any(|p| os.starts_with(p)))
            .map(|(family, _)| *family)
    }

    /// Extension used by libraries built for this family, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            PlatformFamily::Linux => "so",
            PlatformFamily::Apple => "dylib",
            PlatformFamily::Windows => FALLBACK_EXTENSION,
        }
    }
}

/// Extension assumed for Windows and for any unrecognized system.
pub const FALLBACK_EXTENSION: &str = "so";

/// How a filename was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Known(PlatformFamily),
    /// The system was not recognized; the filename is a best-effort guess.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLibrary {
    pub filename: String,
    pub resolution: Resolution,
}

impl ResolvedLibrary {
    pub fn is_fallback(&self) -> bool {
        self.resolution == Resolution::Fallback
    }
}

/// Identifier of the operating system this process runs on.
pub fn current_os() -> &'static str {
    std::env::consts::OS
}

/// Resolve the library filename for `stem` on the system identified by `os`.
pub fn library_filename(stem: &str, os: &str) -> ResolvedLibrary {
    match PlatformFamily::detect(os) {
        Some(family) => ResolvedLibrary {
            filename: format!("{}.{}", stem, family.extension()),
            resolution: Resolution::Known(family),
        },
        None => {
            let filename = format!("{}.{}", stem, FALLBACK_EXTENSION);
            PlatformFallback {
                os,
                filename: &filename,
            }
            .log();
            ResolvedLibrary {
                filename,
                resolution: Resolution::Fallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apple() {
        let resolved = library_filename("flywheelBridge", "darwin");
        assert_eq!(resolved.filename, "flywheelBridge.dylib");
        assert_eq!(resolved.resolution, Resolution::Known(PlatformFamily::Apple));
        assert_eq!(library_filename("b", "macos").filename, "b.dylib");
    }

    #[test]
    fn linux_family_shares_extension() {
        assert_eq!(library_filename("b", "linux").filename, "b.so");
        assert_eq!(library_filename("b", "linux2").filename, "b.so");
        assert_eq!(library_filename("b", "freebsd").filename, "b.so");
        assert_eq!(library_filename("b", "freebsd12").filename, "b.so");
        assert_eq!(
            library_filename("b", "freebsd").resolution,
            Resolution::Known(PlatformFamily::Linux)
        );
    }

    #[test]
    fn windows_uses_default_extension() {
        let resolved = library_filename("b", "win32");
        assert_eq!(resolved.filename, format!("b.{}", FALLBACK_EXTENSION));
        assert_eq!(resolved.resolution, Resolution::Known(PlatformFamily::Windows));
    }

    #[test]
    fn unknown_falls_back_observably() {
        let resolved = library_filename("b", "plan9");
        assert_eq!(resolved.filename, format!("b.{}", FALLBACK_EXTENSION));
        assert!(resolved.is_fallback());
    }

    #[test]
    fn current_os_resolves() {
        let resolved = library_filename("b", current_os());
        assert!(resolved.filename.starts_with("b."));
    }
}
