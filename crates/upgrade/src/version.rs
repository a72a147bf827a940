//! Resolution of the locally installed plugin version.

use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

/// Last-resort version when neither the embedded identifier nor the
/// manifest yields anything usable.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Resolves the current version from, in order: the embedded package
/// identifier, a structured parse of the manifest file, a regex scan of the
/// manifest text, and finally [`DEFAULT_VERSION`]. Resolution never fails.
#[derive(Debug, Clone, Default)]
pub struct VersionResolver {
    embedded: Option<String>,
    manifest_path: Option<PathBuf>,
}

impl VersionResolver {
    pub fn new(embedded: Option<String>) -> Self {
        Self {
            embedded,
            manifest_path: None,
        }
    }

    /// Compiled-in version identifier, normally `env!("CARGO_PKG_VERSION")`.
    pub fn embedded(version: &str) -> Self {
        Self::new(Some(version.to_string()))
    }

    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn resolve(&self) -> String {
        if let Some(version) = &self.embedded
            && !version.trim().is_empty()
        {
            return version.clone();
        }

        if let Some(path) = &self.manifest_path
            && let Ok(content) = std::fs::read_to_string(path)
        {
            if let Some(version) = parse_manifest_version(&content) {
                return version;
            }
            if let Some(version) = scan_manifest_version(&content) {
                debug!(path = %path.display(), "manifest parsed via regex fallback");
                return version;
            }
        }

        DEFAULT_VERSION.to_string()
    }
}

/// Structured parse: `version` under `[package]` or `[project]`.
fn parse_manifest_version(content: &str) -> Option<String> {
    let value: toml::Value = content.parse().ok()?;
    for table in ["package", "project"] {
        if let Some(version) = value
            .get(table)
            .and_then(|t| t.get("version"))
            .and_then(|v| v.as_str())
        {
            return Some(version.to_string());
        }
    }
    None
}

/// Loose scan for a `version = "..."` assignment anywhere in the text.
fn scan_manifest_version(content: &str) -> Option<String> {
    let re = Regex::new(r#"version\s*=\s*["']([^"']+)["']"#).ok()?;
    re.captures(content)
        .map(|captures| captures[1].to_string())
}
