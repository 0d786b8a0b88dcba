// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ARCHIVE_EXTENSIONS, DESCRIPTOR_PATH};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for one resolution run.
///
/// Only `classpath` carries per-build data; the remaining fields tune how
/// classpath entries are recognized and how strict the resolver is. The
/// config is normally loaded from a YAML or TOML file.
///
/// # Fields
/// * `classpath` - Ordered classpath entries (archives or directories)
/// * `descriptor_path` - Relative path of the descriptor inside each entry
/// * `archive_extensions` - Extensions (case-insensitive) read as zip archives
/// * `orphan_policy` - What to do with a produced capability nobody consumes
///
/// # Example
/// ```yaml
/// classpath:
///   - libs/bundle1.jar
///   - build/classes/main
/// orphan_policy: reject
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ResolverConfig {
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
    #[serde(default = "default_descriptor_path")]
    pub descriptor_path: String,
    #[serde(default = "default_archive_extensions")]
    pub archive_extensions: Vec<String>,
    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            classpath: Vec::new(),
            descriptor_path: default_descriptor_path(),
            archive_extensions: default_archive_extensions(),
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

impl ResolverConfig {
    /// Options used by the classpath scanner.
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            descriptor_path: self.descriptor_path.clone(),
            archive_extensions: self
                .archive_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }
}

/// Treatment of a produced capability that has no consuming processor.
///
/// # Variants
/// * `Ignore` - The capability is visited but contributes no processor
/// * `Reject` - Resolution fails with an orphan-produce error
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrphanPolicy {
    #[default]
    Ignore,
    Reject,
}

/// How classpath entries are inspected for a descriptor resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    pub descriptor_path: String,
    pub archive_extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ResolverConfig::default().scan_options()
    }
}

impl ScanOptions {
    /// Whether `path` names an archive by its extension.
    pub fn is_archive(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                self.archive_extensions.iter().any(|known| *known == ext)
            })
            .unwrap_or(false)
    }
}

fn default_descriptor_path() -> String {
    DESCRIPTOR_PATH.to_string()
}

fn default_archive_extensions() -> Vec<String> {
    DEFAULT_ARCHIVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

/// Load a config from a YAML or TOML file, chosen by extension.
///
/// Files ending in `.toml` are parsed as TOML; everything else as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ResolverConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|error| ConfigError::Io {
        path: path.to_path_buf(),
        error,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content).map_err(|error| ConfigError::Toml {
            path: path.to_path_buf(),
            error,
        })
    } else {
        serde_yaml::from_str(&content).map_err(|error| ConfigError::Yaml {
            path: path.to_path_buf(),
            error,
        })
    }
}

/// Load and validate a config file.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<ResolverConfig, ConfigError> {
    let cfg = load_config(path)?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Check the fields that `serde` cannot reject on its own.
pub fn validate_config(cfg: &ResolverConfig) -> Result<(), ConfigError> {
    let descriptor = cfg.descriptor_path.trim();
    if descriptor.is_empty() {
        return Err(ConfigError::Invalid("descriptor_path must not be empty".into()));
    }
    if descriptor.starts_with('/') || Path::new(descriptor).is_absolute() {
        return Err(ConfigError::Invalid(format!(
            "descriptor_path '{}' must be relative to the classpath entry",
            descriptor
        )));
    }
    if cfg.archive_extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
        return Err(ConfigError::Invalid(
            "archive_extensions must name at least one extension".into(),
        ));
    }
    Ok(())
}
