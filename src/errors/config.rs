// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading or validating a resolver configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {error}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Failed to parse YAML config '{}': {error}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        error: serde_yaml::Error,
    },

    #[error("Failed to parse TOML config '{}': {error}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        error: toml::de::Error,
    },

    #[error("Configuration validation failed: {0}")]
    Invalid(String),
}
