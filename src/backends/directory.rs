// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Plain directories (e.g. compiled class output) on the classpath.

use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::properties::decode_resource;
use crate::errors::SourceError;
use crate::traits::BundleSource;

/// A classpath entry backed by a directory tree.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    label: String,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let label = root.display().to_string();
        Self { root, label }
    }

    fn resolve(&self, resource: &str) -> PathBuf {
        resource
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl BundleSource for DirectorySource {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_descriptor(&self, resource: &str) -> Result<Option<String>, SourceError> {
        let path = self.resolve(resource);
        if !path.is_file() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|error| SourceError::Io {
            source_label: self.label.clone(),
            resource: resource.to_string(),
            error,
        })?;

        Ok(Some(decode_resource(bytes)))
    }
}
