// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Zip-format archives (`.jar`, `.zip`) on the classpath.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zip::result::ZipError;
use zip::ZipArchive;

use crate::descriptor::properties::decode_resource;
use crate::errors::SourceError;
use crate::traits::BundleSource;

/// A classpath entry backed by a zip-format archive.
#[derive(Debug, Clone)]
pub struct ArchiveSource {
    path: PathBuf,
    label: String,
}

impl ArchiveSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = path.display().to_string();
        Self { path, label }
    }

    fn io_error(&self, resource: &str, error: std::io::Error) -> SourceError {
        SourceError::Io {
            source_label: self.label.clone(),
            resource: resource.to_string(),
            error,
        }
    }
}

impl BundleSource for ArchiveSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn read_descriptor(&self, resource: &str) -> Result<Option<String>, SourceError> {
        let file = File::open(&self.path).map_err(|error| self.io_error(resource, error))?;
        let mut archive = ZipArchive::new(file).map_err(|error| SourceError::Archive {
            source_label: self.label.clone(),
            resource: resource.to_string(),
            error,
        })?;

        let mut bytes = Vec::new();
        match archive.by_name(resource) {
            Ok(mut entry) => {
                entry
                    .read_to_end(&mut bytes)
                    .map_err(|error| self.io_error(resource, error))?;
            }
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(error) => {
                return Err(SourceError::Archive {
                    source_label: self.label.clone(),
                    resource: resource.to_string(),
                    error,
                })
            }
        }

        Ok(Some(decode_resource(bytes)))
    }
}
