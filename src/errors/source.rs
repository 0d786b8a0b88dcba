// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for reading descriptor resources out of classpath entries.

use thiserror::Error;

/// Failure to read a descriptor resource that exists in a classpath entry.
///
/// Missing entries and entries without a descriptor are not errors; these
/// variants only cover a present, matching resource that could not be read.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("I/O error reading '{resource}' from '{source_label}': {error}")]
    Io {
        source_label: String,
        resource: String,
        #[source]
        error: std::io::Error,
    },

    #[error("Archive error reading '{resource}' from '{source_label}': {error}")]
    Archive {
        source_label: String,
        resource: String,
        #[source]
        error: zip::result::ZipError,
    },
}
