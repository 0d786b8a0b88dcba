// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;

use crate::backends::{ArchiveSource, DirectorySource};
use crate::config::ScanOptions;
use crate::observability::messages::scan::EntrySkipped;
use crate::observability::messages::StructuredLog;
use crate::traits::BundleSource;

/// Factory for turning classpath entries into bundle sources
pub struct SourceFactory;

impl SourceFactory {
    /// Pick the source implementation for a classpath entry.
    ///
    /// - missing entry -> `None`
    /// - file with an archive extension -> `ArchiveSource`
    /// - directory -> `DirectorySource`
    /// - anything else -> `None`
    pub fn from_entry(entry: &Path, options: &ScanOptions) -> Option<Box<dyn BundleSource>> {
        let label = entry.display().to_string();

        if !entry.exists() {
            EntrySkipped {
                entry: &label,
                reason: "does not exist",
            }
            .log();
            return None;
        }

        if entry.is_file() && options.is_archive(entry) {
            return Some(Box::new(ArchiveSource::new(entry)));
        }

        if entry.is_dir() {
            return Some(Box::new(DirectorySource::new(entry)));
        }

        EntrySkipped {
            entry: &label,
            reason: "neither an archive nor a directory",
        }
        .log();
        None
    }
}
