// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for classpath scanning.
//!
//! This module contains message types for logging events related to:
//! * Classpath entries that are skipped
//! * Descriptor resources found and parsed
//! * Scan completion

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A classpath entry was skipped without error.
///
/// # Log Level
/// `debug!` - Expected condition, useful when diagnosing a classpath
///
/// # Example
/// ```
/// use spoon_graph::observability::messages::scan::EntrySkipped;
///
/// let msg = EntrySkipped {
///     entry: "libs/missing.jar",
///     reason: "does not exist",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct EntrySkipped<'a> {
    pub entry: &'a str,
    pub reason: &'a str,
}

impl Display for EntrySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping classpath entry '{}': {}", self.entry, self.reason)
    }
}

impl StructuredLog for EntrySkipped<'_> {
    fn log(&self) {
        tracing::debug!(entry = self.entry, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "entry_skipped",
            span_name = name,
            entry = self.entry,
            reason = self.reason,
        )
    }
}

/// A descriptor resource was read and parsed.
///
/// # Log Level
/// `debug!` - Per-source detail
pub struct DescriptorLoaded<'a> {
    pub source: &'a str,
    pub processor_count: usize,
}

impl Display for DescriptorLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded descriptor from '{}': {} processors",
            self.source, self.processor_count
        )
    }
}

impl StructuredLog for DescriptorLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            source = self.source,
            processor_count = self.processor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "descriptor_loaded",
            span_name = name,
            source = self.source,
            processor_count = self.processor_count,
        )
    }
}

/// Every classpath entry has been visited.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ScanCompleted {
    pub entry_count: usize,
    pub descriptor_count: usize,
}

impl Display for ScanCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Scanned {} classpath entries: {} descriptors found",
            self.entry_count, self.descriptor_count
        )
    }
}

impl StructuredLog for ScanCompleted {
    fn log(&self) {
        tracing::info!(
            entry_count = self.entry_count,
            descriptor_count = self.descriptor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "scan_completed",
            span_name = name,
            entry_count = self.entry_count,
            descriptor_count = self.descriptor_count,
        )
    }
}
