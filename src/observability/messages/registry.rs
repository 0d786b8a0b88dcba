// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for graph registry merges.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A descriptor was merged into the registry.
///
/// # Log Level
/// `debug!` - Per-source detail
///
/// # Example
/// ```
/// use spoon_graph::observability::messages::registry::DescriptorMerged;
///
/// let msg = DescriptorMerged {
///     source: "libs/bundle1.jar",
///     processor_count: 2,
///     registered_total: 5,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct DescriptorMerged<'a> {
    pub source: &'a str,
    pub processor_count: usize,
    pub registered_total: usize,
}

impl Display for DescriptorMerged<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Merged {} processors from '{}' ({} registered)",
            self.processor_count, self.source, self.registered_total
        )
    }
}

impl StructuredLog for DescriptorMerged<'_> {
    fn log(&self) {
        tracing::debug!(
            source = self.source,
            processor_count = self.processor_count,
            registered_total = self.registered_total,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "descriptor_merged",
            span_name = name,
            source = self.source,
            processor_count = self.processor_count,
            registered_total = self.registered_total,
        )
    }
}

/// A descriptor collided with an earlier one and was rejected.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct MergeRejected<'a> {
    pub source: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for MergeRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rejected descriptor from '{}': {}", self.source, self.error)
    }
}

impl StructuredLog for MergeRejected<'_> {
    fn log(&self) {
        tracing::error!(
            source = self.source,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "merge_rejected",
            span_name = name,
            source = self.source,
            error = %self.error,
        )
    }
}
