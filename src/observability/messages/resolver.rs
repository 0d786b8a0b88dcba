// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor ordering.
//!
//! This module contains message types for logging events related to:
//! * Resolution lifecycle (start, completion)
//! * Cyclic produces detection
//! * Produced capabilities with no consumer

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Ordering started over the registered capabilities.
///
/// # Log Level
/// `debug!` - Lifecycle detail
pub struct ResolutionStarted {
    pub capability_count: usize,
}

impl Display for ResolutionStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Ordering processors for {} consumed capabilities", self.capability_count)
    }
}

impl StructuredLog for ResolutionStarted {
    fn log(&self) {
        tracing::debug!(capability_count = self.capability_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "resolution",
            span_name = name,
            capability_count = self.capability_count,
        )
    }
}

/// Ordering finished.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use spoon_graph::observability::messages::resolver::ResolutionCompleted;
/// use std::time::Duration;
///
/// let msg = ResolutionCompleted {
///     processor_count: 4,
///     duration: Duration::from_millis(3),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ResolutionCompleted {
    pub processor_count: usize,
    pub duration: Duration,
}

impl Display for ResolutionCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved {} processors in {:?}",
            self.processor_count, self.duration
        )
    }
}

impl StructuredLog for ResolutionCompleted {
    fn log(&self) {
        tracing::info!(
            processor_count = self.processor_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "resolution_completed",
            span_name = name,
            processor_count = self.processor_count,
            duration = ?self.duration,
        )
    }
}

/// Cyclic produces detected between capabilities.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CyclicProducesDetected<'a> {
    pub cycle: &'a [String],
}

impl Display for CyclicProducesDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Cyclic produces detected: {}", self.cycle.join(" -> "))
    }
}

impl StructuredLog for CyclicProducesDetected<'_> {
    fn log(&self) {
        tracing::error!(
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "cyclic_produces",
            span_name = name,
            cycle = self.cycle.join(" -> "),
            cycle_length = self.cycle.len(),
        )
    }
}

/// A produced capability has no consumer and contributes no processor.
///
/// # Log Level
/// `warn!` - Possibly a missing bundle on the classpath
pub struct OrphanCapabilityIgnored<'a> {
    pub capability: &'a str,
    pub producer: &'a str,
}

impl Display for OrphanCapabilityIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Capability '{}' produced by '{}' has no consumer; ignoring",
            self.capability, self.producer
        )
    }
}

impl StructuredLog for OrphanCapabilityIgnored<'_> {
    fn log(&self) {
        tracing::warn!(
            capability = self.capability,
            producer = self.producer,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "orphan_capability",
            span_name = name,
            capability = self.capability,
            producer = self.producer,
        )
    }
}
