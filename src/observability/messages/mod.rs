// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! `StructuredLog` to emit itself with typed `tracing` fields at the level
//! documented on the type.

use tracing::Span;

pub mod registry;
pub mod resolver;
pub mod scan;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Open a span carrying the same fields as the event.
    fn span(&self, name: &str) -> Span;
}
