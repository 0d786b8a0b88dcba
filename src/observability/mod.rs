// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for the diagnostic and
//! operational logging emitted while a classpath is resolved. Message types
//! follow a struct-based pattern with a `Display` implementation so that log
//! text lives in one place instead of being scattered as string literals.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::scan` - Classpath entries and descriptor resources
//! * `messages::registry` - Descriptor merges into the graph registry
//! * `messages::resolver` - Ordering of processors
//!
//! # Usage
//!
//! ```rust
//! use spoon_graph::observability::messages::scan::DescriptorLoaded;
//! use spoon_graph::observability::messages::StructuredLog;
//!
//! let msg = DescriptorLoaded {
//!     source: "libs/bundle1.jar",
//!     processor_count: 2,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
