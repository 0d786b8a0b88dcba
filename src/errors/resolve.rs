// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Top-level error for one resolution run.

use crate::errors::{DescriptorError, RegistryError, SourceError};
use thiserror::Error;

/// Any fatal condition that aborts a resolution run.
///
/// Resolution is fail-fast: the first error ends the run and no partial
/// processor order is returned.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The produces edges between capabilities form a cycle.
    #[error("Cyclic produces detected: {}", .cycle.join(" -> "))]
    CyclicProduces { cycle: Vec<String> },

    /// A produced capability has no consuming processor on the classpath.
    #[error("Capability '{capability}' produced by '{producer}' has no consuming processor")]
    OrphanProduce { capability: String, producer: String },
}
