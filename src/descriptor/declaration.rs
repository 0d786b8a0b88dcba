// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// One processor declared by a descriptor resource.
///
/// # Fields
/// * `name` - Unique within its descriptor, used only for error messages
/// * `path` - Opaque identity of the processor handed to the transformation engine
/// * `consumes` - The single capability this processor consumes
/// * `produces` - Capabilities this processor produces, in declared order, no duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorDeclaration {
    pub name: String,
    pub path: String,
    pub consumes: String,
    pub produces: Vec<String>,
}

/// The validated contents of one descriptor resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleDescriptor {
    /// Label of the classpath entry the descriptor was read from.
    pub source: String,
    /// Declarations in order of first appearance of their name.
    pub declarations: Vec<ProcessorDeclaration>,
}

impl BundleDescriptor {
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }
}
