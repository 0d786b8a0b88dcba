// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::SourceError;

/// A classpath entry that may carry a descriptor resource.
pub trait BundleSource {
    /// Identity of the entry, used in log lines and error messages.
    fn label(&self) -> &str;

    /// Read the resource at `resource` (a `/`-separated relative path).
    ///
    /// Returns `Ok(None)` when the entry has no such resource. Failing to read
    /// a resource that is present is an error.
    fn read_descriptor(&self, resource: &str) -> Result<Option<String>, SourceError>;
}
