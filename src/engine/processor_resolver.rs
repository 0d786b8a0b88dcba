// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;

use crate::backends::ClasspathScanner;
use crate::config::{OrphanPolicy, ResolverConfig, ScanOptions};
use crate::engine::{resolve, GraphRegistry};
use crate::errors::ResolveError;

/// Newtype wrapper for the resolved processor order.
///
/// Every producer of a capability appears before the processor consuming it.
/// Processors with no produce/consume relationship have no guaranteed
/// relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessorOrder(pub Vec<String>);

impl ProcessorOrder {
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of `path` in the order, if present.
    pub fn position(&self, path: &str) -> Option<usize> {
        self.0.iter().position(|p| p == path)
    }
}

impl From<Vec<String>> for ProcessorOrder {
    fn from(order: Vec<String>) -> Self {
        Self(order)
    }
}

impl From<ProcessorOrder> for Vec<String> {
    fn from(order: ProcessorOrder) -> Self {
        order.0
    }
}

/// Resolves a classpath into an ordered processor list.
///
/// Each call builds a fresh `GraphRegistry`; nothing is shared between calls.
///
/// # Examples
/// ```no_run
/// use spoon_graph::engine::ProcessorResolver;
///
/// let resolver = ProcessorResolver::default();
/// let order = resolver.resolve_classpath(&["libs/bundle1.jar", "build/classes/main"])?;
/// for path in order.iter() {
///     println!("{}", path);
/// }
/// # Ok::<(), spoon_graph::errors::ResolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessorResolver {
    scanner: ClasspathScanner,
    orphan_policy: OrphanPolicy,
}

impl ProcessorResolver {
    pub fn new(options: ScanOptions, orphan_policy: OrphanPolicy) -> Self {
        Self {
            scanner: ClasspathScanner::new(options),
            orphan_policy,
        }
    }

    pub fn from_config(cfg: &ResolverConfig) -> Self {
        Self::new(cfg.scan_options(), cfg.orphan_policy)
    }

    /// Build the registry for `entries` without ordering it.
    pub fn build_registry<P: AsRef<Path>>(&self, entries: &[P]) -> Result<GraphRegistry, ResolveError> {
        let mut registry = GraphRegistry::new();
        self.scanner.scan(entries, |descriptor| {
            registry.merge(&descriptor)?;
            Ok(())
        })?;
        Ok(registry)
    }

    /// Scan, merge and order the processors declared on `entries`.
    ///
    /// The first error aborts the run; no partial order is returned.
    pub fn resolve_classpath<P: AsRef<Path>>(&self, entries: &[P]) -> Result<ProcessorOrder, ResolveError> {
        let span = tracing::info_span!("resolve_classpath", entry_count = entries.len());
        let _guard = span.enter();

        let registry = self.build_registry(entries)?;
        let order = resolve(&registry, self.orphan_policy)?;
        Ok(order.into())
    }
}
