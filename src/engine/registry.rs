// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Global processor registry for one resolution run.
//!
//! The registry merges the declarations of every descriptor found on the
//! classpath into three maps:
//!
//! * `consumer_of`: capability → path of the processor consuming it
//! * `capability_of`: processor path → the capability it consumes
//! * `produces_of`: capability → capabilities produced by its consumer
//!
//! `consumer_of` and `capability_of` always form a bijection. Each merge checks
//! a whole descriptor before recording anything, so a rejected descriptor
//! leaves the registry exactly as it was.

use std::collections::HashMap;

use crate::config::ProducesGraph;
use crate::descriptor::{BundleDescriptor, ProcessorDeclaration};
use crate::errors::RegistryError;
use crate::observability::messages::registry::{DescriptorMerged, MergeRejected};
use crate::observability::messages::StructuredLog;

/// Where a registered capability came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub name: String,
    pub path: String,
    pub source: String,
}

#[derive(Debug, Clone, Default)]
pub struct GraphRegistry {
    consumer_of: HashMap<String, String>,
    capability_of: HashMap<String, String>,
    produces_of: ProducesGraph,
    origins: HashMap<String, Origin>,
    // consumed capabilities in registration order
    order: Vec<String>,
}

impl GraphRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one validated descriptor.
    ///
    /// Fails with `PathAlreadyDefined` when a declaration's path is already
    /// registered under another capability, and with `ConsumesAlreadyDefined`
    /// when its capability already has a consumer. Declarations of the same
    /// descriptor are checked against each other as well as against earlier
    /// merges.
    pub fn merge(&mut self, descriptor: &BundleDescriptor) -> Result<(), RegistryError> {
        if let Err(error) = self.check(descriptor) {
            MergeRejected {
                source: &descriptor.source,
                error: &error,
            }
            .log();
            return Err(error);
        }

        for declaration in &descriptor.declarations {
            self.record(&descriptor.source, declaration);
        }

        DescriptorMerged {
            source: &descriptor.source,
            processor_count: descriptor.len(),
            registered_total: self.len(),
        }
        .log();

        Ok(())
    }

    fn check(&self, descriptor: &BundleDescriptor) -> Result<(), RegistryError> {
        let mut staged_paths: HashMap<&str, &ProcessorDeclaration> = HashMap::new();
        let mut staged_capabilities: HashMap<&str, &ProcessorDeclaration> = HashMap::new();
        let source = descriptor.source.as_str();

        for declaration in &descriptor.declarations {
            if let Some(previous_capability) = self.capability_of.get(&declaration.path) {
                if *previous_capability != declaration.consumes {
                    let origin = self.origin(previous_capability);
                    return Err(RegistryError::PathAlreadyDefined {
                        name: declaration.name.clone(),
                        source_label: source.to_string(),
                        path: declaration.path.clone(),
                        previous_name: origin.name,
                        previous_source: origin.source,
                        previous_capability: previous_capability.clone(),
                    });
                }
            }
            if let Some(previous) = staged_paths.get(declaration.path.as_str()) {
                return Err(RegistryError::PathAlreadyDefined {
                    name: declaration.name.clone(),
                    source_label: source.to_string(),
                    path: declaration.path.clone(),
                    previous_name: previous.name.clone(),
                    previous_source: source.to_string(),
                    previous_capability: previous.consumes.clone(),
                });
            }

            if self.consumer_of.contains_key(&declaration.consumes) {
                let origin = self.origin(&declaration.consumes);
                return Err(RegistryError::ConsumesAlreadyDefined {
                    name: declaration.name.clone(),
                    source_label: source.to_string(),
                    capability: declaration.consumes.clone(),
                    previous_name: origin.name,
                    previous_source: origin.source,
                    previous_path: origin.path,
                });
            }
            if let Some(previous) = staged_capabilities.get(declaration.consumes.as_str()) {
                return Err(RegistryError::ConsumesAlreadyDefined {
                    name: declaration.name.clone(),
                    source_label: source.to_string(),
                    capability: declaration.consumes.clone(),
                    previous_name: previous.name.clone(),
                    previous_source: source.to_string(),
                    previous_path: previous.path.clone(),
                });
            }

            staged_paths.insert(&declaration.path, declaration);
            staged_capabilities.insert(&declaration.consumes, declaration);
        }

        Ok(())
    }

    fn record(&mut self, source: &str, declaration: &ProcessorDeclaration) {
        let capability = declaration.consumes.clone();
        self.consumer_of.insert(capability.clone(), declaration.path.clone());
        self.capability_of.insert(declaration.path.clone(), capability.clone());
        self.produces_of
            .add_produces(capability.clone(), declaration.produces.clone());
        self.origins.insert(
            capability.clone(),
            Origin {
                name: declaration.name.clone(),
                path: declaration.path.clone(),
                source: source.to_string(),
            },
        );
        self.order.push(capability);
    }

    fn origin(&self, capability: &str) -> Origin {
        self.origins.get(capability).cloned().unwrap_or_else(|| Origin {
            name: String::new(),
            path: self.consumer_of.get(capability).cloned().unwrap_or_default(),
            source: String::new(),
        })
    }

    /// Path of the processor consuming `capability`.
    pub fn consumer_of(&self, capability: &str) -> Option<&str> {
        self.consumer_of.get(capability).map(String::as_str)
    }

    /// Capability consumed by the processor at `path`.
    pub fn capability_of(&self, path: &str) -> Option<&str> {
        self.capability_of.get(path).map(String::as_str)
    }

    /// Capabilities produced by the consumer of `capability`, in declared order.
    pub fn produces_of(&self, capability: &str) -> &[String] {
        self.produces_of.get_produces(capability)
    }

    pub fn origin_of(&self, capability: &str) -> Option<&Origin> {
        self.origins.get(capability)
    }

    /// Consumed capabilities in the order they were registered.
    pub fn capabilities(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered processors.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
