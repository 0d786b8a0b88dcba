// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Decoding of descriptor resources into validated processor declarations.
//!
//! A descriptor uses a single dotted namespace:
//!
//! ```text
//! processor.<name>.path     = <opaque processor path>
//! processor.<name>.consumes = <capability>
//! processor.<name>.produces = <capability>[, <capability> ...]
//! ```
//!
//! # Validation Pipeline
//!
//! 1. **Key recognition**: every key must match one of the three namespaces
//! 2. **Duplicate detection**: one `path` and one `consumes` per name, no
//!    capability produced twice
//! 3. **Completeness**: `path` and `consumes` come in pairs and `produces`
//!    requires a `path`
//!
//! Any failure rejects the whole descriptor; no declarations are returned.

use std::collections::HashMap;

use crate::config::consts::PROCESSOR_KEY_PREFIX;
use crate::descriptor::properties::parse_properties;
use crate::descriptor::{BundleDescriptor, ProcessorDeclaration};
use crate::errors::DescriptorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Path,
    Consumes,
    Produces,
}

/// Split `processor.<name>.<field>` into its name and field.
fn parse_key(key: &str) -> Option<(&str, Field)> {
    let mut parts = key.split('.');
    let prefix = parts.next()?;
    let name = parts.next()?;
    let field = parts.next()?;
    if parts.next().is_some() || prefix != PROCESSOR_KEY_PREFIX || name.is_empty() {
        return None;
    }
    let field = match field {
        "path" => Field::Path,
        "consumes" => Field::Consumes,
        "produces" => Field::Produces,
        _ => return None,
    };
    Some((name, field))
}

/// Per-source maps built while reading one descriptor.
#[derive(Default)]
struct DescriptorTables {
    order: Vec<String>,
    path: HashMap<String, String>,
    consumes: HashMap<String, String>,
    produces: HashMap<String, Vec<String>>,
}

impl DescriptorTables {
    fn note(&mut self, name: &str) {
        if !self.order.iter().any(|known| known == name) {
            self.order.push(name.to_string());
        }
    }
}

/// Parse and validate one descriptor resource.
///
/// # Arguments
/// * `source` - Label of the classpath entry, used in every error message
/// * `text` - Raw descriptor content
///
/// # Examples
/// ```
/// use spoon_graph::descriptor::parse_descriptor;
///
/// let text = "processor.Foo.path = p.Foo\nprocessor.Foo.consumes = alpha\n";
/// let descriptor = parse_descriptor("bundle1.jar", text).unwrap();
/// assert_eq!(descriptor.declarations[0].path, "p.Foo");
/// ```
pub fn parse_descriptor(source: &str, text: &str) -> Result<BundleDescriptor, DescriptorError> {
    let properties = parse_properties(text).map_err(|error| DescriptorError::Syntax {
        source_label: source.to_string(),
        error,
    })?;

    let mut tables = DescriptorTables::default();

    for property in properties {
        let (name, field) =
            parse_key(&property.key).ok_or_else(|| DescriptorError::UnrecognizedProperty {
                source_label: source.to_string(),
                key: property.key.clone(),
                line: property.line,
            })?;

        match field {
            Field::Path | Field::Consumes => {
                if property.value.is_empty() {
                    return Err(DescriptorError::EmptyValue {
                        source_label: source.to_string(),
                        key: property.key.clone(),
                        line: property.line,
                    });
                }
                let table = match field {
                    Field::Path => &mut tables.path,
                    _ => &mut tables.consumes,
                };
                if let Some(previous) = table.get(name) {
                    let (name, source_label, line, value, previous) = (
                        name.to_string(),
                        source.to_string(),
                        property.line,
                        property.value.clone(),
                        previous.clone(),
                    );
                    return Err(match field {
                        Field::Path => DescriptorError::DuplicatePath {
                            name,
                            source_label,
                            line,
                            value,
                            previous,
                        },
                        _ => DescriptorError::DuplicateConsumes {
                            name,
                            source_label,
                            line,
                            value,
                            previous,
                        },
                    });
                }
                table.insert(name.to_string(), property.value.clone());
            }
            Field::Produces => {
                let list = tables.produces.entry(name.to_string()).or_default();
                for item in property.value.split(',') {
                    let capability = item.trim();
                    if capability.is_empty() {
                        continue;
                    }
                    if list.iter().any(|known| known == capability) {
                        return Err(DescriptorError::DuplicateProduce {
                            name: name.to_string(),
                            source_label: source.to_string(),
                            line: property.line,
                            capability: capability.to_string(),
                        });
                    }
                    list.push(capability.to_string());
                }
            }
        }

        tables.note(name);
    }

    validate_completeness(source, &tables)?;

    let declarations = tables
        .order
        .iter()
        .filter_map(|name| {
            let path = tables.path.get(name)?;
            let consumes = tables.consumes.get(name)?;
            Some(ProcessorDeclaration {
                name: name.clone(),
                path: path.clone(),
                consumes: consumes.clone(),
                produces: tables.produces.get(name).cloned().unwrap_or_default(),
            })
        })
        .collect();

    Ok(BundleDescriptor {
        source: source.to_string(),
        declarations,
    })
}

/// Every path has a consumes and vice versa; every produces has a path.
fn validate_completeness(source: &str, tables: &DescriptorTables) -> Result<(), DescriptorError> {
    for name in &tables.order {
        if tables.path.contains_key(name) && !tables.consumes.contains_key(name) {
            return Err(DescriptorError::PathWithoutConsumes {
                name: name.clone(),
                source_label: source.to_string(),
            });
        }
    }
    for name in &tables.order {
        if tables.consumes.contains_key(name) && !tables.path.contains_key(name) {
            return Err(DescriptorError::ConsumesWithoutPath {
                name: name.clone(),
                source_label: source.to_string(),
            });
        }
    }
    for name in &tables.order {
        if tables.produces.contains_key(name) && !tables.path.contains_key(name) {
            return Err(DescriptorError::ProducesWithoutPath {
                name: name.clone(),
                source_label: source.to_string(),
            });
        }
    }
    Ok(())
}
