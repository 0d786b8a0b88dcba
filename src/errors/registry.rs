// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Cross-source collisions detected while merging a descriptor into the registry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error(
        "Processor '{name}' in file '{source_label}' has a path '{path}' that's already been defined elsewhere \
         (processor '{previous_name}' in file '{previous_source}' consuming '{previous_capability}')"
    )]
    PathAlreadyDefined {
        name: String,
        source_label: String,
        path: String,
        previous_name: String,
        previous_source: String,
        previous_capability: String,
    },

    #[error(
        "Processor '{name}' in file '{source_label}' has a consumes '{capability}' that's already been defined elsewhere \
         (processor '{previous_name}' in file '{previous_source}' with path '{previous_path}')"
    )]
    ConsumesAlreadyDefined {
        name: String,
        source_label: String,
        capability: String,
        previous_name: String,
        previous_source: String,
        previous_path: String,
    },
}
