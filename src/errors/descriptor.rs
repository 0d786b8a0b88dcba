// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while reading and validating a single descriptor resource.
//!
//! Every variant names the source (the classpath entry label) so that a
//! failure can be traced back to the bundle that carried it.

use thiserror::Error;

/// Errors from the line-oriented key/value reader.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertiesError {
    /// A `\u` escape was not followed by four hexadecimal digits.
    #[error("Malformed \\uXXXX escape on line {line}")]
    MalformedUnicodeEscape { line: usize },
}

/// Errors that reject a descriptor resource as a whole.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    #[error("Descriptor in file '{source_label}' could not be read: {error}")]
    Syntax {
        source_label: String,
        error: PropertiesError,
    },

    #[error("Property '{key}' in file '{source_label}' (line {line}) is not recognized")]
    UnrecognizedProperty {
        source_label: String,
        key: String,
        line: usize,
    },

    #[error("Property '{key}' in file '{source_label}' (line {line}) has an empty value")]
    EmptyValue {
        source_label: String,
        key: String,
        line: usize,
    },

    #[error("Processor '{name}' in file '{source_label}' (line {line}) gives duplicate path '{value}' and '{previous}'")]
    DuplicatePath {
        name: String,
        source_label: String,
        line: usize,
        value: String,
        previous: String,
    },

    #[error("Processor '{name}' in file '{source_label}' (line {line}) gives duplicate consume '{value}' and '{previous}'")]
    DuplicateConsumes {
        name: String,
        source_label: String,
        line: usize,
        value: String,
        previous: String,
    },

    #[error("Processor '{name}' in file '{source_label}' (line {line}) gives two times the same produce '{capability}'")]
    DuplicateProduce {
        name: String,
        source_label: String,
        line: usize,
        capability: String,
    },

    #[error("Processor '{name}' in file '{source_label}' has a path but no consumes")]
    PathWithoutConsumes { name: String, source_label: String },

    #[error("Processor '{name}' in file '{source_label}' has a consumes but no path")]
    ConsumesWithoutPath { name: String, source_label: String },

    #[error("Processor '{name}' in file '{source_label}' has a produces but no path")]
    ProducesWithoutPath { name: String, source_label: String },
}
