// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Descriptor resources: the `.properties`-style metadata a classpath entry
//! carries to declare its processors.

mod declaration;
mod parser;
pub mod properties;

pub use declaration::{BundleDescriptor, ProcessorDeclaration};
pub use parser::parse_descriptor;
