// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod descriptor;
mod registry;
mod resolve;
mod source;

pub use config::ConfigError;
pub use descriptor::{DescriptorError, PropertiesError};
pub use registry::RegistryError;
pub use resolve::ResolveError;
pub use source::SourceError;
