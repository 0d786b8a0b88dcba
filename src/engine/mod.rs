// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod processor_resolver;
pub mod registry;
pub mod resolver;
#[cfg(test)]
mod integration_tests;

pub use processor_resolver::{ProcessorOrder, ProcessorResolver};
pub use registry::{GraphRegistry, Origin};
pub use resolver::resolve;
