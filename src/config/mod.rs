// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod produces_graph;
pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, validate_config, OrphanPolicy, ResolverConfig,
    ScanOptions,
};
pub use produces_graph::ProducesGraph;
