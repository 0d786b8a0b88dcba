// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;     // classpath entry sources
pub mod config;       // resolver config
pub mod descriptor;   // descriptor resources
pub mod engine;       // registry + ordering
pub mod errors;       // error handling
pub mod observability;
pub mod traits;       // unified abstractions
