// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

/// Newtype wrapper for the capability graph providing type safety.
///
/// Nodes are capabilities. An edge `A -> B` means the processor consuming
/// `A` also produces `B`. Edge lists keep their declared order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProducesGraph(pub HashMap<String, Vec<String>>);

impl ProducesGraph {
    /// Create a new empty capability graph
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Record the capabilities produced by the consumer of `capability`
    pub fn add_produces(&mut self, capability: String, produces: Vec<String>) {
        self.0.insert(capability, produces);
    }

    /// Capabilities produced by the consumer of `capability`
    pub fn get_produces(&self, capability: &str) -> &[String] {
        self.0.get(capability).map(Vec::as_slice).unwrap_or(&[])
    }
}
