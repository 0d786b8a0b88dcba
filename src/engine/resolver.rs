// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Topological ordering of registered processors.
//!
//! The produces map is read as a directed graph over capabilities: an edge
//! `A -> B` means the processor consuming `A` also produces `B`, so it must
//! run before the processor consuming `B`.
//!
//! # Algorithm
//!
//! Depth-first search with an explicit stack and three marks per capability:
//! - **Unvisited**: not in the marks map
//! - **InProgress**: on the current DFS path
//! - **Done**: fully explored, processor already emitted
//!
//! A capability's processor is emitted once all of its produced capabilities
//! are done; the emitted list is reversed at the end, which places every
//! producer ahead of its consumers. Reaching an in-progress capability again
//! means the produces edges form a cycle.
//!
//! Start nodes are visited in registration order and produced capabilities
//! in declared order, so the result is deterministic for a given classpath.

use std::collections::HashMap;
use std::time::Instant;

use crate::config::OrphanPolicy;
use crate::engine::GraphRegistry;
use crate::errors::ResolveError;
use crate::observability::messages::resolver::{
    CyclicProducesDetected, OrphanCapabilityIgnored, ResolutionCompleted, ResolutionStarted,
};
use crate::observability::messages::StructuredLog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Order the processors of `registry` so that producers precede consumers.
///
/// # Errors
/// * `CyclicProduces` - the produces edges contain a cycle; the reported
///   path starts and ends with the same capability
/// * `OrphanProduce` - only with `OrphanPolicy::Reject`, when a produced
///   capability has no consumer
pub fn resolve(registry: &GraphRegistry, policy: OrphanPolicy) -> Result<Vec<String>, ResolveError> {
    let start_msg = ResolutionStarted {
        capability_count: registry.len(),
    };

    let span = start_msg.span("resolve");
    let _guard = span.enter();
    start_msg.log();

    let started = Instant::now();

    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut emitted: Vec<String> = Vec::with_capacity(registry.len());

    for start in registry.capabilities() {
        if marks.contains_key(start) {
            continue;
        }

        // (capability, index of the next produced capability to visit)
        let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
        marks.insert(start, Mark::InProgress);

        while let Some(frame) = stack.last_mut() {
            let (capability, next) = *frame;
            let produces = registry.produces_of(capability);

            if next >= produces.len() {
                stack.pop();
                marks.insert(capability, Mark::Done);
                if let Some(path) = registry.consumer_of(capability) {
                    emitted.push(path.to_string());
                }
                continue;
            }

            frame.1 += 1;
            let child = produces[next].as_str();

            match marks.get(child).copied() {
                Some(Mark::Done) => {}
                Some(Mark::InProgress) => {
                    let cycle = cycle_path(&stack, child);
                    CyclicProducesDetected { cycle: &cycle }.log();
                    return Err(ResolveError::CyclicProduces { cycle });
                }
                None if registry.consumer_of(child).is_none() => {
                    let producer = registry.consumer_of(capability).unwrap_or(capability);
                    match policy {
                        OrphanPolicy::Ignore => {
                            OrphanCapabilityIgnored {
                                capability: child,
                                producer,
                            }
                            .log();
                            marks.insert(child, Mark::Done);
                        }
                        OrphanPolicy::Reject => {
                            return Err(ResolveError::OrphanProduce {
                                capability: child.to_string(),
                                producer: producer.to_string(),
                            });
                        }
                    }
                }
                None => {
                    marks.insert(child, Mark::InProgress);
                    stack.push((child, 0));
                }
            }
        }
    }

    emitted.reverse();

    ResolutionCompleted {
        processor_count: emitted.len(),
        duration: started.elapsed(),
    }
    .log();

    Ok(emitted)
}

/// The DFS path from `repeated` to the top of the stack, closed with `repeated`.
fn cycle_path(stack: &[(&str, usize)], repeated: &str) -> Vec<String> {
    let start = stack
        .iter()
        .position(|(capability, _)| *capability == repeated)
        .unwrap_or(0);
    let mut cycle: Vec<String> = stack[start..]
        .iter()
        .map(|(capability, _)| capability.to_string())
        .collect();
    cycle.push(repeated.to_string());
    cycle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{BundleDescriptor, ProcessorDeclaration};

    /// Build a registry with one source per declaration: (path, consumes, produces).
    fn registry(declarations: &[(&str, &str, &[&str])]) -> GraphRegistry {
        let mut registry = GraphRegistry::new();
        for (index, (path, consumes, produces)) in declarations.iter().enumerate() {
            registry
                .merge(&BundleDescriptor {
                    source: format!("bundle{}.jar", index),
                    declarations: vec![ProcessorDeclaration {
                        name: format!("P{}", index),
                        path: path.to_string(),
                        consumes: consumes.to_string(),
                        produces: produces.iter().map(|s| s.to_string()).collect(),
                    }],
                })
                .unwrap();
        }
        registry
    }

    fn position(order: &[String], path: &str) -> usize {
        order.iter().position(|p| p == path).unwrap()
    }

    #[test]
    fn test_empty_registry() {
        let order = resolve(&GraphRegistry::new(), OrphanPolicy::Ignore).unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_producer_precedes_consumer() {
        let registry = registry(&[("p.Foo", "alpha", &["beta"]), ("p.Bar", "beta", &[])]);
        let order = resolve(&registry, OrphanPolicy::Ignore).unwrap();
        assert_eq!(order, vec!["p.Foo", "p.Bar"]);
    }

    #[test]
    fn test_consumer_registered_first_still_runs_last() {
        let registry = registry(&[("p.Bar", "beta", &[]), ("p.Foo", "alpha", &["beta"])]);
        let order = resolve(&registry, OrphanPolicy::Ignore).unwrap();
        assert_eq!(order, vec!["p.Foo", "p.Bar"]);
    }

    #[test]
    fn test_linear_chain() {
        let registry = registry(&[
            ("p.C", "gamma", &[]),
            ("p.B", "beta", &["gamma"]),
            ("p.A", "alpha", &["beta"]),
        ]);
        let order = resolve(&registry, OrphanPolicy::Ignore).unwrap();
        assert_eq!(order, vec!["p.A", "p.B", "p.C"]);
    }

    #[test]
    fn test_diamond() {
        let registry = registry(&[
            ("p.A", "alpha", &["beta", "gamma"]),
            ("p.B", "beta", &["delta"]),
            ("p.C", "gamma", &["delta"]),
            ("p.D", "delta", &[]),
        ]);
        let order = resolve(&registry, OrphanPolicy::Ignore).unwrap();

        assert_eq!(order.len(), 4);
        let (a, b, c, d) = (
            position(&order, "p.A"),
            position(&order, "p.B"),
            position(&order, "p.C"),
            position(&order, "p.D"),
        );
        assert!(a < b && a < c);
        assert!(b < d && c < d);
    }

    #[test]
    fn test_every_processor_appears_once() {
        let registry = registry(&[
            ("p.A", "alpha", &["beta"]),
            ("p.B", "beta", &[]),
            ("p.X", "xi", &[]),
            ("p.Y", "upsilon", &["beta", "xi"]),
        ]);
        let mut order = resolve(&registry, OrphanPolicy::Ignore).unwrap();
        order.sort();
        assert_eq!(order, vec!["p.A", "p.B", "p.X", "p.Y"]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let declarations: &[(&str, &str, &[&str])] = &[
            ("p.A", "alpha", &["beta", "gamma"]),
            ("p.B", "beta", &[]),
            ("p.C", "gamma", &[]),
            ("p.D", "delta", &[]),
            ("p.E", "epsilon", &["delta"]),
        ];
        let first = resolve(&registry(declarations), OrphanPolicy::Ignore).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve(&registry(declarations), OrphanPolicy::Ignore).unwrap(), first);
        }
    }

    #[test]
    fn test_self_produce_is_a_cycle() {
        let registry = registry(&[("p.Foo", "alpha", &["alpha"])]);
        match resolve(&registry, OrphanPolicy::Ignore) {
            Err(ResolveError::CyclicProduces { cycle }) => assert_eq!(cycle, vec!["alpha", "alpha"]),
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_cycle_reports_path() {
        let registry = registry(&[
            ("p.A", "alpha", &["beta"]),
            ("p.B", "beta", &["gamma"]),
            ("p.C", "gamma", &["delta"]),
            ("p.D", "delta", &["beta"]),
        ]);
        let error = resolve(&registry, OrphanPolicy::Ignore).unwrap_err();
        match &error {
            ResolveError::CyclicProduces { cycle } => {
                assert_eq!(cycle, &vec!["beta", "gamma", "delta", "beta"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
        assert_eq!(
            error.to_string(),
            "Cyclic produces detected: beta -> gamma -> delta -> beta"
        );
    }

    #[test]
    fn test_orphan_ignored() {
        let registry = registry(&[("p.Foo", "alpha", &["gamma"])]);
        let order = resolve(&registry, OrphanPolicy::Ignore).unwrap();
        assert_eq!(order, vec!["p.Foo"]);
    }

    #[test]
    fn test_orphan_rejected() {
        let registry = registry(&[("p.Foo", "alpha", &["gamma"])]);
        match resolve(&registry, OrphanPolicy::Reject) {
            Err(ResolveError::OrphanProduce { capability, producer }) => {
                assert_eq!(capability, "gamma");
                assert_eq!(producer, "p.Foo");
            }
            other => panic!("expected orphan error, got {:?}", other),
        }
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let capabilities: Vec<String> = (0..20_000).map(|i| format!("cap{}", i)).collect();
        let mut registry = GraphRegistry::new();
        for (index, capability) in capabilities.iter().enumerate() {
            let produces = capabilities.get(index + 1).cloned().into_iter().collect();
            registry
                .merge(&BundleDescriptor {
                    source: "chain".into(),
                    declarations: vec![ProcessorDeclaration {
                        name: format!("P{}", index),
                        path: format!("p.{}", index),
                        consumes: capability.clone(),
                        produces,
                    }],
                })
                .unwrap();
        }

        let order = resolve(&registry, OrphanPolicy::Ignore).unwrap();
        assert_eq!(order.len(), 20_000);
        assert_eq!(order.first().map(String::as_str), Some("p.0"));
        assert_eq!(order.last().map(String::as_str), Some("p.19999"));
    }
}
