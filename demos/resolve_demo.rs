// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;

use spoon_graph::engine::ProcessorResolver;

/// Demo: two bundles on a classpath, one producing what the other consumes.
fn run_resolve_demo() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Processor Order Demo ===\n");

    let root = std::env::temp_dir().join("spoon-graph-demo");
    let producer = root.join("producer");
    let consumer = root.join("consumer");
    for (dir, text) in [
        (
            &producer,
            "processor.Types.path = eb2501.TypeProcessor\n\
             processor.Types.consumes = type\n\
             processor.Types.produces = typeref\n",
        ),
        (
            &consumer,
            "processor.Refs.path = eb2501.TypeRefProcessor\n\
             processor.Refs.consumes = typeref\n",
        ),
    ] {
        fs::create_dir_all(dir.join("META-INF"))?;
        fs::write(dir.join("META-INF/spoon-bundle.properties"), text)?;
    }

    // Consumer first on the classpath; the producer must still run first.
    let classpath = [consumer, root.join("missing.jar"), producer];
    println!("Classpath: {:?}", classpath);

    let order = ProcessorResolver::default().resolve_classpath(&classpath)?;
    for (i, path) in order.iter().enumerate() {
        println!("  {}. {}", i + 1, path);
    }

    fs::remove_dir_all(&root)?;
    Ok(())
}

fn main() {
    if let Err(e) = run_resolve_demo() {
        eprintln!("Demo failed: {}", e);
        std::process::exit(1);
    }
}
