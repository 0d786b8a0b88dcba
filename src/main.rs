// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use spoon_graph::config::{load_and_validate_config, OrphanPolicy, ResolverConfig};
use spoon_graph::engine::ProcessorResolver;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: spoon-graph [--config <file.yaml|file.toml>] [--json] [--strict] [ENTRY ...]";

/// Command line options, parsed by hand like the rest of the project's tools.
struct CliArgs {
    config: Option<PathBuf>,
    json: bool,
    strict: bool,
    help: bool,
    entries: Vec<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs {
        config: None,
        json: false,
        strict: false,
        help: false,
        entries: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = iter.next().context("--config requires a file argument")?;
                cli.config = Some(PathBuf::from(value));
            }
            "--json" => cli.json = true,
            "--strict" => cli.strict = true,
            "--help" | "-h" => cli.help = true,
            flag if flag.starts_with("--") => bail!("Unknown option '{}'\n{}", flag, USAGE),
            entry => cli.entries.push(PathBuf::from(entry)),
        }
    }

    Ok(cli)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load config '{}'", path.display()))?,
        None => ResolverConfig::default(),
    };
    config.classpath.extend(cli.entries);
    if cli.strict {
        config.orphan_policy = OrphanPolicy::Reject;
    }

    if config.classpath.is_empty() {
        bail!("No classpath entries given\n{}", USAGE);
    }

    let order = ProcessorResolver::from_config(&config)
        .resolve_classpath(&config.classpath)
        .context("Failed to resolve processor order")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&order.0)?);
    } else {
        for path in order.iter() {
            println!("{}", path);
        }
    }

    Ok(())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
