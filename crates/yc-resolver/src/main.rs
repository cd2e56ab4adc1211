//! yc-resolve: print import metadata for yc-design-vue components

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yc_resolver::{ComponentResolver, Exclude, ResolverOptions, YcDesignResolver};

#[derive(Parser)]
#[command(name = "yc-resolve")]
#[command(about = "Resolve yc-design-vue component identifiers", long_about = None)]
#[command(version)]
struct Cli {
    /// Component identifiers, e.g. YcSelect
    #[arg(required = true)]
    names: Vec<String>,

    /// Options file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exclude a component by short name (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Exclude components matching a regular expression (repeatable)
    #[arg(long)]
    exclude_pattern: Vec<String>,

    /// Do not emit stylesheet side effects
    #[arg(long)]
    no_side_effects: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// `RUST_LOG` directives when set and valid, `warn` otherwise
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = match &cli.config {
        Some(path) => ResolverOptions::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ResolverOptions::default(),
    };
    for name in cli.exclude {
        options.add_exclude(name);
    }
    for pattern in &cli.exclude_pattern {
        options.add_exclude(Exclude::pattern(pattern)?);
    }
    if cli.no_side_effects {
        options.side_effect = false;
    }

    let resolver = YcDesignResolver::new(options);
    let mut resolved = Vec::with_capacity(cli.names.len());
    for name in &cli.names {
        match resolver.resolve(name) {
            Some(info) => resolved.push(info),
            None => tracing::warn!("{} was not resolved", name),
        }
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };
    println!("{}", output);

    Ok(())
}
