use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dochtml::{load_package, render, source_link_from_base, RenderOptions};

/// Render a package documentation model into HTML
#[derive(Parser, Debug)]
#[command(name = "dochtml", version)]
struct Cli {
    /// Package documentation model (JSON)
    input: PathBuf,

    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Maximum document size in bytes; 0 uses the default of 10 MB
    #[arg(long, env = "DOCHTML_LIMIT", default_value_t = 0)]
    limit: u64,

    /// Base URL that declaration positions are appended to for source links
    #[arg(long, env = "DOCHTML_SOURCE_URL")]
    source_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let package = load_package(&cli.input)?;
    let options = RenderOptions {
        source_link: cli.source_url.as_deref().map(source_link_from_base),
        limit: cli.limit,
    };

    let html = render(&package, &options)
        .with_context(|| format!("failed to render {}", cli.input.display()))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote documentation");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&html)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
