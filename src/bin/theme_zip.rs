//! Theme Archive CLI
//!
//! Packs a theme directory into a zip suitable for uploading to Shopify.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use theme_tools::{archive_directory, verify_archive, ArchiveOptions, ToolsConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "theme-zip")]
#[command(about = "Zip a theme directory for upload")]
struct Cli {
    /// Theme directory (default from config: "theme")
    source: Option<PathBuf>,

    /// Output archive (default from config: "theme_fixed.zip")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compression level: 0 stores files, 1-9 deflates
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(0..=9))]
    level: Option<i64>,

    /// Config file layered over the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reopen the archive and check every entry after writing
    #[arg(long)]
    verify: bool,

    /// List archived entries
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ToolsConfig::load_from(cli.config.as_deref()).context("loading configuration")?;

    let source = cli.source.unwrap_or(config.archive.source_dir.clone());
    let output = cli.output.unwrap_or(config.archive.output.clone());
    let options = match cli.level {
        Some(level) => ArchiveOptions {
            compression_level: Some(level),
        },
        None => config.archive.options()?,
    };

    let summary = archive_directory(&source, &output, options)
        .with_context(|| format!("archiving {}", source.display()))?;

    if cli.verbose {
        for entry in &summary.entries {
            println!("  {} ({} bytes)", entry.name, entry.size);
        }
        println!(
            "  {} files, {} bytes",
            summary.entries.len(),
            summary.total_bytes()
        );
    }

    if cli.verify {
        verify_archive(&summary).context("verifying archive")?;
        println!("Verified {} entries.", summary.entries.len());
    }

    println!("Created {} successfully.", output.display());
    Ok(())
}
