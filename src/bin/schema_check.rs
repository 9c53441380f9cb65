//! Section Schema Checker CLI
//!
//! Validates the `{% schema %}` block of one template, warning on a missing
//! `name` and pointing at the failing line. Every outcome is reported; the
//! process always exits successfully.

use std::path::PathBuf;

use clap::Parser;
use theme_tools::{render, validate_file, ReportStyle, ToolsConfig, ValidationOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-check")]
#[command(about = "Check a section's schema block and explain failures")]
struct Cli {
    /// Template to check (default from config: "sections/mobile-bar.liquid")
    file: Option<PathBuf>,

    /// Config file layered over the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let file = match cli.file {
        Some(file) => file,
        None => match ToolsConfig::load_from(cli.config.as_deref()) {
            Ok(config) => config.validate.file,
            Err(e) => {
                println!("System Error: {}", e);
                return;
            }
        },
    };

    let outcome = validate_file(&file, ValidationOptions::deep());
    for line in render(&file, &outcome, ReportStyle::Deep) {
        println!("{}", line);
    }
}
