//! Schema Validator CLI
//!
//! Reports whether a template's `{% schema %}` block is valid JSON. A file
//! that cannot be read is reported on stderr with a non-zero exit.

use std::path::PathBuf;

use clap::Parser;
use theme_tools::{render, validate_file, ReportStyle, ValidationOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schema-validate")]
#[command(about = "Check that a template's schema block is valid JSON")]
struct Cli {
    /// Template to validate
    #[arg(default_value = "theme/sections/mobile-nav.liquid")]
    file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let outcome = validate_file(&cli.file, ValidationOptions::basic());
    let failed = matches!(&outcome, Err(e) if e.is_system());

    for line in render(&cli.file, &outcome, ReportStyle::Basic) {
        if failed {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    if failed {
        std::process::exit(1);
    }
}
