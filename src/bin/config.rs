//! Theme Tools Config CLI
//!
//! Shows the effective configuration or writes a starter file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use theme_tools::config::CONFIG_FILE;
use theme_tools::ToolsConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "theme-config")]
#[command(about = "Inspect or initialise theme-tools configuration")]
struct Cli {
    /// Config file layered over the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as TOML
    Show,

    /// Write the default configuration
    Init {
        /// Destination file
        #[arg(default_value = CONFIG_FILE)]
        path: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
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
    match cli.command {
        Commands::Show => {
            let config = ToolsConfig::load_from(cli.config.as_deref())?;
            print!("{}", config.to_toml()?);
        }
        Commands::Init { path, force } => {
            ToolsConfig::default().save(&path, force)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
