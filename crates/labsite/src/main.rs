//! labsite CLI - emit and check the workshop lab site configuration.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "labsite")]
#[command(about = "Navigation descriptor for the workshop lab documentation site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in workshop descriptor to the config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Emit the config in the generator's format
    Emit {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Module)]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report nav/sidebar drift and malformed entries
    Check,

    /// Print the nav bar, sidebar and social links with resolved routes
    Show,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// JSON object
    Json,
    /// TypeScript config module
    Module,
}

impl From<OutputFormat> for labsite_config::Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => labsite_config::Format::Json,
            OutputFormat::Module => labsite_config::Format::Module,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Emit { format, output } => {
            commands::emit::run(&cli.config, format.into(), output)?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
        Commands::Show => {
            commands::show::run(&cli.config)?;
        }
    }

    Ok(())
}
