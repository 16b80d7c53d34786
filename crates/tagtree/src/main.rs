//! tagtree CLI - browse the HTML element catalogue and render blueprints.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tagtree")]
#[command(about = "HTML element catalogue and tree renderer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to tagtree.toml config file
    #[arg(short, long, default_value = "tagtree.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalogue entries
    List {
        /// Only void elements
        #[arg(long)]
        void: bool,

        /// Only obsolete elements
        #[arg(long)]
        obsolete: bool,
    },

    /// Show one element by constructor name or tag
    Show {
        /// Constructor name (e.g. "Anchor") or tag (e.g. "a")
        name: String,
    },

    /// Check void flags against the HTML standard
    Audit,

    /// Render a JSON or YAML blueprint to HTML
    Render {
        /// Blueprint file (.json, .yaml, .yml)
        input: PathBuf,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty print output
        #[arg(long)]
        pretty: bool,

        /// Close void elements XHTML-style (`<br />`)
        #[arg(long)]
        xhtml: bool,

        /// Omit the doctype
        #[arg(long)]
        fragment: bool,
    },

    /// Write a starter config and blueprint
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
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

    let config = config::load_config(&cli.config)?;

    match cli.command {
        Commands::List { void, obsolete } => {
            commands::list::run(&config, void, obsolete);
        }
        Commands::Show { name } => {
            commands::show::run(&config, &name)?;
        }
        Commands::Audit => {
            commands::audit::run()?;
        }
        Commands::Render {
            input,
            output,
            pretty,
            xhtml,
            fragment,
        } => {
            let overrides = commands::render::Overrides {
                pretty,
                xhtml,
                fragment,
            };
            commands::render::run(&config, &input, output.as_deref(), overrides).await?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
    }

    Ok(())
}
