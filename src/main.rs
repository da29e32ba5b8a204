//! # Secrets Manager Credentials CLI
//!
//! Checks a Secrets Manager backend configuration the same way the
//! orchestrator does at startup, and shows where a secret would be looked up.
//!
//! ```bash
//! # Validate configuration from flags / environment
//! secretsmanager-creds --aws-region eu-west-1 check
//!
//! # Show lookup paths for a pipeline secret, most specific first
//! secretsmanager-creds --config creds.yaml paths --team main --pipeline deploy db-password
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secretsmanager_creds::config::{load_manager, ManagerArgs};
use secretsmanager_creds::constants::DEFAULT_LOG_FILTER;
use secretsmanager_creds::{Manager, SecretLookupPaths};
use std::path::PathBuf;
use tracing::{info, warn};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("BUILD_GIT_HASH"),
    ", built ",
    env!("BUILD_DATETIME"),
    ")"
);

/// Validate AWS Secrets Manager credential configuration and resolve lookup paths
#[derive(Parser)]
#[command(name = "secretsmanager-creds", version = VERSION, long_version = LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML configuration file; flags and environment variables take precedence
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    manager: ManagerArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and print a summary as JSON
    Check,
    /// Print the lookup path for a secret at every scope, most specific first
    Paths {
        /// Team that owns the pipeline
        #[arg(long)]
        team: String,

        /// Pipeline name; omit for team-level lookups only
        #[arg(long)]
        pipeline: Option<String>,

        /// Logical secret name
        #[arg(value_name = "SECRET")]
        secret: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let manager = load_manager(cli.config.as_deref(), cli.manager)?;
    let lookup = ensure_ready(&manager)?;

    match cli.command {
        Commands::Check => {
            let summary = serde_json::to_string_pretty(&manager.summary())
                .context("Failed to serialize configuration summary")?;
            println!("{summary}");
        }
        Commands::Paths {
            team,
            pipeline,
            secret,
        } => {
            for path in lookup.lookup_paths(&team, pipeline.as_deref()) {
                let key = path
                    .variable_to_secret_path(&secret)
                    .with_context(|| format!("Failed to render {} lookup path", path.scope()))?;
                println!("{}\t{key}", path.scope());
            }
        }
    }

    Ok(())
}

/// Refuse to continue unless the backend is configured and valid
fn ensure_ready(manager: &Manager) -> Result<SecretLookupPaths> {
    if !manager.is_configured() {
        warn!("no AWS region set, Secrets Manager backend is not configured");
        anyhow::bail!("Secrets Manager backend is not configured: set --aws-region");
    }

    let lookup = manager
        .lookup_factory()
        .context("Invalid Secrets Manager configuration")?;
    info!(region = %manager.aws_region, "Secrets Manager backend ready");
    Ok(lookup)
}
