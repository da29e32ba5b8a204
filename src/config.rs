//! # Configuration Loading
//!
//! Populates a [`Manager`] from an optional YAML file and from command-line
//! flags, each of which may also come from an environment variable.
//!
//! Precedence is flag or environment variable, then file, then the built-in
//! default. Templates missing from every source take the defaults in
//! [`crate::constants`]. An explicitly empty value is kept so that
//! `Manager::validate` can reject it.

use crate::constants::{
    ENV_ACCESS_KEY, ENV_PIPELINE_SECRET_TEMPLATE, ENV_REGION, ENV_SECRET_KEY, ENV_SESSION_TOKEN,
    ENV_SHARED_SECRET_TEMPLATE, ENV_TEAM_SECRET_TEMPLATE,
};
use crate::manager::Manager;
use anyhow::{Context, Result};
use clap::Args;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

/// Flags for the Secrets Manager credential backend
#[derive(Debug, Clone, Default, Args)]
pub struct ManagerArgs {
    /// AWS region to send Secrets Manager requests to
    #[arg(long = "aws-region", env = ENV_REGION)]
    pub aws_region: Option<String>,

    /// AWS access key ID (omit to use ambient credentials)
    #[arg(long = "aws-access-key", env = ENV_ACCESS_KEY)]
    pub aws_access_key_id: Option<String>,

    /// AWS secret access key
    #[arg(long = "aws-secret-key", env = ENV_SECRET_KEY, hide_env_values = true)]
    pub aws_secret_access_key: Option<String>,

    /// AWS session token, only used together with an access key and secret key
    #[arg(long = "aws-session-token", env = ENV_SESSION_TOKEN, hide_env_values = true)]
    pub aws_session_token: Option<String>,

    /// Lookup template for pipeline-scoped secrets
    #[arg(long, env = ENV_PIPELINE_SECRET_TEMPLATE)]
    pub pipeline_secret_template: Option<String>,

    /// Lookup template for team-scoped secrets
    #[arg(long, env = ENV_TEAM_SECRET_TEMPLATE)]
    pub team_secret_template: Option<String>,

    /// Lookup template for secrets shared across teams
    #[arg(long, env = ENV_SHARED_SECRET_TEMPLATE)]
    pub shared_secret_template: Option<String>,
}

impl ManagerArgs {
    /// Overwrite every field of `manager` that was given on the command line
    pub fn apply(self, manager: &mut Manager) {
        if let Some(secret) = self.aws_secret_access_key {
            manager.aws_secret_access_key = Zeroizing::new(secret);
        }
        if let Some(token) = self.aws_session_token {
            manager.aws_session_token = Zeroizing::new(token);
        }

        let overrides = [
            (self.aws_region, &mut manager.aws_region),
            (self.aws_access_key_id, &mut manager.aws_access_key_id),
            (
                self.pipeline_secret_template,
                &mut manager.pipeline_secret_template,
            ),
            (self.team_secret_template, &mut manager.team_secret_template),
            (
                self.shared_secret_template,
                &mut manager.shared_secret_template,
            ),
        ];

        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Parse a YAML configuration file into a manager
///
/// Keys that are absent take their defaults; unknown keys are rejected.
///
/// # Errors
/// Fails when the file cannot be read, is not valid YAML, contains an
/// unknown key, or gives a key a value of the wrong type.
pub fn load_manager_file(path: &Path) -> Result<Manager> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "configuration file is empty, using defaults");
        return Ok(Manager::new(""));
    }

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file {}", path.display()))
}

/// Build the manager from an optional file plus command-line overrides
///
/// The result is not validated.
///
/// # Errors
/// Fails only when `file` is given and [`load_manager_file`] fails on it.
pub fn load_manager(file: Option<&Path>, args: ManagerArgs) -> Result<Manager> {
    let mut manager = match file {
        Some(path) => load_manager_file(path)?,
        None => Manager::new(""),
    };

    args.apply(&mut manager);
    debug!(?manager, "loaded secrets manager configuration");
    Ok(manager)
}
