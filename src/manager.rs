//! # Secrets Manager Configuration
//!
//! The configuration aggregate for the AWS Secrets Manager credential
//! backend.
//!
//! A `Manager` is populated once by the configuration loader, validated once
//! at startup with [`Manager::lookup_factory`] (or [`Manager::validate`] when
//! only the verdict is needed), and from then on only read. Both
//! [`Manager::is_configured`] and [`Manager::validate`] are pure functions of
//! the fields, so a validated manager can be shared across threads freely.
//!
//! The secret access key and session token are held in [`Zeroizing`]
//! buffers, so every copy of a manager wipes them when it is dropped.

use crate::constants::{
    DEFAULT_PIPELINE_SECRET_TEMPLATE, DEFAULT_SHARED_SECRET_TEMPLATE, DEFAULT_TEAM_SECRET_TEMPLATE,
};
use crate::error::ConfigError;
use crate::lookup::SecretLookupPaths;
use crate::scope::Scope;
use crate::validation::{validate_credentials, validate_template};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Credential backend configuration
///
/// `Default` is the zero value: every field empty. Use [`Manager::new`] to
/// start from the built-in templates.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct Manager {
    /// Region of the secret store. A non-empty region is the only signal that
    /// this backend is in use.
    #[serde(default)]
    pub aws_region: String,

    #[serde(default)]
    pub aws_access_key_id: String,

    #[serde(default)]
    pub aws_secret_access_key: Zeroizing<String>,

    #[serde(default)]
    pub aws_session_token: Zeroizing<String>,

    #[serde(default = "default_pipeline_secret_template")]
    pub pipeline_secret_template: String,

    #[serde(default = "default_team_secret_template")]
    pub team_secret_template: String,

    #[serde(default = "default_shared_secret_template")]
    pub shared_secret_template: String,
}

fn default_pipeline_secret_template() -> String {
    DEFAULT_PIPELINE_SECRET_TEMPLATE.to_string()
}

fn default_team_secret_template() -> String {
    DEFAULT_TEAM_SECRET_TEMPLATE.to_string()
}

fn default_shared_secret_template() -> String {
    DEFAULT_SHARED_SECRET_TEMPLATE.to_string()
}

impl Manager {
    /// Manager for `region` with the default templates and no explicit credentials
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            aws_region: region.into(),
            pipeline_secret_template: default_pipeline_secret_template(),
            team_secret_template: default_team_secret_template(),
            shared_secret_template: default_shared_secret_template(),
            ..Self::default()
        }
    }

    /// Whether this backend should be registered at all
    ///
    /// Only the region matters. Without explicit keys the store may still be
    /// reachable through ambient credentials.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.aws_region.is_empty()
    }

    /// The template configured for `scope`
    #[must_use]
    pub fn template_for(&self, scope: Scope) -> &str {
        match scope {
            Scope::Shared => &self.shared_secret_template,
            Scope::Team => &self.team_secret_template,
            Scope::Pipeline => &self.pipeline_secret_template,
        }
    }

    /// Check the credential triple, then the pipeline, team and shared
    /// templates, stopping at the first violation
    ///
    /// # Errors
    /// Returns the [`ConfigError`] for the first failed check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lookup_factory().map(drop)
    }

    /// Validate like [`Manager::validate`] and keep the parsed templates
    ///
    /// The returned [`SecretLookupPaths`] builds per-build lookup paths
    /// without parsing or checking the templates again.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] for the first failed check.
    pub fn lookup_factory(&self) -> Result<SecretLookupPaths, ConfigError> {
        validate_credentials(
            &self.aws_access_key_id,
            &self.aws_secret_access_key,
            &self.aws_session_token,
        )?;
        debug!(
            explicit = self.has_explicit_credentials(),
            "credential combination accepted"
        );

        let pipeline = validate_template(&self.pipeline_secret_template, Scope::Pipeline)?;
        let team = validate_template(&self.team_secret_template, Scope::Team)?;
        let shared = validate_template(&self.shared_secret_template, Scope::Shared)?;

        info!(region = %self.aws_region, "secrets manager configuration validated");
        Ok(SecretLookupPaths::new(pipeline, team, shared))
    }

    #[must_use]
    pub fn has_explicit_credentials(&self) -> bool {
        !self.aws_access_key_id.is_empty() && !self.aws_secret_access_key.is_empty()
    }

    /// Explicit credentials, or `None` when ambient credentials should be used
    #[must_use]
    pub fn credentials(&self) -> Option<AwsCredentials> {
        self.has_explicit_credentials().then(|| AwsCredentials {
            access_key_id: self.aws_access_key_id.clone(),
            secret_access_key: self.aws_secret_access_key.as_str().to_owned(),
            session_token: (!self.aws_session_token.is_empty())
                .then(|| self.aws_session_token.as_str().to_owned()),
        })
    }

    /// Operator-facing view of the configuration without key material
    #[must_use]
    pub fn summary(&self) -> ManagerSummary {
        ManagerSummary {
            aws_region: self.aws_region.clone(),
            configured: self.is_configured(),
            explicit_credentials: self.has_explicit_credentials(),
            session_token: !self.aws_session_token.is_empty(),
            pipeline_secret_template: self.pipeline_secret_template.clone(),
            team_secret_template: self.team_secret_template.clone(),
            shared_secret_template: self.shared_secret_template.clone(),
        }
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("aws_region", &self.aws_region)
            .field("aws_access_key_id", &self.aws_access_key_id)
            .field("aws_secret_access_key", &redact(&self.aws_secret_access_key))
            .field("aws_session_token", &redact(&self.aws_session_token))
            .field("pipeline_secret_template", &self.pipeline_secret_template)
            .field("team_secret_template", &self.team_secret_template)
            .field("shared_secret_template", &self.shared_secret_template)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

/// Explicit key material handed to the secret-fetch client
///
/// Wiped from memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[REDACTED]")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Serializable summary printed by the `check` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerSummary {
    pub aws_region: String,
    pub configured: bool,
    pub explicit_credentials: bool,
    pub session_token: bool,
    pub pipeline_secret_template: String,
    pub team_secret_template: String,
    pub shared_secret_template: String,
}
