//! # Secrets Manager Credentials
//!
//! Configuration and secret-path resolution for the AWS Secrets Manager
//! credential backend of a build pipeline orchestrator.
//!
//! Before any secret is fetched this crate answers two questions:
//!
//! 1. **Is the backend enabled and consistent?** [`Manager::is_configured`]
//!    and [`Manager::validate`] check the region, the explicit credential
//!    triple, and the three path templates.
//! 2. **Where does a secret live?** [`Manager::lookup_factory`] validates
//!    once and returns the parsed templates as [`SecretLookupPaths`]. Its
//!    `lookup_paths` gives one [`SecretLookupPath`] per scope (pipeline,
//!    team, shared), each of which renders the exact key to query for a
//!    secret name.
//!
//! ## Templates
//!
//! Templates are literal text with `{{.Field}}` placeholders and nothing
//! else. Each scope may only reference its own variables:
//!
//! - shared: `Secret`
//! - team: `Team`, `Secret`
//! - pipeline: `Team`, `Pipeline`, `Secret`
//!
//! ```rust
//! use secretsmanager_creds::Manager;
//!
//! let manager = Manager::new("eu-west-1");
//! let lookup = manager.lookup_factory()?;
//!
//! let paths = lookup.lookup_paths("main", Some("deploy"));
//! assert_eq!(
//!     paths[0].variable_to_secret_path("db-password")?,
//!     "/concourse/main/deploy/db-password"
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod manager;
pub mod scope;
pub mod template;
pub mod validation;

pub use error::{ConfigError, TemplateError};
pub use lookup::{SecretLookupPath, SecretLookupPaths};
pub use manager::{AwsCredentials, Manager, ManagerSummary};
pub use scope::{Scope, Variable};
pub use template::{SecretTemplate, TemplateContext, Token};
