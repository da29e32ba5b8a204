//! # Constants
//!
//! Built-in defaults and environment variable names used by the
//! configuration loader.
//!
//! The validator never reads these. A template left unset by the loader is
//! pre-populated with the matching default before `Manager::validate` runs.

/// Default lookup template for pipeline-scoped secrets
pub const DEFAULT_PIPELINE_SECRET_TEMPLATE: &str = "/concourse/{{.Team}}/{{.Pipeline}}/{{.Secret}}";

/// Default lookup template for team-scoped secrets
pub const DEFAULT_TEAM_SECRET_TEMPLATE: &str = "/concourse/{{.Team}}/{{.Secret}}";

/// Default lookup template for secrets shared by every team
pub const DEFAULT_SHARED_SECRET_TEMPLATE: &str = "/concourse/{{.Secret}}";

/// Environment variable for the Secrets Manager region
pub const ENV_REGION: &str = "SECRETSMANAGER_REGION";

/// Environment variable for the explicit access key ID
pub const ENV_ACCESS_KEY: &str = "SECRETSMANAGER_ACCESS_KEY";

/// Environment variable for the explicit secret access key
pub const ENV_SECRET_KEY: &str = "SECRETSMANAGER_SECRET_KEY";

/// Environment variable for the optional session token
pub const ENV_SESSION_TOKEN: &str = "SECRETSMANAGER_SESSION_TOKEN";

/// Environment variable overriding the pipeline secret template
pub const ENV_PIPELINE_SECRET_TEMPLATE: &str = "SECRETSMANAGER_PIPELINE_SECRET_TEMPLATE";

/// Environment variable overriding the team secret template
pub const ENV_TEAM_SECRET_TEMPLATE: &str = "SECRETSMANAGER_TEAM_SECRET_TEMPLATE";

/// Environment variable overriding the shared secret template
pub const ENV_SHARED_SECRET_TEMPLATE: &str = "SECRETSMANAGER_SHARED_SECRET_TEMPLATE";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "secretsmanager_creds=info";
