//! # Credential Validation
//!
//! Checks that the optional access key, secret key and session token form a
//! usable combination.

use crate::error::ConfigError;

/// Validate the explicit AWS credential triple
///
/// Presence means a non-empty string. Legal combinations are:
/// - nothing set (fall back to ambient credentials such as an instance role)
/// - access key and secret key, with or without a session token
///
/// Anything else cannot authenticate and is almost always a partial paste or
/// a value split across two configuration sources.
///
/// # Errors
/// Returns [`ConfigError::PartialCredentials`] naming the missing half when
/// only part of the triple is set.
pub fn validate_credentials(
    access_key_id: &str,
    secret_access_key: &str,
    session_token: &str,
) -> Result<(), ConfigError> {
    match (
        access_key_id.is_empty(),
        secret_access_key.is_empty(),
        session_token.is_empty(),
    ) {
        (true, true, true) | (false, false, _) => Ok(()),
        (true, true, false) => Err(ConfigError::PartialCredentials(
            "session token set without an access key and secret key",
        )),
        (false, true, _) => Err(ConfigError::PartialCredentials(
            "access key set without a secret key",
        )),
        (true, false, _) => Err(ConfigError::PartialCredentials(
            "secret key set without an access key",
        )),
    }
}
