//! # Template Validation
//!
//! Proves a scope's path template is non-empty, parses, and only references
//! variables that scope permits, by dry-rendering it against sample data.

use crate::error::ConfigError;
use crate::scope::Scope;
use crate::template::{SecretTemplate, TemplateContext};
use tracing::debug;

/// Validate `template` for use at `scope`
///
/// Returns the parsed template on success so callers do not parse twice.
///
/// # Errors
/// - [`ConfigError::EmptyTemplate`] when the template, or its sample render,
///   is empty
/// - [`ConfigError::MalformedTemplate`] when it does not parse
/// - [`ConfigError::ForbiddenVariable`] when it references a field the scope
///   does not expose
pub fn validate_template(template: &str, scope: Scope) -> Result<SecretTemplate, ConfigError> {
    if template.is_empty() {
        return Err(ConfigError::EmptyTemplate { scope });
    }

    let parsed =
        SecretTemplate::parse(template).map_err(|e| ConfigError::from_template(scope, e))?;

    let rendered = parsed
        .render(&TemplateContext::sample(scope))
        .map_err(|e| ConfigError::from_template(scope, e))?;

    if rendered.is_empty() {
        return Err(ConfigError::EmptyTemplate { scope });
    }

    debug!(%scope, template, sample = %rendered, "secret template validated");
    Ok(parsed)
}
