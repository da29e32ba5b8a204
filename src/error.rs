//! # Errors
//!
//! Every configuration defect is reported as its own variant so operators can
//! fix the offending field without guessing. None of these are transient.

use crate::scope::Scope;
use thiserror::Error;

/// Errors raised while parsing or rendering a path template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder syntax could not be parsed
    #[error("malformed template at byte {offset}: {reason}")]
    Malformed { offset: usize, reason: String },

    /// Placeholder names a field that is unknown or not permitted at this scope
    #[error("unknown or forbidden variable `{name}` for scope `{scope}`")]
    ForbiddenVariable { name: String, scope: Scope },

    /// Placeholder is permitted but bound to an empty value
    #[error("no value bound for variable `{name}`")]
    MissingValue { name: &'static str },
}

/// Errors raised by `Manager::validate`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Access key, secret key and session token form an illegal combination
    #[error("partial AWS credentials: {0}")]
    PartialCredentials(&'static str),

    /// A scope's template is empty after defaulting
    #[error("{scope} secret template must not be empty")]
    EmptyTemplate { scope: Scope },

    /// A scope's template has invalid placeholder syntax
    #[error("{scope} secret template is malformed: {source}")]
    MalformedTemplate {
        scope: Scope,
        #[source]
        source: TemplateError,
    },

    /// A scope's template references a variable outside its permitted set
    #[error("{scope} secret template references unknown or forbidden variable `{name}`")]
    ForbiddenVariable { scope: Scope, name: String },
}

impl ConfigError {
    /// Attributes a template error to the scope whose template produced it
    pub(crate) fn from_template(scope: Scope, error: TemplateError) -> Self {
        match error {
            TemplateError::ForbiddenVariable { name, .. } => {
                ConfigError::ForbiddenVariable { scope, name }
            }
            other => ConfigError::MalformedTemplate {
                scope,
                source: other,
            },
        }
    }
}
