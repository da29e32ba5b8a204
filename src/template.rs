//! # Path Templates
//!
//! A deliberately small template engine for secret lookup paths.
//!
//! A template is literal text interleaved with field references written as
//! `{{.Name}}`. There are no conditionals, pipelines or function calls: any
//! action other than a single field reference is rejected at parse time.
//!
//! Parsing only checks syntax. Whether a field may be used is decided when
//! rendering against a [`TemplateContext`], which exposes exactly the
//! variables its scope permits. Validation dry-renders against
//! [`TemplateContext::sample`], so what the validator accepts is precisely
//! what the renderer can produce.

use crate::error::TemplateError;
use crate::scope::{Scope, Variable};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Body of a valid action, after surrounding whitespace is trimmed
///
/// Field names follow identifier rules: a Unicode letter or underscore, then
/// letters, digits or underscores.
const FIELD_PATTERN: &str = r"^\.(?P<field>[\p{L}_][\p{L}\p{N}_]*)$";

static FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FIELD_PATTERN).expect("Failed to compile field pattern"));

/// One parsed piece of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text copied to the output unchanged
    Literal(String),
    /// Name of a field to substitute, without the leading dot
    Field(String),
}

/// A parsed path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretTemplate {
    source: String,
    tokens: Vec<Token>,
}

impl SecretTemplate {
    /// Parse `source` into literal and field tokens
    ///
    /// # Errors
    /// Returns [`TemplateError::Malformed`] for an unclosed `{{`, an empty
    /// action, a bare `{{.}}`, or any action that is not a single field
    /// reference. Trim markers (`{{- .Secret -}}`), comments, pipelines,
    /// function calls and nested fields are all malformed. A well-formed
    /// reference to a field that does not exist, such as `{{.Équipe}}`, is
    /// accepted here and rejected when rendered.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while let Some(found) = source[cursor..].find(OPEN) {
            let open = cursor + found;
            if open > cursor {
                tokens.push(Token::Literal(source[cursor..open].to_string()));
            }

            let body_start = open + OPEN.len();
            let close = source[body_start..]
                .find(CLOSE)
                .map(|i| body_start + i)
                .ok_or_else(|| TemplateError::Malformed {
                    offset: open,
                    reason: "unclosed action, missing `}}`".to_string(),
                })?;

            let action = source[body_start..close].trim();
            tokens.push(Token::Field(parse_action(action, open)?));
            cursor = close + CLOSE.len();
        }

        if cursor < source.len() {
            tokens.push(Token::Literal(source[cursor..].to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    /// The template text as it was written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Field names referenced by this template, in order of appearance
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(|token| match token {
            Token::Field(name) => Some(name.as_str()),
            Token::Literal(_) => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Substitute every field reference from `context`
    ///
    /// # Errors
    /// Fails on the first field the context does not expose, or exposes with
    /// an empty value.
    pub fn render(&self, context: &TemplateContext) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(self.source.len());
        for token in &self.tokens {
            match token {
                Token::Literal(text) => rendered.push_str(text),
                Token::Field(name) => rendered.push_str(context.lookup(name)?),
            }
        }
        Ok(rendered)
    }
}

fn parse_action(action: &str, offset: usize) -> Result<String, TemplateError> {
    if action.is_empty() {
        return Err(TemplateError::Malformed {
            offset,
            reason: "missing value for action".to_string(),
        });
    }

    if action == "." {
        return Err(TemplateError::Malformed {
            offset,
            reason: "`{{.}}` does not name a field".to_string(),
        });
    }

    FIELD_REGEX
        .captures(action)
        .and_then(|captures| captures.name("field"))
        .map(|field| field.as_str().to_string())
        .ok_or_else(|| TemplateError::Malformed {
            offset,
            reason: format!(
                "unsupported action `{action}`, only field references like `{{{{.Secret}}}}` are allowed"
            ),
        })
}

impl FromStr for SecretTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SecretTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Values a template may draw from when rendered at a given scope
///
/// Only the variables the scope permits are visible. Asking for any other
/// field, including a permitted one at a broader scope's context, fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    scope: Scope,
    team: String,
    pipeline: String,
    secret: String,
}

impl TemplateContext {
    pub fn shared(secret: impl Into<String>) -> Self {
        Self {
            scope: Scope::Shared,
            team: String::new(),
            pipeline: String::new(),
            secret: secret.into(),
        }
    }

    pub fn team(team: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            scope: Scope::Team,
            team: team.into(),
            pipeline: String::new(),
            secret: secret.into(),
        }
    }

    pub fn pipeline(
        team: impl Into<String>,
        pipeline: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            scope: Scope::Pipeline,
            team: team.into(),
            pipeline: pipeline.into(),
            secret: secret.into(),
        }
    }

    /// Synthetic context binding each permitted variable to its own name
    #[must_use]
    pub fn sample(scope: Scope) -> Self {
        let bind = |variable: Variable| {
            if scope.permits(variable) {
                variable.name().to_string()
            } else {
                String::new()
            }
        };

        Self {
            scope,
            team: bind(Variable::Team),
            pipeline: bind(Variable::Pipeline),
            secret: bind(Variable::Secret),
        }
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Resolve a field reference to its bound value
    ///
    /// # Errors
    /// [`TemplateError::ForbiddenVariable`] when `name` is unknown or not
    /// permitted at this scope, [`TemplateError::MissingValue`] when it is
    /// permitted but bound to an empty string.
    pub fn lookup(&self, name: &str) -> Result<&str, TemplateError> {
        let variable = Variable::from_name(name)
            .filter(|variable| self.scope.permits(*variable))
            .ok_or_else(|| TemplateError::ForbiddenVariable {
                name: name.to_string(),
                scope: self.scope,
            })?;

        let value = match variable {
            Variable::Team => &self.team,
            Variable::Pipeline => &self.pipeline,
            Variable::Secret => &self.secret,
        };

        if value.is_empty() {
            return Err(TemplateError::MissingValue {
                name: variable.name(),
            });
        }

        Ok(value)
    }
}
