//! # Secret Lookup Paths
//!
//! Binds a validated template to the team and pipeline of a build so the
//! secret-fetch client only has to supply the secret name.
//!
//! [`SecretLookupPaths`] holds the three templates parsed once at startup.
//! Building the per-build paths from it only clones tokens and binds names.

use crate::error::TemplateError;
use crate::scope::Scope;
use crate::template::{SecretTemplate, TemplateContext};

/// One candidate location for a secret, tied to a single scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretLookupPath {
    scope: Scope,
    template: SecretTemplate,
    team: String,
    pipeline: String,
}

impl SecretLookupPath {
    pub fn shared(template: SecretTemplate) -> Self {
        Self {
            scope: Scope::Shared,
            template,
            team: String::new(),
            pipeline: String::new(),
        }
    }

    pub fn team(template: SecretTemplate, team: impl Into<String>) -> Self {
        Self {
            scope: Scope::Team,
            template,
            team: team.into(),
            pipeline: String::new(),
        }
    }

    pub fn pipeline(
        template: SecretTemplate,
        team: impl Into<String>,
        pipeline: impl Into<String>,
    ) -> Self {
        Self {
            scope: Scope::Pipeline,
            template,
            team: team.into(),
            pipeline: pipeline.into(),
        }
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.scope
    }

    #[must_use]
    pub fn template(&self) -> &SecretTemplate {
        &self.template
    }

    /// Render the key to query the secret store with
    ///
    /// # Errors
    /// Fails when a variable the template references is bound to an empty
    /// value, e.g. an empty secret name. A template that passed validation
    /// for this scope never fails for structural reasons.
    pub fn variable_to_secret_path(&self, secret: &str) -> Result<String, TemplateError> {
        let context = match self.scope {
            Scope::Shared => TemplateContext::shared(secret),
            Scope::Team => TemplateContext::team(self.team.as_str(), secret),
            Scope::Pipeline => {
                TemplateContext::pipeline(self.team.as_str(), self.pipeline.as_str(), secret)
            }
        };
        self.template.render(&context)
    }
}

/// The parsed pipeline, team and shared templates of a validated manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretLookupPaths {
    pipeline: SecretTemplate,
    team: SecretTemplate,
    shared: SecretTemplate,
}

impl SecretLookupPaths {
    /// Templates must already have passed validation for their scope
    pub(crate) fn new(pipeline: SecretTemplate, team: SecretTemplate, shared: SecretTemplate) -> Self {
        Self {
            pipeline,
            team,
            shared,
        }
    }

    #[must_use]
    pub fn template(&self, scope: Scope) -> &SecretTemplate {
        match scope {
            Scope::Shared => &self.shared,
            Scope::Team => &self.team,
            Scope::Pipeline => &self.pipeline,
        }
    }

    /// Candidate lookup paths for a build, most specialized first
    ///
    /// The pipeline path is only included when `pipeline` is non-empty.
    #[must_use]
    pub fn lookup_paths(&self, team: &str, pipeline: Option<&str>) -> Vec<SecretLookupPath> {
        let mut paths = Vec::with_capacity(3);

        if let Some(pipeline) = pipeline.filter(|p| !p.is_empty()) {
            paths.push(SecretLookupPath::pipeline(
                self.pipeline.clone(),
                team,
                pipeline,
            ));
        }
        paths.push(SecretLookupPath::team(self.team.clone(), team));
        paths.push(SecretLookupPath::shared(self.shared.clone()));

        paths
    }
}
