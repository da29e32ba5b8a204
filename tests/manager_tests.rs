//! # Manager Tests
//!
//! End-to-end checks of `Manager::is_configured` and `Manager::validate`
//! through the public API.
//!
//! These tests verify:
//! - Configuration gate driven by the region only
//! - Every credential triple combination
//! - Empty, literal, less specialized and misspelled templates at each scope
//! - Validation has no hidden state

use secretsmanager_creds::constants::{
    DEFAULT_PIPELINE_SECRET_TEMPLATE, DEFAULT_SHARED_SECRET_TEMPLATE, DEFAULT_TEAM_SECRET_TEMPLATE,
};
use secretsmanager_creds::{ConfigError, Manager, Scope};

fn default_manager() -> Manager {
    let manager = Manager::new("test-region");
    assert_eq!(manager.pipeline_secret_template, DEFAULT_PIPELINE_SECRET_TEMPLATE);
    assert_eq!(manager.team_secret_template, DEFAULT_TEAM_SECRET_TEMPLATE);
    assert_eq!(manager.shared_secret_template, DEFAULT_SHARED_SECRET_TEMPLATE);
    manager
}

fn with_template(scope: Scope, template: &str) -> Manager {
    let mut manager = default_manager();
    let field = match scope {
        Scope::Pipeline => &mut manager.pipeline_secret_template,
        Scope::Team => &mut manager.team_secret_template,
        Scope::Shared => &mut manager.shared_secret_template,
    };
    *field = template.to_string();
    manager
}

#[test]
fn test_is_configured_fails_on_empty_manager() {
    assert!(!Manager::default().is_configured());
}

#[test]
fn test_is_configured_passes_with_region() {
    let manager = Manager {
        aws_region: "test-region".to_string(),
        ..Manager::default()
    };
    assert!(manager.is_configured());
}

#[test]
fn test_is_configured_ignores_validation_outcome() {
    let mut manager = default_manager();
    manager.aws_session_token = "token".to_string().into();
    manager.shared_secret_template = String::new();

    assert!(manager.validate().is_err());
    assert!(manager.is_configured());
}

#[test]
fn test_validate_passes_on_default_parameters() {
    assert_eq!(default_manager().validate(), Ok(()));
}

#[test]
fn test_validate_passes_with_full_credentials() {
    let cases = vec![("access", "secret", "token"), ("access", "secret", "")];

    for (access, secret, token) in cases {
        let mut manager = default_manager();
        manager.aws_access_key_id = access.to_string();
        manager.aws_secret_access_key = secret.to_string().into();
        manager.aws_session_token = token.to_string().into();

        assert!(
            manager.validate().is_ok(),
            "({access:?}, {secret:?}, {token:?}) should pass"
        );
    }
}

#[test]
fn test_validate_fails_on_partial_credentials() {
    let cases = vec![
        ("access", "", ""),
        ("access", "", "token"),
        ("", "secret", ""),
        ("", "secret", "token"),
        ("", "", "token"),
    ];

    for (access, secret, token) in cases {
        let mut manager = default_manager();
        manager.aws_access_key_id = access.to_string();
        manager.aws_secret_access_key = secret.to_string().into();
        manager.aws_session_token = token.to_string().into();

        let result = manager.validate();
        assert!(
            matches!(result, Err(ConfigError::PartialCredentials(_))),
            "({access:?}, {secret:?}, {token:?}) should fail, got {result:?}"
        );
    }
}

#[test]
fn test_validate_accepts_exactly_legal_credential_triples() {
    let values = ["", "x"];

    for access in values {
        for secret in values {
            for token in values {
                let mut manager = default_manager();
                manager.aws_access_key_id = access.to_string();
                manager.aws_secret_access_key = secret.to_string().into();
                manager.aws_session_token = token.to_string().into();

                let legal = (access.is_empty() && secret.is_empty() && token.is_empty())
                    || (!access.is_empty() && !secret.is_empty());
                assert_eq!(
                    manager.validate().is_ok(),
                    legal,
                    "({access:?}, {secret:?}, {token:?})"
                );
            }
        }
    }
}

#[test]
fn test_validate_passes_on_less_specialized_templates() {
    for scope in [Scope::Pipeline, Scope::Team, Scope::Shared] {
        assert!(
            with_template(scope, "{{.Secret}}").validate().is_ok(),
            "{{{{.Secret}}}} should pass as the {scope} template"
        );
    }
}

#[test]
fn test_validate_passes_on_templates_without_specialization() {
    for scope in Scope::ALL {
        assert!(
            with_template(scope, "var").validate().is_ok(),
            "literal should pass as the {scope} template"
        );
    }
}

#[test]
fn test_validate_fails_on_empty_templates() {
    for scope in Scope::ALL {
        assert_eq!(
            with_template(scope, "").validate(),
            Err(ConfigError::EmptyTemplate { scope })
        );
    }
}

#[test]
fn test_validate_fails_on_invalid_parameters() {
    for scope in Scope::ALL {
        assert_eq!(
            with_template(scope, "{{.Teams}}").validate(),
            Err(ConfigError::ForbiddenVariable {
                scope,
                name: "Teams".to_string(),
            })
        );
    }
}

#[test]
fn test_validate_fails_on_variables_from_narrower_scopes() {
    let cases = vec![
        (Scope::Team, "/{{.Team}}/{{.Pipeline}}/{{.Secret}}", "Pipeline"),
        (Scope::Shared, "/{{.Team}}/{{.Secret}}", "Team"),
        (Scope::Shared, "/{{.Pipeline}}/{{.Secret}}", "Pipeline"),
    ];

    for (scope, template, name) in cases {
        assert_eq!(
            with_template(scope, template).validate(),
            Err(ConfigError::ForbiddenVariable {
                scope,
                name: name.to_string(),
            }),
            "'{template}' should be rejected at {scope}"
        );
    }
}

#[test]
fn test_validate_fails_on_malformed_templates() {
    for scope in Scope::ALL {
        let result = with_template(scope, "/concourse/{{.Secret").validate();
        assert!(
            matches!(result, Err(ConfigError::MalformedTemplate { scope: s, .. }) if s == scope),
            "unclosed action should be malformed at {scope}, got {result:?}"
        );
    }
}

#[test]
fn test_validate_is_idempotent() {
    let valid = default_manager();
    let invalid = with_template(Scope::Team, "{{.Teams}}");
    let valid_before = valid.clone();
    let invalid_before = invalid.clone();

    assert_eq!(valid.validate(), valid.validate());
    assert_eq!(invalid.validate(), invalid.validate());
    assert_eq!(valid, valid_before);
    assert_eq!(invalid, invalid_before);
}

#[test]
fn test_validated_manager_is_shareable_across_threads() {
    let manager = default_manager();
    let lookup = std::sync::Arc::new(manager.lookup_factory().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let lookup = std::sync::Arc::clone(&lookup);
            std::thread::spawn(move || {
                let team = format!("team-{i}");
                lookup
                    .lookup_paths(&team, Some("deploy"))
                    .first()
                    .unwrap()
                    .variable_to_secret_path("db")
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("/concourse/team-{i}/deploy/db")
        );
    }
}

#[test]
fn test_error_messages_name_the_scope() {
    let message = with_template(Scope::Team, "").validate().unwrap_err().to_string();
    assert_eq!(message, "team secret template must not be empty");

    let message = with_template(Scope::Shared, "{{.Team}}")
        .validate()
        .unwrap_err()
        .to_string();
    assert!(message.starts_with("shared secret template"), "{message}");
    assert!(message.contains("`Team`"), "{message}");
}
