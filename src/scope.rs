//! # Secret Scopes
//!
//! The three levels at which a secret is namespaced, and the template
//! variables each level may reference.
//!
//! Scopes are ordered from least to most specialized. Every variable is
//! introduced by exactly one scope and stays available to every more
//! specialized scope, so the permitted sets nest:
//!
//! | Scope      | Variables                      |
//! |------------|--------------------------------|
//! | `shared`   | `Secret`                       |
//! | `team`     | `Team`, `Secret`               |
//! | `pipeline` | `Team`, `Pipeline`, `Secret`   |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level at which a secret lookup path is namespaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Shared by every team
    Shared,
    /// Owned by a single team
    Team,
    /// Owned by a single pipeline of a team
    Pipeline,
}

impl Scope {
    /// All scopes, least specialized first
    pub const ALL: [Scope; 3] = [Scope::Shared, Scope::Team, Scope::Pipeline];

    /// Whether a template at this scope may reference `variable`
    #[must_use]
    pub fn permits(self, variable: Variable) -> bool {
        variable.introduced_by() <= self
    }

    /// Permitted variables in declaration order (`Team`, `Pipeline`, `Secret`)
    #[must_use]
    pub fn variables(self) -> Vec<Variable> {
        Variable::ALL
            .into_iter()
            .filter(|variable| self.permits(*variable))
            .collect()
    }

    /// Lowercase name used in error messages and summaries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::Shared => "shared",
            Scope::Team => "team",
            Scope::Pipeline => "pipeline",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placeholder a path template may reference as `{{.Name}}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variable {
    Team,
    Pipeline,
    Secret,
}

impl Variable {
    pub const ALL: [Variable; 3] = [Variable::Team, Variable::Pipeline, Variable::Secret];

    /// Placeholder name as written inside a template
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variable::Team => "Team",
            Variable::Pipeline => "Pipeline",
            Variable::Secret => "Secret",
        }
    }

    /// Exact, case-sensitive lookup by placeholder name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Variable::ALL.into_iter().find(|variable| variable.name() == name)
    }

    /// Least specialized scope that may reference this variable
    #[must_use]
    pub const fn introduced_by(self) -> Scope {
        match self {
            Variable::Secret => Scope::Shared,
            Variable::Team => Scope::Team,
            Variable::Pipeline => Scope::Pipeline,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
