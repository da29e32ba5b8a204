//! # Validation
//!
//! Startup checks for the Secrets Manager credential backend: the explicit
//! credential triple and each scope's path template.

mod credentials;
mod template;

pub use credentials::validate_credentials;
pub use template::validate_template;
