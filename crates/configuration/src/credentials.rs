//! Resolution of credential references.
//!
//! Drill sources carry no credentials, but the plugin factory receives a
//! credentials service like every other source type does.

use std::collections::HashMap;

use thiserror::Error;

/// Turns a credential reference into its secret value.
pub trait CredentialsService {
    fn resolve(&self, reference: &str) -> Result<String, CredentialsError>;
}

#[derive(Debug, Error)]
pub enum CredentialsError {
    #[error("the credential {0:?} could not be resolved")]
    Unresolved(String),
    #[error("the credential {reference:?} is not valid unicode")]
    NotUnicode { reference: String },
}

/// Resolves references as process environment variables.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessCredentials;

impl CredentialsService for ProcessCredentials {
    fn resolve(&self, reference: &str) -> Result<String, CredentialsError> {
        std::env::var(reference).map_err(|err| match err {
            std::env::VarError::NotPresent => CredentialsError::Unresolved(reference.to_string()),
            std::env::VarError::NotUnicode(_) => CredentialsError::NotUnicode {
                reference: reference.to_string(),
            },
        })
    }
}

/// A fixed set of credentials, mostly useful for tests.
pub type FixedCredentials = HashMap<String, String>;

impl CredentialsService for FixedCredentials {
    fn resolve(&self, reference: &str) -> Result<String, CredentialsError> {
        self.get(reference)
            .cloned()
            .ok_or_else(|| CredentialsError::Unresolved(reference.to_string()))
    }
}

/// Resolves nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCredentials;

impl CredentialsService for NoCredentials {
    fn resolve(&self, reference: &str) -> Result<String, CredentialsError> {
        Err(CredentialsError::Unresolved(reference.to_string()))
    }
}
