//! Secret store access.
//!
//! Abstracts the remote secret store behind a trait so the sync operation
//! can run against AWS Secrets Manager in production and against in-memory
//! or on-disk stand-ins in tests.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Select it in `backend::connect`
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl SecretStore for Vault {
//!     fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue> {
//!         // Read from Vault
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::core::constants::CURRENT_VERSION_STAGE;
use crate::core::types::{SecretId, VersionId, VersionStage};
use crate::error::Result;

mod aws;
mod backend;

#[cfg(feature = "test-store")]
mod fixture;

pub use aws::AwsSecretsManager;
pub use backend::connect;

#[cfg(feature = "test-store")]
pub use fixture::{FixtureStore, FIXTURE_DIR_ENV};

/// Remote secret store.
pub trait SecretStore {
    /// Fetch one version of a secret.
    ///
    /// # Arguments
    ///
    /// * `request` - Secret identifier and version stage
    ///
    /// # Returns
    ///
    /// The raw response. A missing string payload is not an error here;
    /// callers decide what to do with it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the secret doesn't exist or the call fails.
    fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue>;
}

impl<T: SecretStore + ?Sized> SecretStore for &T {
    fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue> {
        (**self).get_secret_value(request)
    }
}

impl<T: SecretStore + ?Sized> SecretStore for Box<T> {
    fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue> {
        (**self).get_secret_value(request)
    }
}

/// A `GetSecretValue` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRequest {
    pub secret_id: SecretId,
    pub version_stage: VersionStage,
}

impl SecretRequest {
    /// Request the live (`AWSCURRENT`) version of a secret.
    pub fn current(secret_id: impl Into<SecretId>) -> Self {
        Self {
            secret_id: secret_id.into(),
            version_stage: CURRENT_VERSION_STAGE.to_string(),
        }
    }
}

/// What the store returned for a secret version.
#[derive(Default)]
pub struct SecretValue {
    /// String payload, if the secret stores one
    pub string: Option<Zeroizing<String>>,
    /// Whether a binary payload was present
    pub binary: bool,
    /// Version id of the returned version
    pub version_id: Option<VersionId>,
}

impl SecretValue {
    /// A response carrying a string payload.
    #[cfg(any(test, feature = "test-store"))]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            string: Some(Zeroizing::new(value.into())),
            ..Self::default()
        }
    }

    /// A response carrying only binary data.
    #[cfg(any(test, feature = "test-store"))]
    pub fn binary() -> Self {
        Self {
            binary: true,
            ..Self::default()
        }
    }
}

/// In-memory store for unit tests.
///
/// Answers every request with a fixed response and records each call.
#[cfg(test)]
pub struct MockStore {
    response: std::cell::RefCell<Option<Result<SecretValue>>>,
    pub requests: std::cell::RefCell<Vec<SecretRequest>>,
}

#[cfg(test)]
impl MockStore {
    pub fn returning(value: impl Into<String>) -> Self {
        Self::with(Ok(SecretValue::text(value)))
    }

    pub fn with(response: Result<SecretValue>) -> Self {
        Self {
            response: std::cell::RefCell::new(Some(response)),
            requests: std::cell::RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[cfg(test)]
impl SecretStore for MockStore {
    fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue> {
        self.requests.borrow_mut().push(request.clone());

        // Successful responses are replayed so repeated pulls see the same secret.
        let response = self.response.borrow_mut().take();
        match response {
            Some(Ok(value)) => {
                let replay = SecretValue {
                    string: value.string.clone(),
                    binary: value.binary,
                    version_id: value.version_id.clone(),
                };
                *self.response.borrow_mut() = Some(Ok(replay));
                Ok(value)
            }
            Some(Err(e)) => Err(e),
            None => Err(crate::error::StoreError::NotFound(request.secret_id.clone()).into()),
        }
    }
}
