//! AWS Secrets Manager store.
//!
//! Authenticates with the static credential pair from the pull
//! configuration and issues a single `GetSecretValue` call. Transport,
//! request signing and transient-fault retries belong to the AWS SDK.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_secretsmanager::config::Credentials;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::builders::GetSecretValueFluentBuilder;
use aws_sdk_secretsmanager::operation::get_secret_value::{
    GetSecretValueError, GetSecretValueOutput,
};
use aws_sdk_secretsmanager::Client;
use tokio::runtime::Runtime;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{SecretRequest, SecretStore, SecretValue};
use crate::core::domain::SyncConfig;
use crate::error::{Result, StoreError};

/// Provider name attached to the static credentials.
const CREDENTIALS_PROVIDER: &str = "envpull";

/// AWS Secrets Manager client bound to one region and credential pair.
///
/// The SDK is async; the store owns a current-thread runtime and blocks
/// on each call.
pub struct AwsSecretsManager {
    runtime: Runtime,
    client: Client,
}

impl AwsSecretsManager {
    /// Build a client for the configured region and credentials.
    ///
    /// No request is sent until [`SecretStore::get_secret_value`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Runtime` if the async runtime cannot start.
    pub fn connect(config: &SyncConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| StoreError::Runtime(e.to_string()))?;

        debug!(region = %config.region(), "configuring AWS Secrets Manager client");

        let credentials = Credentials::new(
            config.credential_id(),
            config.credential_key(),
            None,
            None,
            CREDENTIALS_PROVIDER,
        );

        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region().to_string()))
                .credentials_provider(credentials)
                .load(),
        );

        Ok(Self {
            runtime,
            client: Client::new(&sdk_config),
        })
    }

    /// Region the client is bound to.
    pub fn region(&self) -> Option<&str> {
        self.client.config().region().map(|r| r.as_ref())
    }
}

impl SecretStore for AwsSecretsManager {
    fn get_secret_value(&self, request: &SecretRequest) -> Result<SecretValue> {
        trace!(
            secret_id = %request.secret_id,
            version_stage = %request.version_stage,
            "sending GetSecretValue"
        );

        let output = self
            .runtime
            .block_on(build_request(&self.client, request).send())
            .map_err(|e| {
                classify_error(
                    &request.secret_id,
                    e.as_service_error(),
                    DisplayErrorContext(&e).to_string(),
                )
            })?;

        trace!(
            has_string = output.secret_string().is_some(),
            has_binary = output.secret_binary().is_some(),
            "GetSecretValue returned"
        );

        Ok(secret_value(&output))
    }
}

/// `GetSecretValue` call for `request`, ready to send.
fn build_request(client: &Client, request: &SecretRequest) -> GetSecretValueFluentBuilder {
    client
        .get_secret_value()
        .secret_id(&request.secret_id)
        .version_stage(&request.version_stage)
}

/// Map a failed call to a store error. Only a modeled
/// `ResourceNotFoundException` counts as not-found.
fn classify_error(
    secret: &str,
    service: Option<&GetSecretValueError>,
    context: String,
) -> StoreError {
    if service.is_some_and(GetSecretValueError::is_resource_not_found_exception) {
        StoreError::NotFound(secret.to_string())
    } else {
        StoreError::Fetch {
            secret: secret.to_string(),
            message: context,
        }
    }
}

fn secret_value(output: &GetSecretValueOutput) -> SecretValue {
    SecretValue {
        string: output
            .secret_string()
            .map(|s| Zeroizing::new(s.to_string())),
        binary: output.secret_binary().is_some(),
        version_id: output.version_id().map(str::to_string),
    }
}

impl std::fmt::Debug for AwsSecretsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsManager")
            .field("region", &self.region())
            .finish()
    }
}
