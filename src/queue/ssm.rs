use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client as SsmClient;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::operation::get_parameter::GetParameterError;
use tracing::debug;

use crate::errors::OrderError;

/// Read-only access to named configuration values.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `ParameterError` if the lookup call fails and `MissingParameter`
    /// if the parameter exists without a value.
    async fn get_parameter(&self, name: &str) -> Result<String, OrderError>;
}

/// `ParameterStore` backed by AWS Systems Manager.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: SsmClient,
}

impl SsmParameterStore {
    #[must_use]
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: SsmClient::new(shared),
        }
    }

    #[must_use]
    pub fn from_client(client: SsmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<String, OrderError> {
        debug!(parameter = %name, "Reading parameter from SSM");

        let resp = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                let not_found = e
                    .as_service_error()
                    .is_some_and(GetParameterError::is_parameter_not_found);
                let detail = DisplayErrorContext(&e);
                let message = if not_found {
                    format!("ParameterNotFound: {detail}")
                } else {
                    format!("ssm get_parameter: {detail}")
                };
                OrderError::ParameterError {
                    name: name.to_string(),
                    message,
                }
            })?;

        resp.parameter
            .and_then(|param| param.value)
            .ok_or_else(|| OrderError::MissingParameter(name.to_string()))
    }
}
