use std::env;

use crate::errors::OrderError;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_QUEUE_PARAMETER: &str = "OrdersQueueName";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Region both the parameter store and queue clients are bound to.
    pub region: String,
    /// Name of the parameter holding the destination queue URL.
    pub queue_parameter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            queue_parameter: DEFAULT_QUEUE_PARAMETER.to_string(),
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns an error if a variable is set but empty.
    pub fn from_env() -> Result<Self, OrderError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to defaults
    /// for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, OrderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let region =
            non_blank(&lookup, "ORDERS_REGION")?.unwrap_or_else(|| DEFAULT_REGION.into());
        let queue_parameter = non_blank(&lookup, "ORDERS_QUEUE_PARAMETER")?
            .unwrap_or_else(|| DEFAULT_QUEUE_PARAMETER.into());

        Ok(Self {
            region,
            queue_parameter,
        })
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub fn with_queue_parameter(mut self, name: impl Into<String>) -> Self {
        self.queue_parameter = name.into();
        self
    }
}

fn non_blank<F>(lookup: &F, key: &str) -> Result<Option<String>, OrderError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => {
            Err(OrderError::ConfigError(format!("{key} is set but empty")))
        }
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}
