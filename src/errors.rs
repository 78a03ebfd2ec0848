use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Failed to read parameter `{name}`: {message}")]
    ParameterError { name: String, message: String },

    #[error("Parameter `{0}` has no value")]
    MissingParameter(String),

    #[error("Failed to send message to queue `{queue_url}`: {message}")]
    QueueError {
        queue_url: String,
        status: Option<u16>,
        message: String,
    },
}

impl OrderError {
    /// True when the queue address could not be resolved. No send was attempted.
    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        matches!(
            self,
            OrderError::ParameterError { .. } | OrderError::MissingParameter(_)
        )
    }

    #[must_use]
    pub fn is_submission_failure(&self) -> bool {
        matches!(self, OrderError::QueueError { .. })
    }

    /// Which step failed, for log fields.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            OrderError::ConfigError(_) => "config",
            OrderError::ParameterError { .. } | OrderError::MissingParameter(_) => "resolution",
            OrderError::QueueError { .. } => "submission",
        }
    }

    /// HTTP status reported by the queue service, if it answered at all.
    #[must_use]
    pub fn queue_status(&self) -> Option<u16> {
        match self {
            OrderError::QueueError { status, .. } => *status,
            _ => None,
        }
    }
}
