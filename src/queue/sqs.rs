use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::error::DisplayErrorContext;

use crate::core::models::SendReceipt;
use crate::errors::OrderError;

/// SQS answers a successful `SendMessage` with 200; the SDK only yields `Ok`
/// for a successful response.
const SEND_OK_STATUS: u16 = 200;

/// Write-only access to a message queue.
#[async_trait]
pub trait MessageQueue: Send + Sync {
    /// # Errors
    ///
    /// Returns `QueueError` if the queue rejects the message or cannot be reached.
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<SendReceipt, OrderError>;
}

/// `MessageQueue` backed by AWS SQS.
#[derive(Debug, Clone)]
pub struct SqsMessageQueue {
    client: SqsClient,
}

impl SqsMessageQueue {
    #[must_use]
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: SqsClient::new(shared),
        }
    }

    #[must_use]
    pub fn from_client(client: SqsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageQueue for SqsMessageQueue {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<SendReceipt, OrderError> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| OrderError::QueueError {
                queue_url: queue_url.to_string(),
                status: e.raw_response().map(|raw| raw.status().as_u16()),
                message: format!("sqs send_message: {}", DisplayErrorContext(&e)),
            })?;

        Ok(SendReceipt::new(
            SEND_OK_STATUS,
            output.message_id().map(str::to_string),
        ))
    }
}
