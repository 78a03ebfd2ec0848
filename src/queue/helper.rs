use aws_config::Region;
use tracing::{debug, info};

use super::sqs::{MessageQueue, SqsMessageQueue};
use super::ssm::{ParameterStore, SsmParameterStore};
use crate::core::config::AppConfig;
use crate::core::models::SendReceipt;
use crate::errors::OrderError;

/// Resolves the destination queue from the parameter store and forwards
/// messages to it.
///
/// Holds one parameter-store client and one queue client for its lifetime.
/// The queue address itself is looked up again on every send.
#[derive(Debug, Clone)]
pub struct QueueHelper<P, Q> {
    parameters: P,
    queue: Q,
    queue_parameter: String,
}

impl QueueHelper<SsmParameterStore, SqsMessageQueue> {
    /// Builds SSM and SQS clients bound to `config.region`.
    pub async fn connect(config: &AppConfig) -> Self {
        let shared = aws_config::from_env()
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        info!(region = %config.region, parameter = %config.queue_parameter, "AWS clients ready");

        Self::new(
            SsmParameterStore::new(&shared),
            SqsMessageQueue::new(&shared),
            config.queue_parameter.clone(),
        )
    }
}

impl<P, Q> QueueHelper<P, Q>
where
    P: ParameterStore,
    Q: MessageQueue,
{
    pub fn new(parameters: P, queue: Q, queue_parameter: impl Into<String>) -> Self {
        Self {
            parameters,
            queue,
            queue_parameter: queue_parameter.into(),
        }
    }

    #[must_use]
    pub fn queue_parameter(&self) -> &str {
        &self.queue_parameter
    }

    /// Looks up the queue URL, then sends `message` to it unchanged.
    ///
    /// # Errors
    ///
    /// Returns a resolution error if the lookup fails, in which case nothing is
    /// sent, or a `QueueError` if the send fails.
    pub async fn resolve_and_send(&self, message: &str) -> Result<SendReceipt, OrderError> {
        let queue_url = self.parameters.get_parameter(&self.queue_parameter).await?;
        debug!(queue_url = %queue_url, "Resolved destination queue");

        let receipt = self.queue.send_message(&queue_url, message).await?;
        info!(
            status = receipt.status,
            message_id = receipt.message_id.as_deref().unwrap_or(""),
            "Message enqueued"
        );

        Ok(receipt)
    }
}
