// In-memory stand-ins for SSM and SQS that record every call.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use order_processor::OrderError;
use order_processor::core::models::SendReceipt;
use order_processor::queue::{MessageQueue, ParameterStore, QueueHelper};

pub const QUEUE_URL: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/orders";

#[derive(Clone, Default)]
pub struct FakeParameterStore {
    value: Option<String>,
    fail: bool,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl FakeParameterStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Self::default()
        }
    }

    /// Lookup succeeds but the parameter carries no value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lookup call itself fails, as with a missing key.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ParameterStore for FakeParameterStore {
    async fn get_parameter(&self, name: &str) -> Result<String, OrderError> {
        self.lookups.lock().unwrap().push(name.to_string());
        if self.fail {
            return Err(OrderError::ParameterError {
                name: name.to_string(),
                message: "ParameterNotFound".to_string(),
            });
        }
        self.value
            .clone()
            .ok_or_else(|| OrderError::MissingParameter(name.to_string()))
    }
}

#[derive(Clone)]
pub struct FakeQueue {
    status: u16,
    reject: bool,
    pub sent: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeQueue {
    pub fn accepting(status: u16) -> Self {
        Self {
            status,
            reject: false,
            sent: Arc::default(),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            status: 400,
            reject: true,
            sent: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageQueue for FakeQueue {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<SendReceipt, OrderError> {
        self.sent
            .lock()
            .unwrap()
            .push((queue_url.to_string(), body.to_string()));
        if self.reject {
            return Err(OrderError::QueueError {
                queue_url: queue_url.to_string(),
                status: Some(self.status),
                message: "AWS.SimpleQueueService.NonExistentQueue".to_string(),
            });
        }
        Ok(SendReceipt::new(self.status, Some("msg-1".to_string())))
    }
}

pub fn helper(
    store: &FakeParameterStore,
    queue: &FakeQueue,
) -> QueueHelper<FakeParameterStore, FakeQueue> {
    QueueHelper::new(store.clone(), queue.clone(), "OrdersQueueName")
}
