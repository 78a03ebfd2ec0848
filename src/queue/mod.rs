//! Parameter lookup and message enqueue

pub mod helper;
pub mod sqs;
pub mod ssm;

pub use helper::QueueHelper;
pub use sqs::{MessageQueue, SqsMessageQueue};
pub use ssm::{ParameterStore, SsmParameterStore};
