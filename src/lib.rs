/// Order processor - forwards incoming orders to an SQS queue.
///
/// Each invocation receives a string payload, looks up the destination queue
/// URL in SSM Parameter Store, and sends the payload to that queue unchanged.
/// The handler returns the textual status of the send, e.g. `OK`.
///
/// # Architecture
///
/// - AWS Lambda for serverless execution
/// - SSM Parameter Store for the queue address (`OrdersQueueName` by default)
/// - SQS as the destination queue
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use order_processor::core::config::AppConfig;
/// use order_processor::queue::QueueHelper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     order_processor::setup_logging();
///
///     let config = AppConfig::default();
///     let helper = QueueHelper::connect(&config).await;
///
///     let status = order_processor::function::process_order(&helper, "hello-world").await?;
///     println!("Send status: {status}");
///     Ok(())
/// }
/// ```
pub mod core;
pub mod errors;
pub mod function;
pub mod queue;

pub use errors::OrderError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The filter is read from `RUST_LOG`, defaulting to `info` (or `debug` with
/// the `debug-logs` feature). Calling this more than once is harmless.
///
/// # Example
///
/// ```
/// order_processor::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let default_level = if cfg!(feature = "debug-logs") {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
