// Lambda bootstrap entry point for the order processor

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use order_processor::core::config::AppConfig;
use order_processor::function::handler;
use order_processor::queue::QueueHelper;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    order_processor::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // Clients live for the whole execution environment and are shared by every invocation.
    let helper = QueueHelper::connect(&config).await;
    let helper = &helper;

    run(service_fn(move |event: LambdaEvent<String>| async move {
        handler(helper, event).await
    }))
    .await
}
