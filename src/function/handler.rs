use lambda_runtime::{Error, LambdaEvent};
use tracing::{error, info};

use crate::errors::OrderError;
use crate::queue::{MessageQueue, ParameterStore, QueueHelper};

pub use self::function_handler as handler;

/// Forwards `payload` to the orders queue and returns the status name.
///
/// # Errors
///
/// Propagates any lookup or send failure from the helper.
pub async fn process_order<P, Q>(
    helper: &QueueHelper<P, Q>,
    payload: &str,
) -> Result<String, OrderError>
where
    P: ParameterStore,
    Q: MessageQueue,
{
    let receipt = helper.resolve_and_send(payload).await?;
    Ok(receipt.status_text())
}

/// Lambda handler for the order processor entrypoint.
///
/// # Errors
///
/// Returns the helper's error to the runtime, which reports it to the invoker.
#[tracing::instrument(level = "info", skip(helper, event), fields(request_id = %event.context.request_id))]
pub async fn function_handler<P, Q>(
    helper: &QueueHelper<P, Q>,
    event: LambdaEvent<String>,
) -> Result<String, Error>
where
    P: ParameterStore,
    Q: MessageQueue,
{
    let (payload, _context) = event.into_parts();
    info!(payload_len = payload.len(), "Order processor received payload");

    process_order(helper, &payload).await.map_err(|e| {
        error!(stage = e.stage(), "Order processing failed: {}", e);
        Error::from(e)
    })
}
