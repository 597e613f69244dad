use super::load_session;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client;
use tracing::debug;

/// Returns an SQS client and the session it was built from.
pub async fn sqs_conn(region: &str) -> (Client, SdkConfig) {
    let session = load_session(region).await;
    debug!(region, "SQS client ready");
    (Client::new(&session), session)
}
