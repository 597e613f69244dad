use super::load_session;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client;
use tracing::debug;

/// Returns a DynamoDB client and the session it was built from.
pub async fn dynamodb_conn(region: &str) -> (Client, SdkConfig) {
    let session = load_session(region).await;
    debug!(region, "DynamoDB client ready");
    (Client::new(&session), session)
}
